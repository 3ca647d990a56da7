use clap::Parser;
use roster_match::{cli, config, error, pipeline, roster, vision};
use cli::Cli;
use config::Config;
use error::Result;
use pipeline::Pipeline;
use roster_match_common::{format_detected_text, format_matched_players};
use tracing::warn;
use tracing_subscriber::EnvFilter;
use vision::{RekognitionService, VisionAdapter};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(cli: &Cli) -> Config {
    let loaded = match &cli.config {
        Some(path) => Config::load_explicit(path),
        None => Config::load(),
    };

    loaded.unwrap_or_else(|e| {
        warn!("設定を読み込めないためデフォルト値を使用: {}", e);
        Config::default()
    })
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = load_config(&cli);

    println!("🏷 roster-match - 選手照合\n");

    // 1. 名簿読み込み
    println!("[1/3] 名簿を読み込み中...");
    let players = roster::load_roster_or_empty(&cli.roster);
    println!("✔ {}名を読み込み\n", players.len());

    // 2. 画像認識
    println!("[2/3] 画像認識中...");
    let service = RekognitionService::from_env(config.region.as_deref()).await;
    let adapter = VisionAdapter::new(service, config.detection_settings());
    let pipeline = Pipeline::new(adapter, config.thresholds()?, config.image_limits());
    let report = pipeline.run(&cli.image, &players).await;
    println!(
        "✔ 人物{}名、テキスト{}行（人物領域内{}行）\n",
        report.persons.len(),
        report.text_lines.len(),
        report.filtered.len()
    );

    // 3. 照合結果
    println!("[3/3] 照合結果");
    print!("{}", format_detected_text(&report.filtered));
    print!("{}", format_matched_players(&report.matched_players()));

    if cli.verbose {
        println!("\n一致理由:");
        for m in &report.matches {
            println!("  {} ← {:?}: {}", m.player.code, m.matched_text, m.reason);
        }
    }

    Ok(())
}
