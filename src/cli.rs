use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roster-match")]
#[command(about = "写真に写った背番号・選手名をチーム名簿と照合", long_about = None)]
pub struct Cli {
    /// 画像ファイルのパス (jpg/png)
    #[arg(required = true)]
    pub image: PathBuf,

    /// 名簿ファイルのパス（タブ区切り）
    #[arg(required = true)]
    pub roster: PathBuf,

    /// 詳細ログを出力
    #[arg(short, long)]
    pub verbose: bool,

    /// 設定ファイル（デフォルト: ~/.config/roster-match/config.json）
    #[arg(long)]
    pub config: Option<PathBuf>,
}
