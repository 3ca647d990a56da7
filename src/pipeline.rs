//! 照合パイプライン
//!
//! 画像 → 人物・テキスト検出 → 人物矩形内のテキストに絞込み → 名簿照合

use crate::photo::{self, ImageLimits};
use crate::vision::{RecognitionService, VisionAdapter, VisionResult};
use roster_match_common::{
    filter_inside_any, match_players_detailed, BoundingBox, DetectedTextItem, MatchThresholds,
    PlayerMatch, PlayerRecord,
};
use std::path::Path;
use tracing::{info, warn};

/// 1枚の画像に対する処理結果
#[derive(Debug, Clone, Default)]
pub struct PipelineReport {
    pub persons: Vec<BoundingBox>,
    /// 検出した全テキスト行
    pub text_lines: Vec<DetectedTextItem>,
    /// 人物矩形内のテキスト行
    pub filtered: Vec<DetectedTextItem>,
    pub matches: Vec<PlayerMatch>,
}

impl PipelineReport {
    pub fn matched_players(&self) -> Vec<PlayerRecord> {
        self.matches.iter().map(|m| m.player.clone()).collect()
    }
}

pub struct Pipeline<S> {
    adapter: VisionAdapter<S>,
    thresholds: MatchThresholds,
    limits: ImageLimits,
}

impl<S: RecognitionService> Pipeline<S> {
    pub fn new(adapter: VisionAdapter<S>, thresholds: MatchThresholds, limits: ImageLimits) -> Self {
        Self { adapter, thresholds, limits }
    }

    /// 画像ファイルを読み込んで照合（読み込み失敗時は空のレポート）
    pub async fn run(&self, image_path: &Path, roster: &[PlayerRecord]) -> PipelineReport {
        match photo::load_image(image_path, &self.limits) {
            Ok(image) => self.run_bytes(&image.bytes, roster).await,
            Err(e) => {
                warn!("{}", e);
                PipelineReport::default()
            }
        }
    }

    /// 画像バイト列で照合
    pub async fn run_bytes(&self, image: &[u8], roster: &[PlayerRecord]) -> PipelineReport {
        let VisionResult { persons, text_lines } = self.adapter.analyze(image).await;
        let filtered = filter_inside_any(&text_lines, &persons);
        info!(
            "人物{}名の領域内にテキスト{}/{}行",
            persons.len(),
            filtered.len(),
            text_lines.len()
        );

        let matches = match_players_detailed(&filtered, roster, &self.thresholds);

        PipelineReport {
            persons,
            text_lines,
            filtered,
            matches,
        }
    }
}
