//! 画像認識アダプタ
//!
//! 外部の画像認識サービスを2回呼び出す:
//! - 物体検出: "Person" ラベルのインスタンス矩形
//! - テキスト検出: 行単位のテキストと矩形
//!
//! サービスのエラーは警告を出して空の結果に置き換え、後続処理を続行させる。

mod rekognition;
mod types;

pub use rekognition::RekognitionService;
pub use types::{LabelDetection, TextDetection, TextKind};

use crate::error::Result;
use roster_match_common::{BoundingBox, DetectedTextItem};
use tracing::{debug, warn};

pub const PERSON_LABEL: &str = "Person";

/// 画像認識サービス
///
/// 実装はRekognition。テストではフェイクに差し替える。
#[allow(async_fn_in_trait)]
pub trait RecognitionService {
    /// 物体ラベルを検出（信頼度 `min_confidence` 以上、最大 `max_labels` 件）
    async fn detect_labels(&self, image: &[u8], max_labels: i32, min_confidence: f32) -> Result<Vec<LabelDetection>>;

    /// テキストを検出（行・単語の両方を含む）
    async fn detect_text(&self, image: &[u8]) -> Result<Vec<TextDetection>>;
}

/// 検出条件
#[derive(Debug, Clone, Copy)]
pub struct DetectionSettings {
    pub min_label_confidence: f32,
    pub max_labels: i32,
    pub min_text_confidence: f32,
}

impl Default for DetectionSettings {
    fn default() -> Self {
        Self {
            min_label_confidence: 80.0,
            max_labels: 20,
            min_text_confidence: 90.0,
        }
    }
}

/// 1枚の画像に対する認識結果
#[derive(Debug, Clone, Default)]
pub struct VisionResult {
    pub persons: Vec<BoundingBox>,
    pub text_lines: Vec<DetectedTextItem>,
}

pub struct VisionAdapter<S> {
    service: S,
    settings: DetectionSettings,
}

impl<S: RecognitionService> VisionAdapter<S> {
    pub fn new(service: S, settings: DetectionSettings) -> Self {
        Self { service, settings }
    }

    /// 人物の矩形を検出
    pub async fn detect_persons(&self, image: &[u8]) -> Vec<BoundingBox> {
        let labels = match self
            .service
            .detect_labels(image, self.settings.max_labels, self.settings.min_label_confidence)
            .await
        {
            Ok(labels) => labels,
            Err(e) => {
                warn!("物体検出に失敗、人物なしとして続行: {}", e);
                return Vec::new();
            }
        };
        debug!("物体検出: {}ラベル", labels.len());

        let max_labels = usize::try_from(self.settings.max_labels).unwrap_or(0);
        labels
            .into_iter()
            .take(max_labels)
            .filter(|label| label.name == PERSON_LABEL && label.confidence >= self.settings.min_label_confidence)
            .flat_map(|label| label.instances)
            .collect()
    }

    /// 信頼度の高いテキスト行を検出
    pub async fn detect_text_lines(&self, image: &[u8]) -> Vec<DetectedTextItem> {
        let detections = match self.service.detect_text(image).await {
            Ok(detections) => detections,
            Err(e) => {
                warn!("テキスト検出に失敗、テキストなしとして続行: {}", e);
                return Vec::new();
            }
        };
        debug!("テキスト検出: {}件（行・単語）", detections.len());

        detections
            .into_iter()
            .filter(|d| d.kind == TextKind::Line && d.confidence > self.settings.min_text_confidence)
            .filter_map(|d| match d.bounding_box {
                Some(bounding_box) => Some(DetectedTextItem { text: d.text, bounding_box }),
                None => {
                    debug!("矩形のないテキストを除外: {:?}", d.text);
                    None
                }
            })
            .collect()
    }

    /// 人物検出とテキスト検出を順に実行
    pub async fn analyze(&self, image: &[u8]) -> VisionResult {
        let persons = self.detect_persons(image).await;
        let text_lines = self.detect_text_lines(image).await;
        VisionResult { persons, text_lines }
    }
}
