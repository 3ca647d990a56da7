//! AWS Rekognition連携
//!
//! DetectLabels / DetectText を呼び出し、SDKの型を内部型に変換する。
//! 認証情報とリージョンはSDKの既定チェーン（環境変数、~/.aws 等）から取得。

use super::types::{LabelDetection, TextDetection, TextKind};
use super::RecognitionService;
use crate::error::{RosterMatchError, Result};
use aws_config::BehaviorVersion;
use aws_sdk_rekognition::config::Region;
use aws_sdk_rekognition::error::DisplayErrorContext;
use aws_sdk_rekognition::primitives::Blob;
use aws_sdk_rekognition::types as rk;
use aws_sdk_rekognition::Client;
use roster_match_common::BoundingBox;
use tracing::debug;

pub struct RekognitionService {
    client: Client,
}

impl RekognitionService {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// SDKの既定設定からクライアントを構築（`region` 指定時はそれを優先）
    pub async fn from_env(region: Option<&str>) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = region {
            loader = loader.region(Region::new(region.to_string()));
        }
        let sdk_config = loader.load().await;
        debug!("Rekognition region: {:?}", sdk_config.region());

        Self::new(Client::new(&sdk_config))
    }
}

fn to_image(bytes: &[u8]) -> rk::Image {
    rk::Image::builder().bytes(Blob::new(bytes.to_vec())).build()
}

fn convert_box(bbox: Option<&rk::BoundingBox>) -> Option<BoundingBox> {
    let bbox = bbox?;
    Some(BoundingBox::new(
        f64::from(bbox.left()?),
        f64::from(bbox.top()?),
        f64::from(bbox.width()?),
        f64::from(bbox.height()?),
    ))
}

fn convert_label(label: &rk::Label) -> LabelDetection {
    LabelDetection {
        name: label.name().unwrap_or_default().to_string(),
        confidence: label.confidence().unwrap_or(0.0),
        instances: label
            .instances()
            .iter()
            .filter_map(|instance| convert_box(instance.bounding_box()))
            .collect(),
    }
}

fn convert_text(detection: &rk::TextDetection) -> TextDetection {
    let kind = match detection.r#type() {
        Some(rk::TextTypes::Line) => TextKind::Line,
        _ => TextKind::Word,
    };

    TextDetection {
        text: detection.detected_text().unwrap_or_default().to_string(),
        kind,
        confidence: detection.confidence().unwrap_or(0.0),
        bounding_box: convert_box(detection.geometry().and_then(|g| g.bounding_box())),
    }
}

impl RecognitionService for RekognitionService {
    async fn detect_labels(&self, image: &[u8], max_labels: i32, min_confidence: f32) -> Result<Vec<LabelDetection>> {
        let output = self
            .client
            .detect_labels()
            .image(to_image(image))
            .max_labels(max_labels)
            .min_confidence(min_confidence)
            .send()
            .await
            .map_err(|e| RosterMatchError::RecognitionService(format!("DetectLabels: {}", DisplayErrorContext(&e))))?;

        Ok(output.labels().iter().map(convert_label).collect())
    }

    async fn detect_text(&self, image: &[u8]) -> Result<Vec<TextDetection>> {
        let output = self
            .client
            .detect_text()
            .image(to_image(image))
            .send()
            .await
            .map_err(|e| RosterMatchError::RecognitionService(format!("DetectText: {}", DisplayErrorContext(&e))))?;

        Ok(output.text_detections().iter().map(convert_text).collect())
    }
}
