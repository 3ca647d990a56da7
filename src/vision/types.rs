use roster_match_common::BoundingBox;
use serde::Deserialize;

/// 物体ラベル（例: "Person"）とそのインスタンス矩形
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelDetection {
    pub name: String,
    /// ラベル全体の信頼度 (0〜100)
    pub confidence: f32,
    #[serde(default)]
    pub instances: Vec<BoundingBox>,
}

/// テキスト検出の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TextKind {
    Line,
    Word,
}

/// テキスト検出結果（サービスの生データ）
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDetection {
    pub text: String,
    pub kind: TextKind,
    /// 信頼度 (0〜100)
    pub confidence: f32,
    #[serde(default)]
    pub bounding_box: Option<BoundingBox>,
}
