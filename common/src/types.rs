//! 照合で使う型定義
//!
//! - PlayerRecord: 名簿の1行
//! - BoundingBox: 画像相対座標（0.0〜1.0）の矩形
//! - DetectedTextItem: 画像認識で検出したテキスト行

use serde::{Deserialize, Serialize};
use std::fmt;

/// 名簿から読み込んだ選手の役割（常に固定）
pub const PLAYER_ROLE: &str = "Player";

/// 名簿の選手レコード
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    /// 選手コード（一意キー）
    pub code: String,
    /// 背番号
    pub number: String,
    /// フルネーム
    pub name: String,
    pub team: String,
    pub role: String,
}

impl PlayerRecord {
    pub fn new(code: &str, number: &str, name: &str, team: &str) -> Self {
        Self {
            code: code.to_string(),
            number: number.to_string(),
            name: name.to_string(),
            team: team.to_string(),
            role: PLAYER_ROLE.to_string(),
        }
    }

    /// 姓（フルネームの最後の単語）
    pub fn surname(&self) -> &str {
        self.name.split_whitespace().last().unwrap_or("")
    }
}

/// 画像相対座標の矩形
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "left={:.4}, top={:.4}, width={:.4}, height={:.4}",
            self.left, self.top, self.width, self.height
        )
    }
}

/// 検出テキスト（行単位）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedTextItem {
    pub text: String,
    pub bounding_box: BoundingBox,
}

impl DetectedTextItem {
    pub fn new(text: &str, bounding_box: BoundingBox) -> Self {
        Self {
            text: text.to_string(),
            bounding_box,
        }
    }
}
