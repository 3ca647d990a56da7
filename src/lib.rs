//! 写真に写った選手を名簿と照合するツール
//!
//! - roster: 名簿ファイル読み込み
//! - photo: 画像読み込み・縮小
//! - vision: 画像認識サービス（Rekognition）アダプタ
//! - pipeline: 検出 → 領域フィルタ → 照合

pub mod cli;
pub mod config;
pub mod error;
pub mod photo;
pub mod pipeline;
pub mod roster;
pub mod vision;
