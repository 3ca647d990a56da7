use crate::error::{RosterMatchError, Result};
use crate::photo::ImageLimits;
use crate::vision::DetectionSettings;
use roster_match_common::MatchThresholds;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// AWSリージョン（未指定時はSDKの既定チェーン）
    pub region: Option<String>,
    /// 姓の類似度閾値
    pub name_threshold: f64,
    /// 背番号の類似度閾値
    pub number_threshold: f64,
    pub min_label_confidence: f32,
    pub max_labels: i32,
    pub min_text_confidence: f32,
    /// Rekognitionに直接送れる画像サイズ上限
    pub max_image_bytes: usize,
    /// 上限超過時の縮小後の長辺(px)
    pub max_image_size: u32,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config = if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            serde_json::from_str(&content)?
        } else {
            Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    /// 明示指定された設定ファイルを読み込む（存在しなければエラー）
    pub fn load_explicit(config_path: &Path) -> Result<Self> {
        if !config_path.is_file() {
            return Err(RosterMatchError::Config(format!(
                "設定ファイルが見つかりません: {}",
                config_path.display()
            )));
        }
        Self::load_from(config_path)
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| RosterMatchError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("roster-match").join("config.json"))
    }

    fn validate(&self) -> Result<()> {
        self.thresholds()?;

        for (label, value) in [
            ("min_label_confidence", self.min_label_confidence),
            ("min_text_confidence", self.min_text_confidence),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(RosterMatchError::Config(format!(
                    "{}は0〜100で指定してください: {}",
                    label, value
                )));
            }
        }

        if self.max_labels < 1 {
            return Err(RosterMatchError::Config(format!(
                "max_labelsは1以上で指定してください: {}",
                self.max_labels
            )));
        }

        Ok(())
    }

    pub fn thresholds(&self) -> Result<MatchThresholds> {
        Ok(MatchThresholds::new(self.name_threshold, self.number_threshold)?)
    }

    pub fn detection_settings(&self) -> DetectionSettings {
        DetectionSettings {
            min_label_confidence: self.min_label_confidence,
            max_labels: self.max_labels,
            min_text_confidence: self.min_text_confidence,
        }
    }

    pub fn image_limits(&self) -> ImageLimits {
        ImageLimits {
            max_bytes: self.max_image_bytes,
            max_dimension: self.max_image_size,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            region: None,
            name_threshold: 0.8,
            number_threshold: 0.9,
            min_label_confidence: 80.0,
            max_labels: 20,
            min_text_confidence: 90.0,
            max_image_bytes: 5 * 1024 * 1024,
            max_image_size: 1920,
        }
    }
}
