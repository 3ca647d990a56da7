//! 名簿照合モジュール
//!
//! 検出テキストと名簿を総当たりで比較し、姓または背番号が一致した選手を返す。
//! 結果は選手コードで重複排除し、最初に一致した順に並ぶ。

use crate::error::{Error, Result};
use crate::similarity::ratio;
use crate::types::{DetectedTextItem, PlayerRecord};
use std::collections::HashSet;
use std::fmt;

/// あいまい一致の閾値（この値を超えたら一致）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchThresholds {
    /// 姓との類似度
    pub name: f64,
    /// 背番号との類似度
    pub number: f64,
}

impl MatchThresholds {
    pub fn new(name: f64, number: f64) -> Result<Self> {
        for (label, value) in [("name", name), ("number", number)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::Config(format!(
                    "{}の閾値は0.0〜1.0で指定してください: {}",
                    label, value
                )));
            }
        }
        Ok(Self { name, number })
    }
}

impl Default for MatchThresholds {
    fn default() -> Self {
        Self { name: 0.8, number: 0.9 }
    }
}

/// 一致理由
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchReason {
    SurnameExact,
    NumberExact,
    SurnameSimilar(f64),
    NumberSimilar(f64),
}

impl fmt::Display for MatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchReason::SurnameExact => write!(f, "姓が一致"),
            MatchReason::NumberExact => write!(f, "背番号が一致"),
            MatchReason::SurnameSimilar(r) => write!(f, "姓が類似 ({:.2})", r),
            MatchReason::NumberSimilar(r) => write!(f, "背番号が類似 ({:.2})", r),
        }
    }
}

/// 照合結果（一致したテキストと理由つき）
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerMatch {
    pub player: PlayerRecord,
    pub matched_text: String,
    pub reason: MatchReason,
}

/// 検出テキスト1件と選手1名を比較
///
/// 判定順: 姓の完全一致 → 背番号の完全一致 → 姓の類似 → 背番号の類似
pub fn match_reason(text: &str, player: &PlayerRecord, thresholds: &MatchThresholds) -> Option<MatchReason> {
    let surname = player.surname();
    let number = player.number.as_str();

    if text.to_lowercase() == surname.to_lowercase() {
        return Some(MatchReason::SurnameExact);
    }
    if text == number {
        return Some(MatchReason::NumberExact);
    }

    let name_ratio = ratio(text, surname);
    if name_ratio > thresholds.name {
        return Some(MatchReason::SurnameSimilar(name_ratio));
    }

    let number_ratio = ratio(text, number);
    if number_ratio > thresholds.number {
        return Some(MatchReason::NumberSimilar(number_ratio));
    }

    None
}

/// 検出テキストと名簿を照合（理由つき）
pub fn match_players_detailed(
    items: &[DetectedTextItem],
    roster: &[PlayerRecord],
    thresholds: &MatchThresholds,
) -> Vec<PlayerMatch> {
    let mut matches = Vec::new();
    let mut seen_codes: HashSet<&str> = HashSet::new();

    for item in items {
        for player in roster {
            if seen_codes.contains(player.code.as_str()) {
                continue;
            }

            if let Some(reason) = match_reason(&item.text, player, thresholds) {
                seen_codes.insert(player.code.as_str());
                matches.push(PlayerMatch {
                    player: player.clone(),
                    matched_text: item.text.clone(),
                    reason,
                });
            }
        }
    }

    matches
}

/// 検出テキストと名簿を照合
pub fn match_players(
    items: &[DetectedTextItem],
    roster: &[PlayerRecord],
    thresholds: &MatchThresholds,
) -> Vec<PlayerRecord> {
    match_players_detailed(items, roster, thresholds)
        .into_iter()
        .map(|m| m.player)
        .collect()
}
