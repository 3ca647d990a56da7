//! テキストレポート生成

use crate::types::{DetectedTextItem, PlayerRecord};
use std::fmt::Write;

/// 検出テキスト一覧（矩形つき）
pub fn format_detected_text(items: &[DetectedTextItem]) -> String {
    let mut out = String::from("Detected text:\n");
    if items.is_empty() {
        out.push_str("  (なし)\n");
        return out;
    }

    for item in items {
        let _ = writeln!(out, "- {:?} [{}]", item.text, item.bounding_box);
    }
    out
}

/// 照合できた選手一覧
pub fn format_matched_players(players: &[PlayerRecord]) -> String {
    let mut out = String::from("Matched player names and numbers:\n");
    if players.is_empty() {
        out.push_str("  (なし)\n");
        return out;
    }

    for p in players {
        let _ = writeln!(
            out,
            "- Code: {}, Number: {}, Name: {}, Team: {}, Role: {}",
            p.code, p.number, p.name, p.team, p.role
        );
    }
    out
}
