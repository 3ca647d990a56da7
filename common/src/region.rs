//! 領域フィルタ
//!
//! 人物の矩形内にあるテキストだけを残し、スコアボードや観客席の文字を除外する。
//! 複数人物の矩形が重なる場合、重なり部分のテキストは両方に含まれる扱い
//! （テキストを特定の人物に割り当てる用途には使えない）。

use crate::types::{BoundingBox, DetectedTextItem};

/// `small` が `large` の内側にあるか（境界を含む）
pub fn is_inside(small: &BoundingBox, large: &BoundingBox) -> bool {
    small.left >= large.left
        && small.top >= large.top
        && small.right() <= large.right()
        && small.bottom() <= large.bottom()
}

/// いずれかの人物矩形の内側にあるテキストだけを返す（入力順を維持）
pub fn filter_inside_any(items: &[DetectedTextItem], regions: &[BoundingBox]) -> Vec<DetectedTextItem> {
    items
        .iter()
        .filter(|item| regions.iter().any(|region| is_inside(&item.bounding_box, region)))
        .cloned()
        .collect()
}
