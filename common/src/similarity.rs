//! 文字列類似度
//!
//! Ratcliff/Obershelp方式（最長一致ブロックを再帰的に数える）。
//! 大文字小文字は区別しない。

/// 類似度を計算（0.0〜1.0）
///
/// `2 * 一致文字数 / (両文字列の文字数の和)`。両方空なら1.0。
///
/// # Examples
/// ```
/// use roster_match_common::ratio;
///
/// assert_eq!(ratio("Rivera", "RIVERA"), 1.0);
/// assert_eq!(ratio("abcd", "bcde"), 0.75);
/// ```
pub fn ratio(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    // 同長ブロックが複数ある場合の選び方で結果が変わらないよう、引数順を正規化
    let (a, b) = if a <= b { (a, b) } else { (b, a) };

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    2.0 * matching_chars(&a, &b) as f64 / total as f64
}

/// 一致ブロックの文字数の合計
fn matching_chars(a: &[char], b: &[char]) -> usize {
    let mut total = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = longest_match(a, b, alo, ahi, blo, bhi);
        if size == 0 {
            continue;
        }
        total += size;

        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + size < ahi && j + size < bhi {
            pending.push((i + size, ahi, j + size, bhi));
        }
    }

    total
}

/// 範囲内の最長共通部分文字列 `(aの開始, bの開始, 長さ)`
///
/// 同長なら a側、次に b側の開始位置が小さいものを返す。
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let mut best = (alo, blo, 0);
    let width = bhi - blo + 1;
    // prev[k + 1] = a[i-1], b[blo+k] で終わる一致長
    let mut prev = vec![0usize; width];
    let mut curr = vec![0usize; width];

    for i in alo..ahi {
        for j in blo..bhi {
            let k = j - blo;
            curr[k + 1] = if a[i] == b[j] { prev[k] + 1 } else { 0 };

            let size = curr[k + 1];
            if size > best.2 {
                best = (i + 1 - size, j + 1 - size, size);
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    best
}
