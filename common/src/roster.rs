//! 名簿パーサー
//!
//! タブ区切りの名簿テキストを選手レコードに変換する。
//! 各行は `コード<TAB>-背番号- 氏名 (チーム名)` 形式。
//! 形式に合わない行はスキップし、理由とともに記録する。

use crate::error::{Error, Result};
use crate::types::PlayerRecord;
use regex::Regex;

/// スキップした行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1始まりの行番号
    pub line_number: usize,
    pub reason: String,
}

/// 名簿のパース結果
#[derive(Debug, Clone, Default)]
pub struct RosterParse {
    pub players: Vec<PlayerRecord>,
    pub skipped: Vec<SkippedLine>,
}

/// 名簿テキスト全体をパース
///
/// 空行とBOMは黙って読み飛ばす。
/// 形式不正の行は `skipped` に入り、`players` には含まれない。
pub fn parse_roster(content: &str) -> RosterParse {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut result = RosterParse::default();

    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        match parse_roster_line(line) {
            Ok(player) => result.players.push(player),
            Err(e) => result.skipped.push(SkippedLine {
                line_number: idx + 1,
                reason: e.to_string(),
            }),
        }
    }

    result
}

/// 名簿の1行をパース
///
/// # Examples
/// ```
/// use roster_match_common::parse_roster_line;
///
/// let player = parse_roster_line("P1\t-7- Alex Rivera (Hawks)").unwrap();
/// assert_eq!(player.number, "7");
/// assert_eq!(player.name, "Alex Rivera");
/// assert_eq!(player.team, "Hawks");
/// ```
pub fn parse_roster_line(line: &str) -> Result<PlayerRecord> {
    lazy_static::lazy_static! {
        // 先頭一致のみ（末尾の余分な文字は許容）
        static ref DESCRIPTOR_RE: Regex = Regex::new(r"^-(\d+)-\s(.+)\s\((.+)\)").unwrap();
    }

    let mut fields = line.split('\t');
    let code = fields.next().map(clean_field).unwrap_or_default();
    let descriptor = fields
        .next()
        .map(clean_field)
        .ok_or_else(|| Error::Parse(format!("2列目がありません: {:?}", line)))?;

    if code.is_empty() {
        return Err(Error::Parse(format!("選手コードが空です: {:?}", line)));
    }

    let caps = DESCRIPTOR_RE
        .captures(descriptor)
        .ok_or_else(|| Error::Parse(format!("`-背番号- 氏名 (チーム)` 形式ではありません: {:?}", descriptor)))?;

    Ok(PlayerRecord::new(code, &caps[1], &caps[2], &caps[3]))
}

/// 前後の空白とCSV風の引用符を除去
fn clean_field(field: &str) -> &str {
    field.trim().trim_matches('"')
}
