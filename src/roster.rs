//! 名簿ファイル読み込み
//!
//! 行単位のパースは roster_match_common に任せ、ここではファイルI/Oと
//! スキップ行のログ出力を担当する。

use crate::error::{RosterMatchError, Result};
use roster_match_common::{parse_roster, PlayerRecord};
use std::path::Path;
use tracing::{info, warn};

/// 名簿ファイルを読み込む
///
/// 形式不正の行はスキップして警告を出す。
pub fn load_roster(path: &Path) -> Result<Vec<PlayerRecord>> {
    if !path.exists() {
        return Err(RosterMatchError::FileNotFound(path.display().to_string()));
    }

    let bytes = std::fs::read(path)
        .map_err(|e| RosterMatchError::Parse(format!("{}: 読み込めません ({})", path.display(), e)))?;
    let content = String::from_utf8(bytes)
        .map_err(|e| RosterMatchError::Parse(format!("{}: UTF-8ではありません ({})", path.display(), e)))?;

    let parsed = parse_roster(&content);
    for skipped in &parsed.skipped {
        warn!(
            "名簿 {} の{}行目をスキップ: {}",
            path.display(),
            skipped.line_number,
            skipped.reason
        );
    }
    info!("名簿から{}名を読み込み（スキップ{}行）", parsed.players.len(), parsed.skipped.len());

    Ok(parsed.players)
}

/// 名簿ファイルを読み込む（失敗時は空の名簿）
pub fn load_roster_or_empty(path: &Path) -> Vec<PlayerRecord> {
    match load_roster(path) {
        Ok(players) => players,
        Err(e) => {
            warn!("{}", e);
            Vec::new()
        }
    }
}
