//! Roster Match Common Library
//!
//! 名簿照合の型と純粋ロジック（I/Oなし）

pub mod types;
pub mod error;
pub mod roster;
pub mod region;
pub mod similarity;
pub mod matcher;
pub mod report;

pub use types::{BoundingBox, DetectedTextItem, PlayerRecord, PLAYER_ROLE};
pub use error::{Error, Result};
pub use roster::{parse_roster, parse_roster_line, RosterParse, SkippedLine};
pub use region::{filter_inside_any, is_inside};
pub use similarity::ratio;
pub use matcher::{match_players, match_players_detailed, match_reason, MatchReason, MatchThresholds, PlayerMatch};
pub use report::{format_detected_text, format_matched_players};
