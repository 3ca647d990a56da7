use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterMatchError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("画像が見つかりません: {0}")]
    ImageNotFound(String),

    #[error("未対応の画像形式: {0}（jpg/jpeg/pngのみ）")]
    UnsupportedImage(String),

    #[error("画像読み込みエラー: {0}")]
    ImageLoad(String),

    #[error("名簿の解析に失敗: {0}")]
    Parse(String),

    #[error("画像認識サービスエラー: {0}")]
    RecognitionService(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] roster_match_common::Error),
}

pub type Result<T> = std::result::Result<T, RosterMatchError>;
