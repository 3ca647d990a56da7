mod resize;

use crate::error::{RosterMatchError, Result};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ImageInfo {
    pub file_name: String,
    /// 画像認識サービスに送るバイト列
    pub bytes: Vec<u8>,
    /// 上限超過で縮小・再エンコードしたか
    pub resized: bool,
}

/// 送信前の画像サイズ制限
#[derive(Debug, Clone, Copy)]
pub struct ImageLimits {
    pub max_bytes: usize,
    pub max_dimension: u32,
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// 画像ファイルを読み込む
///
/// `limits.max_bytes` を超える場合は長辺 `limits.max_dimension` に縮小してJPEGで再エンコードする。
pub fn load_image(path: &Path, limits: &ImageLimits) -> Result<ImageInfo> {
    if !path.is_file() {
        return Err(RosterMatchError::ImageNotFound(path.display().to_string()));
    }

    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    if !is_image_extension(&ext) {
        return Err(RosterMatchError::UnsupportedImage(path.display().to_string()));
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let bytes = std::fs::read(path)?;
    debug!("画像 {}: {} bytes", file_name, bytes.len());

    if bytes.len() <= limits.max_bytes {
        return Ok(ImageInfo {
            file_name,
            bytes,
            resized: false,
        });
    }

    let shrunk = resize::shrink_to_jpeg(&bytes, limits)?;
    debug!("画像 {}: {} bytes → {} bytes に縮小", file_name, bytes.len(), shrunk.len());

    Ok(ImageInfo {
        file_name,
        bytes: shrunk,
        resized: true,
    })
}

fn is_image_extension(ext: &str) -> bool {
    IMAGE_EXTENSIONS.contains(&ext)
}
