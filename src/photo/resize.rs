use super::ImageLimits;
use crate::error::{RosterMatchError, Result};
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;

/// 長辺を `max_dimension` 以下に縮小してJPEGにする
pub(super) fn shrink_to_jpeg(bytes: &[u8], limits: &ImageLimits) -> Result<Vec<u8>> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| RosterMatchError::ImageLoad(e.to_string()))?;

    let img = if img.width().max(img.height()) > limits.max_dimension {
        img.resize(limits.max_dimension, limits.max_dimension, FilterType::Lanczos3)
    } else {
        img
    };

    // JPEGはアルファ非対応
    let rgb = DynamicImage::ImageRgb8(img.to_rgb8());

    let mut out = Vec::new();
    rgb.write_to(&mut Cursor::new(&mut out), ImageFormat::Jpeg)
        .map_err(|e| RosterMatchError::ImageLoad(e.to_string()))?;

    if out.len() > limits.max_bytes {
        return Err(RosterMatchError::ImageLoad(format!(
            "縮小後も{}bytesを超えています: {} bytes",
            limits.max_bytes,
            out.len()
        )));
    }

    Ok(out)
}
