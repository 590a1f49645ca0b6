// libheif によるHEICデコード（`heic` フィーチャー有効時のみ）

use anyhow::{Context, Result};
use image::{DynamicImage, RgbImage};
use libheif_rs::{ColorSpace, HeifContext, LibHeif, RgbChroma};
use std::path::Path;

/// HEICファイルのプライマリ画像をRGB8にデコード
pub fn decode_heic(path: &Path) -> Result<DynamicImage> {
    let path_str = path
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Invalid UTF-8 path: {}", path.display()))?;

    let context = HeifContext::read_from_file(path_str)
        .with_context(|| format!("Failed to open HEIC file: {}", path.display()))?;
    let handle = context
        .primary_image_handle()
        .context("HEIC file has no primary image")?;

    let lib_heif = LibHeif::new();
    let image = lib_heif
        .decode(&handle, ColorSpace::Rgb(RgbChroma::Rgb), None)
        .context("Failed to decode HEIC image")?;

    let planes = image.planes();
    let plane = planes
        .interleaved
        .context("Decoded HEIC image has no interleaved plane")?;

    let (width, height) = (plane.width, plane.height);
    let row_len = width as usize * 3;

    // stride には行末のパディングが含まれる
    let mut pixels = Vec::with_capacity(row_len * height as usize);
    for row in plane.data.chunks(plane.stride).take(height as usize) {
        pixels.extend_from_slice(&row[..row_len]);
    }

    let rgb = RgbImage::from_raw(width, height, pixels)
        .context("HEIC pixel buffer does not match image dimensions")?;

    Ok(DynamicImage::ImageRgb8(rgb))
}
