use anyhow::{Context, Result};
use image::{DynamicImage, RgbImage};
use jpeg_encoder::{ColorType, Encoder};

/// エンコーダが受け付ける品質の範囲
pub const MIN_QUALITY: u8 = 1;
pub const MAX_QUALITY: u8 = 100;

/// RGB変換とJPEGエンコードを行うライター
#[derive(Debug, Clone, Copy)]
pub struct JpegWriter {
    quality: i32,
    optimize_huffman_tables: bool,
}

impl JpegWriter {
    /// 品質値は検証せずに保持し、エンコーダ呼び出し時にだけ丸める
    pub fn new(quality: i32) -> Self {
        Self {
            quality,
            optimize_huffman_tables: true,
        }
    }

    /// ハフマンテーブル最適化の有無を設定（デフォルトは有効）
    pub fn with_optimized_huffman_tables(mut self, optimize: bool) -> Self {
        self.optimize_huffman_tables = optimize;
        self
    }

    /// 実際にエンコーダへ渡す品質値
    pub fn effective_quality(&self) -> u8 {
        self.quality
            .clamp(i32::from(MIN_QUALITY), i32::from(MAX_QUALITY)) as u8
    }

    /// アルファ・パレット・ビット深度を捨てて3チャンネルRGBに変換
    pub fn to_rgb(image: &DynamicImage) -> RgbImage {
        image.to_rgb8()
    }

    /// メモリ上でJPEGにエンコード
    pub fn encode(&self, image: &DynamicImage) -> Result<Vec<u8>> {
        let rgb = Self::to_rgb(image);

        // JPEGのヘッダーは幅・高さを16bitで持つ
        let width = u16::try_from(rgb.width())
            .with_context(|| format!("Image too wide for JPEG: {}px", rgb.width()))?;
        let height = u16::try_from(rgb.height())
            .with_context(|| format!("Image too tall for JPEG: {}px", rgb.height()))?;

        let quality = self.effective_quality();
        let mut buffer = Vec::new();
        let mut encoder = Encoder::new(&mut buffer, quality);
        encoder.set_optimized_huffman_tables(self.optimize_huffman_tables);
        encoder
            .encode(rgb.as_raw(), width, height, ColorType::Rgb)
            .with_context(|| format!("Failed to encode JPEG at quality {quality}"))?;

        Ok(buffer)
    }
}
