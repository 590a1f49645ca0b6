use super::{DecoderCapabilities, ImageDecoder};
use crate::image_format::SourceFormat;
use anyhow::{Context, Result};
use image::{DynamicImage, ImageReader};
use std::path::Path;

/// `image` クレートを使う標準的な画像ローダー実装
#[derive(Clone, Debug, Default)]
pub struct StandardImageLoader {
    capabilities: DecoderCapabilities,
}

impl StandardImageLoader {
    /// 起動時に確認した機能で画像ローダーを作成
    pub fn new(capabilities: DecoderCapabilities) -> Self {
        Self { capabilities }
    }

    /// 内容からフォーマットを推定してデコード
    ///
    /// 推定できない場合は拡張子から決めたフォーマットを使う。
    fn decode_with_image(&self, path: &Path, format: SourceFormat) -> Result<DynamicImage> {
        let mut reader = ImageReader::open(path)
            .with_context(|| format!("Failed to open file: {}", path.display()))?;

        if let Some(hint) = format.image_format_hint() {
            reader.set_format(hint);
        }

        let reader = reader
            .with_guessed_format()
            .with_context(|| format!("Failed to read image header: {}", path.display()))?;

        let image = reader
            .decode()
            .with_context(|| format!("Failed to decode {} image", format.extension()))?;

        Ok(image)
    }

    /// `image` クレート以外のデコーダを使う
    fn decode_with_plugin(&self, path: &Path, format: SourceFormat) -> Result<DynamicImage> {
        #[cfg(feature = "heic")]
        if format == SourceFormat::Heic {
            return super::heic::decode_heic(path);
        }

        self.decode_with_image(path, format)
    }
}

impl ImageDecoder for StandardImageLoader {
    fn decode(&self, path: &Path, format: SourceFormat) -> Result<DynamicImage> {
        let supported = self.capabilities.supports(format);
        if format.requires_plugin() && supported {
            return self.decode_with_plugin(path, format);
        }

        let result = self.decode_with_image(path, format);
        if supported {
            return result;
        }

        // 未対応フォーマットでも `image` で読めればそのまま使う
        result.with_context(|| {
            format!(
                "{} decoder not available (build with the `heic` feature)",
                format.extension().to_uppercase()
            )
        })
    }
}
