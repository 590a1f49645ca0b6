use crate::image_format::SourceFormat;
use anyhow::Result;
use image::DynamicImage;
use mockall::automock;
use std::path::Path;

#[cfg(feature = "heic")]
pub mod heic;
pub mod standard;

/// 画像デコードバックエンドのトレイト
#[automock]
pub trait ImageDecoder {
    /// ファイルを開いてラスタ画像にデコードする
    ///
    /// ファイルハンドルはこの呼び出しの中で閉じられる。
    fn decode(&self, path: &Path, format: SourceFormat) -> Result<DynamicImage>;
}

/// 起動時に確認したオプションのデコーダ機能
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecoderCapabilities {
    heic: bool,
}

impl DecoderCapabilities {
    /// 利用可能なデコーダを確認する
    ///
    /// HEICデコーダが無い場合もエラーにはせず、対応フォーマットが減るだけ。
    pub fn probe() -> Self {
        Self {
            heic: cfg!(feature = "heic"),
        }
    }

    /// オプションのデコーダを一切使わない構成
    pub fn baseline() -> Self {
        Self { heic: false }
    }

    pub fn heic_enabled(&self) -> bool {
        self.heic
    }

    /// 指定フォーマットを確実にデコードできるかどうか
    pub fn supports(&self, format: SourceFormat) -> bool {
        match format {
            SourceFormat::Heic => self.heic,
            _ => true,
        }
    }
}
