use crate::core::config::{ConversionConfig, DEFAULT_QUALITY};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jpg_converter")]
#[command(about = "Convert images to JPG format and optionally delete originals")]
#[command(version)]
pub struct Cli {
    /// Path to the folder with images
    pub path: PathBuf,

    /// Delete original files after conversion (1 = yes, 0 = no)
    #[arg(
        short,
        long,
        default_value_t = 0,
        value_parser = clap::value_parser!(u8).range(0..=1)
    )]
    pub delete: u8,

    /// JPEG quality (1-100)
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_QUALITY,
        allow_negative_numbers = true
    )]
    pub quality: i32,
}

impl Cli {
    /// 元ファイル削除が有効かどうか
    pub fn delete_originals(&self) -> bool {
        self.delete == 1
    }

    /// 変換設定に変換
    pub fn to_config(&self) -> ConversionConfig {
        ConversionConfig::new()
            .with_quality(self.quality)
            .with_delete_originals(self.delete_originals())
    }
}
