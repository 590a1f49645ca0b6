use std::path::{Path, PathBuf};

/// 変換対象として認識する入力フォーマット
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    Png,
    Gif,
    Bmp,
    Tiff,
    Jfif,
    Webp,
    Heic,
}

impl SourceFormat {
    pub const ALL: [SourceFormat; 7] = [
        Self::Png,
        Self::Gif,
        Self::Bmp,
        Self::Tiff,
        Self::Jfif,
        Self::Webp,
        Self::Heic,
    ];

    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Gif => "gif",
            Self::Bmp => "bmp",
            Self::Tiff => "tiff",
            Self::Jfif => "jfif",
            Self::Webp => "webp",
            Self::Heic => "heic",
        }
    }

    /// `image` クレート単体ではデコードできないフォーマット
    pub const fn requires_plugin(&self) -> bool {
        matches!(self, Self::Heic)
    }

    /// `image` のフォーマット推定に使うヒント
    pub fn image_format_hint(&self) -> Option<image::ImageFormat> {
        match self {
            Self::Png => Some(image::ImageFormat::Png),
            Self::Gif => Some(image::ImageFormat::Gif),
            Self::Bmp => Some(image::ImageFormat::Bmp),
            Self::Tiff => Some(image::ImageFormat::Tiff),
            Self::Jfif => Some(image::ImageFormat::Jpeg),
            Self::Webp => Some(image::ImageFormat::WebP),
            Self::Heic => None,
        }
    }
}

/// 走査で見つかったファイルの分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileClass {
    /// `.jpg` ファイル（変換不要）
    Jpeg,
    Convertible(SourceFormat),
    Other,
}

/// ファイル名の末尾（大文字小文字を区別しない）で分類する
///
/// `.png` のようにドットで始まる名前そのものも対象になる。
pub fn classify(path: &Path) -> FileClass {
    let Some(name) = path.file_name().map(|n| n.to_string_lossy().to_lowercase()) else {
        return FileClass::Other;
    };

    if name.ends_with(".jpg") {
        return FileClass::Jpeg;
    }

    SourceFormat::ALL
        .into_iter()
        .find(|format| {
            name.strip_suffix(format.extension())
                .is_some_and(|rest| rest.ends_with('.'))
        })
        .map_or(FileClass::Other, FileClass::Convertible)
}

/// 同じディレクトリ・同じステムで拡張子を `.jpg` にしたパス
pub fn output_path(path: &Path) -> PathBuf {
    path.with_extension("jpg")
}
