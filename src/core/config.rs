// 変換処理の設定

/// JPEG品質のデフォルト値
pub const DEFAULT_QUALITY: i32 = 95;

/// 1回の実行に対する変換設定
///
/// 品質値は範囲チェックせずにそのままエンコーダへ渡す。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionConfig {
    quality: i32,
    delete_originals: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversionConfig {
    pub fn new() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
            delete_originals: false,
        }
    }

    /// JPEG品質を設定
    pub fn with_quality(mut self, quality: i32) -> Self {
        self.quality = quality;
        self
    }

    /// 変換成功後に元ファイルを削除するかどうかを設定
    pub fn with_delete_originals(mut self, delete_originals: bool) -> Self {
        self.delete_originals = delete_originals;
        self
    }

    pub fn quality(&self) -> i32 {
        self.quality
    }

    pub fn delete_originals(&self) -> bool {
        self.delete_originals
    }
}
