// 報告インターフェースのトレイト定義

use crate::core::{ConversionError, ConversionSummary};
use crate::file_scanner::WalkError;
use crate::image_loader::DecoderCapabilities;
use std::path::Path;

/// 変換の進行を報告するトレイト
pub trait ConversionReporter {
    /// 起動時に確認したデコーダ機能の報告
    fn report_capabilities(&self, capabilities: &DecoderCapabilities);

    /// 走査開始時の報告
    fn report_started(&self, root: &Path, total_files: usize);

    /// JPEGの書き込み成功の報告
    fn report_converted(&self, source: &Path, output: &Path);

    /// 元ファイル削除の報告
    fn report_deleted(&self, source: &Path);

    /// ファイル単位のエラーの報告
    fn report_error(&self, error: &ConversionError);

    /// 読めなかったディレクトリエントリの報告
    fn report_walk_error(&self, error: &WalkError);

    /// 全ファイル処理後の報告
    fn report_completed(&self, summary: &ConversionSummary);
}
