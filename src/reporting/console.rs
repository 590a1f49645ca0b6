// 報告インターフェースの具象実装

use super::traits::ConversionReporter;
use crate::core::{ConversionError, ConversionSummary};
use crate::file_scanner::WalkError;
use crate::image_loader::DecoderCapabilities;
use std::path::Path;

/// コンソール出力による報告実装
#[derive(Debug, Default, Clone)]
pub struct ConsoleReporter {
    quiet: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// サマリー行の文字列表現
    pub fn format_summary(summary: &ConversionSummary) -> String {
        let mut line = format!(
            "   - converted: {}, deleted: {}, skipped: {}, failed: {} ({}ms)",
            summary.converted,
            summary.deleted,
            summary.skipped,
            summary.failed,
            summary.total_processing_time_ms
        );
        if summary.walk_errors > 0 {
            line.push_str(&format!(", unreadable entries: {}", summary.walk_errors));
        }
        line
    }
}

impl ConversionReporter for ConsoleReporter {
    fn report_capabilities(&self, capabilities: &DecoderCapabilities) {
        if self.quiet {
            return;
        }
        if capabilities.heic_enabled() {
            println!("HEIC support enabled.");
        } else {
            println!("⚠️  HEIC decoder not available (built without the `heic` feature). HEIC files may not work.");
        }
    }

    fn report_started(&self, root: &Path, total_files: usize) {
        if !self.quiet {
            println!("📂 Scanning {} ({total_files} files)", root.display());
        }
    }

    fn report_converted(&self, source: &Path, _output: &Path) {
        if !self.quiet {
            println!("Converted: {}", source.display());
        }
    }

    fn report_deleted(&self, source: &Path) {
        if !self.quiet {
            println!("Deleted: {}", source.display());
        }
    }

    fn report_error(&self, error: &ConversionError) {
        if !self.quiet {
            eprintln!("Error converting {}: {error}", error.path().display());
        }
    }

    fn report_walk_error(&self, error: &WalkError) {
        if self.quiet {
            return;
        }
        match &error.path {
            Some(path) => eprintln!("Error reading {}: {}", path.display(), error.message),
            None => eprintln!("Error reading directory: {}", error.message),
        }
    }

    fn report_completed(&self, summary: &ConversionSummary) {
        if !self.quiet {
            println!("Conversion completed.");
            println!("{}", Self::format_summary(summary));
        }
    }
}

/// 何もしない報告実装（ライブラリ利用・テスト用）
#[derive(Debug, Default, Clone)]
pub struct NoOpReporter;

impl NoOpReporter {
    pub fn new() -> Self {
        Self
    }
}

impl ConversionReporter for NoOpReporter {
    fn report_capabilities(&self, _capabilities: &DecoderCapabilities) {}

    fn report_started(&self, _root: &Path, _total_files: usize) {}

    fn report_converted(&self, _source: &Path, _output: &Path) {}

    fn report_deleted(&self, _source: &Path) {}

    fn report_error(&self, _error: &ConversionError) {}

    fn report_walk_error(&self, _error: &WalkError) {}

    fn report_completed(&self, _summary: &ConversionSummary) {}
}
