// テスト用の報告モック実装

use super::traits::ConversionReporter;
use crate::core::{ConversionError, ConversionSummary};
use crate::file_scanner::WalkError;
use crate::image_loader::DecoderCapabilities;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// 報告イベントを文字列として記録するモック
pub struct MockReporter {
    pub events: Arc<Mutex<Vec<String>>>,
    pub summary: Arc<Mutex<Option<ConversionSummary>>>,
}

impl MockReporter {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            summary: Arc::new(Mutex::new(None)),
        }
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }

    /// 指定した接頭辞を持つイベントの一覧
    pub fn events_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.starts_with(prefix))
            .cloned()
            .collect()
    }
}

impl ConversionReporter for MockReporter {
    fn report_capabilities(&self, capabilities: &DecoderCapabilities) {
        self.push(format!("capabilities:heic={}", capabilities.heic_enabled()));
    }

    fn report_started(&self, _root: &Path, total_files: usize) {
        self.push(format!("started:{total_files}"));
    }

    fn report_converted(&self, source: &Path, _output: &Path) {
        self.push(format!("converted:{}", source.display()));
    }

    fn report_deleted(&self, source: &Path) {
        self.push(format!("deleted:{}", source.display()));
    }

    fn report_error(&self, error: &ConversionError) {
        self.push(format!("error:{}", error.path().display()));
    }

    fn report_walk_error(&self, error: &WalkError) {
        self.push(format!("walk_error:{}", error.message));
    }

    fn report_completed(&self, summary: &ConversionSummary) {
        *self.summary.lock().unwrap() = Some(summary.clone());
        self.push("completed".to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_reporter_records_events() {
        let reporter = MockReporter::new();

        reporter.report_started(Path::new("."), 2);
        reporter.report_converted(Path::new("a.png"), Path::new("a.jpg"));
        reporter.report_deleted(Path::new("a.png"));
        reporter.report_completed(&ConversionSummary::default());

        let events = reporter.events.lock().unwrap();
        assert_eq!(
            *events,
            vec!["started:2", "converted:a.png", "deleted:a.png", "completed"]
        );
        assert!(reporter.summary.lock().unwrap().is_some());
    }
}
