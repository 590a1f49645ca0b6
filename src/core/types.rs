// 変換処理に関連するデータ型定義

use std::path::PathBuf;

/// 変換対象外となった理由
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// 既に `.jpg` ファイル
    AlreadyJpeg,
    /// 対象フォーマット以外の拡張子
    UnrecognizedExtension,
}

/// 個別ファイルの処理結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionOutcome {
    Converted {
        source: PathBuf,
        output: PathBuf,
        deleted: bool,
    },
    Skipped {
        path: PathBuf,
        reason: SkipReason,
    },
}

/// 処理全体のサマリー
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionSummary {
    pub total_files: usize,
    pub converted: usize,
    pub deleted: usize,
    pub skipped: usize,
    pub failed: usize,
    pub failed_files: Vec<PathBuf>,
    pub walk_errors: usize,
    pub total_processing_time_ms: u64,
}

impl ConversionSummary {
    /// 1ファイル分の結果を集計
    pub fn record_outcome(&mut self, outcome: &ConversionOutcome) {
        match outcome {
            ConversionOutcome::Converted { deleted, .. } => {
                self.converted += 1;
                if *deleted {
                    self.deleted += 1;
                }
            }
            ConversionOutcome::Skipped { .. } => self.skipped += 1,
        }
    }

    /// 失敗したファイルを集計
    pub fn record_failure(&mut self, path: impl Into<PathBuf>) {
        self.failed += 1;
        self.failed_files.push(path.into());
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0 || self.walk_errors > 0
    }
}
