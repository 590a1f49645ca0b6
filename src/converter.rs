use crate::core::{
    ConversionConfig, ConversionError, ConversionOutcome, ConversionResult, ConversionSummary,
    SkipReason,
};
use crate::file_scanner::FileScanner;
use crate::image_format::{classify, output_path, FileClass};
use crate::image_loader::ImageDecoder;
use crate::jpeg_writer::JpegWriter;
use crate::reporting::ConversionReporter;
use anyhow::Result;
use std::path::Path;
use std::time::Instant;

/// ディレクトリ配下の画像をJPEGへ一括変換する
///
/// デコーダと報告先はコンストラクタで注入する。処理は単一スレッドで逐次実行。
pub struct BatchConverter<D, R>
where
    D: ImageDecoder,
    R: ConversionReporter,
{
    decoder: D,
    reporter: R,
    config: ConversionConfig,
    writer: JpegWriter,
}

impl<D, R> BatchConverter<D, R>
where
    D: ImageDecoder,
    R: ConversionReporter,
{
    pub fn new(decoder: D, reporter: R, config: ConversionConfig) -> Self {
        Self {
            decoder,
            reporter,
            writer: JpegWriter::new(config.quality()),
            config,
        }
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// 1ファイルを変換する
    ///
    /// 元ファイルの削除はJPEGの書き込みが成功した後にのみ行う。
    pub fn convert(&self, path: &Path) -> ConversionResult<ConversionOutcome> {
        let format = match classify(path) {
            FileClass::Convertible(format) => format,
            FileClass::Jpeg => return Ok(Self::skipped(path, SkipReason::AlreadyJpeg)),
            FileClass::Other => {
                return Ok(Self::skipped(path, SkipReason::UnrecognizedExtension))
            }
        };

        let output = output_path(path);

        let image = self
            .decoder
            .decode(path, format)
            .map_err(|e| ConversionError::decode(path, e))?;

        let bytes = self
            .writer
            .encode(&image)
            .map_err(|e| ConversionError::encode(path, e))?;
        drop(image);

        // 既存の同名 .jpg は警告なしで上書き
        std::fs::write(&output, &bytes).map_err(|e| ConversionError::write(path, &output, e))?;
        self.reporter.report_converted(path, &output);

        let deleted = if self.config.delete_originals() {
            std::fs::remove_file(path).map_err(|e| ConversionError::delete(path, &output, e))?;
            self.reporter.report_deleted(path);
            true
        } else {
            false
        };

        Ok(ConversionOutcome::Converted {
            source: path.to_path_buf(),
            output,
            deleted,
        })
    }

    /// `root` 以下を走査して全ファイルを変換する
    ///
    /// ファイル単位のエラーは報告して次のファイルへ進む。
    /// ルートが存在しない・ディレクトリでない場合のみエラーを返す。
    pub fn run(&self, root: &Path) -> Result<ConversionSummary> {
        let start_time = Instant::now();

        let scan = FileScanner::scan_directory(root)?;
        self.reporter.report_started(root, scan.files.len());

        let mut summary = ConversionSummary {
            total_files: scan.files.len(),
            walk_errors: scan.errors.len(),
            ..Default::default()
        };

        for error in &scan.errors {
            self.reporter.report_walk_error(error);
        }

        for path in &scan.files {
            match self.convert(path) {
                Ok(outcome) => summary.record_outcome(&outcome),
                Err(error) => {
                    self.reporter.report_error(&error);
                    summary.record_failure(error.path());
                }
            }
        }

        summary.total_processing_time_ms = start_time.elapsed().as_millis() as u64;
        self.reporter.report_completed(&summary);

        Ok(summary)
    }

    fn skipped(path: &Path, reason: SkipReason) -> ConversionOutcome {
        ConversionOutcome::Skipped {
            path: path.to_path_buf(),
            reason,
        }
    }
}
