use crate::cli::Cli;
use crate::converter::BatchConverter;
use crate::core::ConversionSummary;
use crate::image_loader::{standard::StandardImageLoader, DecoderCapabilities};
use crate::reporting::{ConsoleReporter, ConversionReporter};
use anyhow::Result;

/// Execute convert command with console output
pub fn execute_convert(cli: &Cli) -> Result<ConversionSummary> {
    execute_convert_with_reporter(cli, ConsoleReporter::new())
}

/// Execute convert command with an arbitrary reporter
pub fn execute_convert_with_reporter<R>(cli: &Cli, reporter: R) -> Result<ConversionSummary>
where
    R: ConversionReporter,
{
    // HEICデコーダの有無を起動時に一度だけ確認
    let capabilities = DecoderCapabilities::probe();
    reporter.report_capabilities(&capabilities);

    let converter = BatchConverter::new(
        StandardImageLoader::new(capabilities),
        reporter,
        cli.to_config(),
    );

    converter.run(&cli.path)
}
