use anyhow::Result;
use clap::Parser;
use jpg_converter::cli::{execute_convert, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ファイル単位のエラーは終了コードに影響しない
    execute_convert(&cli)?;

    Ok(())
}
