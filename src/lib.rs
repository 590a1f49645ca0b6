pub mod cli;
pub mod converter;
pub mod core;
pub mod file_scanner;
pub mod image_format;
pub mod image_loader;
pub mod jpeg_writer;
pub mod reporting;

pub use converter::BatchConverter;
pub use crate::core::{ConversionConfig, ConversionError, ConversionOutcome, ConversionSummary};
