// コアレイヤー - 設定、型、エラー定義
// 他のレイヤーから参照される基本的な抽象化を提供

pub mod config;
pub mod error;
pub mod types;

// 公開API
pub use config::{ConversionConfig, DEFAULT_QUALITY};
pub use error::{ConversionError, ConversionResult};
pub use types::{ConversionOutcome, ConversionSummary, SkipReason};
