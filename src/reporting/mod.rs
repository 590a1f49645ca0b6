// 変換イベントのコンソール報告
//
// 構造化ログは持たず、1イベント1行で出力する。

pub mod console;
pub mod traits;

#[cfg(test)]
pub mod test_mocks;

// 公開API
pub use console::{ConsoleReporter, NoOpReporter};
pub use traits::*;

// テストモック（テスト時のみ）
#[cfg(test)]
pub use test_mocks::*;
