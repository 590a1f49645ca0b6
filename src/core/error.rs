// ファイル単位の変換エラー型定義

use std::path::{Path, PathBuf};
use thiserror::Error;

/// 1ファイルの変換中に発生するエラー
///
/// どのバリアントも呼び出し側でファイル単位に捕捉され、走査は継続する。
#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("failed to decode image: {source:#}")]
    Decode {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("failed to encode JPEG: {source:#}")]
    Encode {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("failed to write {}: {source}", .output.display())]
    Write {
        path: PathBuf,
        output: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 出力は書き込み済みで、元ファイルの削除だけが失敗した
    #[error("converted to {} but failed to delete original: {source}", .output.display())]
    Delete {
        path: PathBuf,
        output: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConversionError {
    /// デコードエラーの作成
    pub fn decode(path: impl Into<PathBuf>, source: anyhow::Error) -> Self {
        Self::Decode {
            path: path.into(),
            source,
        }
    }

    /// エンコードエラーの作成
    pub fn encode(path: impl Into<PathBuf>, source: anyhow::Error) -> Self {
        Self::Encode {
            path: path.into(),
            source,
        }
    }

    /// 書き込みエラーの作成
    pub fn write(
        path: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::Write {
            path: path.into(),
            output: output.into(),
            source,
        }
    }

    /// 削除エラーの作成
    pub fn delete(
        path: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::Delete {
            path: path.into(),
            output: output.into(),
            source,
        }
    }

    /// 変換元ファイルのパス
    pub fn path(&self) -> &Path {
        match self {
            Self::Decode { path, .. }
            | Self::Encode { path, .. }
            | Self::Write { path, .. }
            | Self::Delete { path, .. } => path,
        }
    }
}

/// ファイル単位の変換結果型
pub type ConversionResult<T> = std::result::Result<T, ConversionError>;
