use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 走査中に読めなかったエントリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkError {
    pub path: Option<PathBuf>,
    pub message: String,
}

/// ディレクトリ走査の結果
#[derive(Debug, Default)]
pub struct ScanResult {
    pub files: Vec<PathBuf>,
    pub errors: Vec<WalkError>,
}

pub struct FileScanner;

impl FileScanner {
    /// `directory` 以下の全ての通常ファイルを再帰的に列挙する
    ///
    /// 同じディレクトリ内はファイル名順。読めないサブディレクトリは
    /// `errors` に記録して走査を続ける。
    pub fn scan_directory(directory: &Path) -> Result<ScanResult> {
        Self::validate_root(directory)?;

        let mut result = ScanResult::default();

        for entry in WalkDir::new(directory).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(error) => {
                    result.errors.push(WalkError {
                        path: error.path().map(Path::to_path_buf),
                        message: error.to_string(),
                    });
                    continue;
                }
            };

            if Self::is_regular_file(&entry) {
                result.files.push(entry.into_path());
            }
        }

        Ok(result)
    }

    fn validate_root(directory: &Path) -> Result<()> {
        if !directory.exists() {
            anyhow::bail!("Target directory does not exist: {}", directory.display());
        }

        if !directory.is_dir() {
            anyhow::bail!("Target path is not a directory: {}", directory.display());
        }

        Ok(())
    }

    // ファイルを指すシンボリックリンクも対象に含める
    fn is_regular_file(entry: &walkdir::DirEntry) -> bool {
        entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
    }
}
