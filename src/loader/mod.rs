//! 入力ファイルの読み込み
//!
//! 拡張子だけで形式を判別する（中身の推定はしない）。
//! - csv → `csv::read_table`
//! - xlsx / xlsm / xls / xlsb / ods → `excel::read_table`（先頭シートのみ）

pub mod csv;
pub mod excel;

use crate::error::{MatchError, Result};
use material_match_common::Table;
use std::path::Path;

/// アップロードを受け付ける拡張子
const ALLOWED_EXTENSIONS: &[&str] = &["csv", "xlsx", "xls"];

/// 読み込み可能なスプレッドシート拡張子
const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls", "xlsb", "ods"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Spreadsheet,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = lowercase_extension(path).unwrap_or_default();
        if ext == "csv" {
            Ok(InputFormat::Csv)
        } else if SPREADSHEET_EXTENSIONS.contains(&ext.as_str()) {
            Ok(InputFormat::Spreadsheet)
        } else {
            Err(MatchError::UnsupportedFormat(format!(".{}", ext)))
        }
    }
}

fn lowercase_extension(path: &Path) -> Option<String> {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
}

/// アップロード可能なファイル名か（csv / xlsx / xls）
pub fn allowed_file(file_name: &str) -> bool {
    lowercase_extension(Path::new(file_name))
        .map(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// ファイルを読み込んで`Table`にする
pub fn load(path: &Path) -> Result<Table> {
    if !path.exists() {
        return Err(MatchError::FileNotFound(path.display().to_string()));
    }

    let table = match InputFormat::from_path(path)? {
        InputFormat::Csv => csv::read_table(path)?,
        InputFormat::Spreadsheet => excel::read_table(path)?,
    };

    tracing::debug!(
        "{}: {}列 {}行を読み込み",
        path.display(),
        table.column_names().len(),
        table.len()
    );

    Ok(table)
}
