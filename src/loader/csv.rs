//! CSV読み込み
//!
//! 1行目を見出しとして扱う。UTF-8として読めない場合はGB18030で読み直す
//! （Excelから書き出した中国語CSVはこの形式が多い）。

use crate::error::Result;
use material_match_common::{Cell, Table};
use std::path::Path;

pub fn read_table(path: &Path) -> Result<Table> {
    let content = read_file_as_utf8(path)?;
    parse_table(&content)
}

/// ファイルをUTF-8文字列として読み込む（BOMは除去）
pub fn read_file_as_utf8(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;

    let content = match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => {
            let bytes = e.into_bytes();
            let (decoded, _, had_errors) = encoding_rs::GB18030.decode(&bytes);
            if had_errors {
                tracing::warn!("{}: 文字コードを判別できない箇所があります", path.display());
            }
            decoded.into_owned()
        }
    };

    Ok(match content.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => content,
    })
}

/// CSV文字列を`Table`に変換
pub fn parse_table(content: &str) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let columns: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(Cell::from).collect());
    }

    Ok(Table::new(columns, rows))
}
