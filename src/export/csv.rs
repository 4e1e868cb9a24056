//! CSV出力と読み戻し
//!
//! Excelで開いても文字化けしないようにBOM付きUTF-8で書き出す。

use crate::error::{MatchError, Result};
use material_match_common::ResultTable;
use serde::{Deserialize, Serialize};
use std::path::Path;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// CSVとして読み戻した照合結果1行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub order: usize,
    pub material: String,
    pub counterparty: String,
    pub amount: String,
    pub summary: String,
}

/// 照合結果をCSVバイト列にする
pub fn render_plain(table: &ResultTable) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(UTF8_BOM.to_vec());

    for row in table.rows() {
        writer.serialize(row)?;
    }

    writer
        .into_inner()
        .map_err(|e| MatchError::Processing(format!("CSV出力エラー: {}", e)))
}

/// 出力済みCSVを読み込む
pub fn read_results(path: &Path) -> Result<Vec<ResultRecord>> {
    if !path.exists() {
        return Err(MatchError::FileNotFound(path.display().to_string()));
    }

    let content = crate::loader::csv::read_file_as_utf8(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(content.as_bytes());

    let mut records = Vec::new();
    for record in reader.deserialize() {
        records.push(record?);
    }
    Ok(records)
}
