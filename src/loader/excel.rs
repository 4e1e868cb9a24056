//! Excel読み込み（calamine）
//!
//! 複数シートがあっても先頭シートだけを読む。

use crate::error::Result;
use calamine::{open_workbook_auto, Data, Reader};
use material_match_common::{Cell, Table};
use std::path::Path;

pub fn read_table(path: &Path) -> Result<Table> {
    let mut workbook = open_workbook_auto(path)?;

    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range?,
        None => {
            tracing::warn!("{}: シートがありません", path.display());
            return Ok(Table::default());
        }
    };

    let mut rows = range.rows();
    let columns: Vec<String> = match rows.next() {
        Some(header) => header.iter().map(|c| to_cell(c).to_string()).collect(),
        None => return Ok(Table::default()),
    };

    let rows = rows
        .map(|row| row.iter().map(to_cell).collect())
        .collect();

    Ok(Table::new(columns, rows))
}

fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::from(s.as_str()),
        Data::Int(n) => Cell::Int(*n),
        Data::Float(n) => Cell::Number(*n),
        Data::Bool(b) => Cell::Bool(*b),
        // 日付はシリアル値のまま
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::from(s.as_str()),
        Data::Error(e) => Cell::Text(e.to_string()),
    }
}
