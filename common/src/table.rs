//! 表データの抽象
//!
//! CSV/Excelどちらから読み込んでも同じ形の`Table`になる。
//! 列は見出し名で引き、`ColumnView`で行ごとの値を読む。

use crate::error::{Error, Result};
use crate::types::Cell;

/// 見出し行＋データ行の表
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self { columns, rows }
    }

    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// 見出し名で列を取得（同名列がある場合は先頭）
    pub fn column(&self, name: &str) -> Option<ColumnView<'_>> {
        let index = self.columns.iter().position(|c| c == name)?;
        Some(ColumnView { table: self, index })
    }

    /// データ行数（見出しを除く）
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// 1列分の読み取りビュー
#[derive(Debug, Clone, Copy)]
pub struct ColumnView<'a> {
    table: &'a Table,
    index: usize,
}

static EMPTY_CELL: Cell = Cell::Empty;

impl<'a> ColumnView<'a> {
    pub fn name(&self) -> &'a str {
        &self.table.columns[self.index]
    }

    /// 行`row`の値。列数が足りない行は空セル扱い
    pub fn get(&self, row: usize) -> &'a Cell {
        self.table
            .rows
            .get(row)
            .and_then(|r| r.get(self.index))
            .unwrap_or(&EMPTY_CELL)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Cell> + 'a {
        let view = *self;
        (0..view.table.len()).map(move |row| view.get(row))
    }
}

/// 必須列がすべて存在するか検証する
///
/// 欠けている列はまとめて`Error::Schema`で報告する。
pub fn validate_columns(table: &Table, required: &[&str], source_kind: &str) -> Result<()> {
    let missing: Vec<String> = required
        .iter()
        .filter(|name| !table.has_column(name))
        .map(|name| name.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::Schema {
            source_kind: source_kind.to_string(),
            missing,
        })
    }
}
