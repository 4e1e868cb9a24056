//! 照合結果表の組み立て

use crate::error::{Error, Result};
use crate::types::MatchRow;

/// 出力時の列見出し
pub const RESULT_HEADERS: [&str; 5] = ["order", "material", "counterparty", "amount", "summary"];

/// 需要順に並んだ照合結果
#[derive(Debug, Clone, PartialEq)]
pub struct ResultTable {
    rows: Vec<MatchRow>,
}

impl ResultTable {
    pub fn rows(&self) -> &[MatchRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 出現する順序番号（重複なし、昇順）
    pub fn orders(&self) -> Vec<usize> {
        let mut orders: Vec<usize> = self.rows.iter().map(|r| r.order).collect();
        orders.dedup();
        orders
    }
}

/// 照合行をまとめて`order`昇順に並べる（同順位は元の並びを維持）
pub fn build_table(rows: Vec<MatchRow>) -> Result<ResultTable> {
    if rows.is_empty() {
        return Err(Error::EmptyResult);
    }

    let mut rows = rows;
    rows.sort_by_key(|r| r.order);

    Ok(ResultTable { rows })
}
