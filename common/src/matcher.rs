//! 摘要照合エンジン
//!
//! 需要エントリごとにリテラル照合パターンを1回だけ生成し、
//! 台帳の全行の摘要に対して使い回す。
//!
//! ## 照合規則
//! - 行の選択: 材料名を部分文字列として含むか（大文字小文字を区別）
//! - ハイライト: 選択された行の中で、大文字小文字を無視して全出現箇所を囲む

use crate::demand::DemandEntry;
use crate::error::{Error, Result};
use crate::markup;
use crate::table::Table;
use crate::types::{ColumnNames, MatchRow, Summary};
use regex::{Regex, RegexBuilder};

/// 1件の材料に対するコンパイル済みパターン
#[derive(Debug, Clone)]
pub struct Needle {
    exact: Regex,
    folded: Regex,
}

impl Needle {
    pub fn new(material: &str) -> Result<Self> {
        let escaped = regex::escape(material);
        Ok(Self {
            exact: Regex::new(&escaped)?,
            folded: RegexBuilder::new(&escaped).case_insensitive(true).build()?,
        })
    }

    /// 摘要が材料名を含むか（大文字小文字を区別）
    pub fn is_match(&self, summary: &str) -> bool {
        self.exact.is_match(summary)
    }

    /// ハイライト済みHTML断片を返す
    pub fn highlight(&self, summary: &str) -> String {
        markup::highlight(summary, &self.folded)
    }
}

/// 全需要エントリを台帳と照合する
///
/// 戻り値は需要エントリ順、同一エントリ内は台帳の行順。
/// 一致が1件もなくてもエラーにはしない。
pub fn match_all(
    entries: &[DemandEntry],
    store: &Table,
    columns: &ColumnNames,
    highlight: bool,
) -> Result<Vec<MatchRow>> {
    let per_entry = entries
        .iter()
        .map(|entry| match_entry(entry, store, columns, highlight))
        .collect::<Result<Vec<_>>>()?;

    Ok(per_entry.into_iter().flatten().collect())
}

/// 1件の需要エントリに一致する台帳行を集める
pub fn match_entry(
    entry: &DemandEntry,
    store: &Table,
    columns: &ColumnNames,
    highlight: bool,
) -> Result<Vec<MatchRow>> {
    let column = |name: &str| {
        store.column(name).ok_or_else(|| Error::Schema {
            source_kind: "store".to_string(),
            missing: vec![name.to_string()],
        })
    };
    let summaries = column(columns.summary.as_str())?;
    let counterparties = column(columns.counterparty.as_str())?;
    let amounts = column(columns.amount.as_str())?;

    let needle = Needle::new(entry.material())?;

    let rows: Vec<MatchRow> = summaries
        .iter()
        .enumerate()
        .filter_map(|(row, cell)| {
            let text = cell.text()?;
            if !needle.is_match(&text) {
                return None;
            }
            let summary = if highlight {
                Summary::Highlighted(needle.highlight(&text))
            } else {
                Summary::Plain(text)
            };
            Some(MatchRow {
                order: entry.order(),
                material: entry.material().to_string(),
                counterparty: counterparties.get(row).to_string(),
                amount: amounts.get(row).clone(),
                summary,
            })
        })
        .collect();

    tracing::debug!(
        "材料#{}「{}」: {}件一致",
        entry.order(),
        entry.material(),
        rows.len()
    );

    Ok(rows)
}
