//! 需要エントリの抽出
//!
//! 需要ファイルの材料列を上から順に読み、空白や「/」だけの行を除外する。
//! 順序番号は除外前の行位置（1始まり）を保持する。

use crate::error::{Error, Result};
use crate::table::Table;
use regex::Regex;

/// 需要エントリ（材料1件）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemandEntry {
    order: usize,
    material: String,
}

impl DemandEntry {
    /// 材料テキストを前後trimして生成する。無効な材料なら`None`
    pub fn new(order: usize, material: &str) -> Option<Self> {
        let material = material.trim();
        if order == 0 || is_discarded(material) {
            return None;
        }
        Some(Self {
            order,
            material: material.to_string(),
        })
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn material(&self) -> &str {
        &self.material
    }
}

/// 抽出結果
#[derive(Debug, Clone)]
pub struct DemandExtraction {
    pub entries: Vec<DemandEntry>,
    /// 除外した行数
    pub discarded: usize,
}

/// 材料が空、または「/」と空白だけで構成されているか
pub fn is_discarded(material: &str) -> bool {
    lazy_static::lazy_static! {
        static ref SLASH_OR_BLANK: Regex = Regex::new(r"^[/\s]*$").unwrap();
    }

    SLASH_OR_BLANK.is_match(material)
}

/// 需要表から有効な材料を順序付きで取り出す
///
/// 全行が除外された場合は`Error::NoValidEntries`。
pub fn extract_demand_entries(table: &Table, material_column: &str) -> Result<DemandExtraction> {
    let column = table.column(material_column).ok_or_else(|| Error::Schema {
        source_kind: "demand".to_string(),
        missing: vec![material_column.to_string()],
    })?;

    let mut entries = Vec::new();
    let mut discarded = 0;

    for (idx, cell) in column.iter().enumerate() {
        let text = cell.text().unwrap_or_default();
        match DemandEntry::new(idx + 1, &text) {
            Some(entry) => entries.push(entry),
            None => discarded += 1,
        }
    }

    if entries.is_empty() {
        return Err(Error::NoValidEntries { discarded });
    }

    tracing::info!(
        "無効な材料{}件を除外、有効な材料{}件",
        discarded,
        entries.len()
    );

    Ok(DemandExtraction { entries, discarded })
}
