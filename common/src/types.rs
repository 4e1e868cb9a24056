//! 照合で扱う型の定義
//!
//! - Cell: 表の1セル（CSV/Excel共通）
//! - ColumnNames: 需要・台帳ファイルの必須列名
//! - MatchRow: 照合結果の1行

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// 表の1セル
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cell {
    #[default]
    Empty,
    Text(String),
    Int(i64),
    Number(f64),
    Bool(bool),
}

impl Cell {
    /// 空セルなら`None`、それ以外は表示文字列
    pub fn text(&self) -> Option<String> {
        match self {
            Cell::Empty => None,
            other => Some(other.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(s) => f.write_str(s),
            Cell::Int(n) => write!(f, "{}", n),
            Cell::Number(n) => write!(f, "{}", n),
            Cell::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        if s.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(s.to_string())
        }
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// 必須列名の設定
///
/// デフォルト値は既存の需要表・出納台帳の見出しに合わせている。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColumnNames {
    /// 需要ファイルの材料列
    pub material: String,
    /// 台帳ファイルの摘要列
    pub summary: String,
    /// 台帳ファイルの取引先列
    pub counterparty: String,
    /// 台帳ファイルの金額列
    pub amount: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            material: "材料".into(),
            summary: "摘要".into(),
            counterparty: "供应商/客户名称".into(),
            amount: "单据金额".into(),
        }
    }
}

impl ColumnNames {
    /// 台帳ファイルで必須の列
    pub fn store_required(&self) -> [&str; 3] {
        [self.summary.as_str(), self.counterparty.as_str(), self.amount.as_str()]
    }

    /// 需要ファイルで必須の列
    pub fn demand_required(&self) -> [&str; 1] {
        [self.material.as_str()]
    }
}

/// 摘要テキスト（素のままか、ハイライト済みマークアップか）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Summary {
    /// 台帳の値そのまま
    Plain(String),
    /// HTMLエスケープ済み・ハイライトspan挿入済み
    Highlighted(String),
}

impl Summary {
    pub fn as_str(&self) -> &str {
        match self {
            Summary::Plain(s) | Summary::Highlighted(s) => s,
        }
    }

    pub fn is_highlighted(&self) -> bool {
        matches!(self, Summary::Highlighted(_))
    }
}

impl Serialize for Summary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// 照合結果の1行
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRow {
    /// 需要ファイル上の行番号（1始まり）
    pub order: usize,
    /// 需要ファイルの材料名
    pub material: String,
    pub counterparty: String,
    pub amount: Cell,
    pub summary: Summary,
}
