//! Material Match Common Library
//!
//! 入出力を持たない照合ロジックと共通型

pub mod types;
pub mod table;
pub mod demand;
pub mod markup;
pub mod matcher;
pub mod report;
pub mod error;

pub use types::{Cell, ColumnNames, MatchRow, Summary};
pub use table::{validate_columns, ColumnView, Table};
pub use demand::{extract_demand_entries, is_discarded, DemandEntry, DemandExtraction};
pub use markup::{escape_html, HIGHLIGHT_CLASS};
pub use matcher::{match_all, match_entry, Needle};
pub use report::{build_table, ResultTable, RESULT_HEADERS};
pub use error::{Error, Result};
