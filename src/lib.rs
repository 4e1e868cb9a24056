//! material-match
//!
//! 材料需要リスト（demand）の各材料について、出納台帳（store）の摘要に
//! その材料名を含むレコードを需要の並び順に抽出し、CSVまたはHTMLで出力する。

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod loader;
pub mod query;

pub use error::{MatchError, Result};
pub use export::OutputFormat;
pub use query::{match_materials, run_query, QueryOutcome};
