pub mod csv;
pub mod html;

use crate::error::{MatchError, Result};
use material_match_common::ResultTable;
use std::path::{Path, PathBuf};

/// 出力ファイルの基本名
pub const RESULT_FILE_STEM: &str = "query_result";

/// 照合結果の出力形式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// CSV（機械処理向け）
    #[default]
    Plain,
    /// ハイライト付きHTMLレポート
    Html,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Plain => "csv",
            OutputFormat::Html => "html",
        }
    }

    /// 摘要をハイライトするか
    pub fn highlights(&self) -> bool {
        matches!(self, OutputFormat::Html)
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" | "csv" => Ok(OutputFormat::Plain),
            "html" => Ok(OutputFormat::Html),
            _ => Err(format!("Unknown format: {}. Use plain or html", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Html => write!(f, "html"),
        }
    }
}

/// 出力ディレクトリ内の既定ファイルパス
pub fn default_output_path(output_dir: &Path, format: OutputFormat) -> PathBuf {
    output_dir.join(format!("{}.{}", RESULT_FILE_STEM, format.extension()))
}

/// 照合結果を指定形式で書き出す
pub fn write_results(table: &ResultTable, path: &Path, format: OutputFormat) -> Result<()> {
    let bytes = match format {
        OutputFormat::Plain => csv::render_plain(table)?,
        OutputFormat::Html => html::render_html(table).into_bytes(),
    };
    write_file(path, &bytes)?;

    tracing::info!("{}件の照合結果を出力: {}", table.len(), path.display());
    Ok(())
}

/// 親ディレクトリを作成してから上書き保存
fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    if path.is_dir() {
        return Err(MatchError::Processing(format!(
            "出力先がディレクトリです: {}",
            path.display()
        )));
    }
    std::fs::write(path, bytes)?;
    Ok(())
}
