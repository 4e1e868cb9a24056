//! 照合処理の入口
//!
//! ## 処理フロー
//! 1. 需要・台帳ファイルの読み込み
//! 2. 必須列の検証
//! 3. 有効な材料の抽出（元の順序を保持）
//! 4. 材料ごとの摘要照合
//! 5. 結果表の組み立てと出力
//!
//! 一致0件のときはファイルを書かずに`None`を返す。

use crate::error::{MatchError, Result};
use crate::export::{self, OutputFormat};
use crate::loader;
use material_match_common::{
    build_table, extract_demand_entries, match_all, validate_columns, ColumnNames,
};
use std::path::{Path, PathBuf};

/// 呼び出し側に返す結果
#[derive(Debug)]
pub enum QueryOutcome {
    /// 出力ファイルを書き出した
    Written(PathBuf),
    /// 正常に処理したが一致なし
    NotFound,
    /// 入力不備・処理エラー
    Failed(MatchError),
}

impl QueryOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, QueryOutcome::Written(_))
    }

    /// 表示用メッセージ
    pub fn message(&self) -> String {
        match self {
            QueryOutcome::Written(path) => format!("結果を保存: {}", path.display()),
            QueryOutcome::NotFound => "一致するレコードが見つかりませんでした".to_string(),
            QueryOutcome::Failed(e) => format!("処理中にエラーが発生しました: {}", e),
        }
    }
}

/// 照合を実行し、結果をすべて`QueryOutcome`に変換して返す
pub fn match_materials(
    demand_path: &Path,
    store_path: &Path,
    output_path: &Path,
    format: OutputFormat,
    columns: &ColumnNames,
) -> QueryOutcome {
    match run_query(demand_path, store_path, output_path, format, columns) {
        Ok(Some(path)) => QueryOutcome::Written(path),
        Ok(None) => QueryOutcome::NotFound,
        Err(e) => {
            tracing::error!("照合失敗: {}", e);
            QueryOutcome::Failed(e)
        }
    }
}

/// 照合を実行する
///
/// # Returns
/// 出力したファイルのパス。一致0件なら`None`
pub fn run_query(
    demand_path: &Path,
    store_path: &Path,
    output_path: &Path,
    format: OutputFormat,
    columns: &ColumnNames,
) -> Result<Option<PathBuf>> {
    // 両方の存在を先に確認
    for path in [demand_path, store_path] {
        if !path.exists() {
            return Err(MatchError::FileNotFound(path.display().to_string()));
        }
    }

    let demand = loader::load(demand_path)?;
    let store = loader::load(store_path)?;

    validate_columns(&demand, &columns.demand_required(), "demand")?;
    validate_columns(&store, &columns.store_required(), "store")?;

    let extraction = extract_demand_entries(&demand, &columns.material)?;

    let rows = match_all(&extraction.entries, &store, columns, format.highlights())?;

    let table = match build_table(rows) {
        Ok(table) => table,
        Err(material_match_common::Error::EmptyResult) => {
            tracing::info!("一致するレコードがありません");
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    export::write_results(&table, output_path, format)?;

    Ok(Some(output_path.to_path_buf()))
}
