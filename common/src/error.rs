//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("{source_kind}ファイルに必要な列がありません: {}", .missing.join(", "))]
    Schema {
        source_kind: String,
        missing: Vec<String>,
    },

    #[error("需要ファイルに有効な材料がありません（無効な{discarded}件を除外）")]
    NoValidEntries { discarded: usize },

    #[error("一致するレコードが見つかりません")]
    EmptyResult,

    #[error("照合パターンの生成に失敗: {0}")]
    Pattern(#[from] regex::Error),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
