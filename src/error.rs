use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("対応していないファイル形式です: {0}（csv / xlsx / xls のみ）")]
    UnsupportedFormat(String),

    #[error("CSV読み書きエラー: {0}")]
    Csv(#[from] csv::Error),

    #[error("Excel読み込みエラー: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("処理エラー: {0}")]
    Processing(String),

    #[error(transparent)]
    Common(#[from] material_match_common::Error),
}

impl MatchError {
    /// 一致0件（エラーではなく「見つからなかった」扱い）か
    pub fn is_empty_result(&self) -> bool {
        matches!(
            self,
            MatchError::Common(material_match_common::Error::EmptyResult)
        )
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;
