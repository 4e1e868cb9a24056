use crate::export::OutputFormat;
use clap::{ArgAction, Args, Parser, Subcommand};
use material_match_common::ColumnNames;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "material-match")]
#[command(about = "材料需要リストと出納台帳の摘要照合ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力（-v, -vv, -vvv）
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 需要ファイルと台帳ファイルを照合して結果を出力
    Run {
        /// 需要ファイル（材料リスト: csv/xlsx/xls）
        #[arg(required = true)]
        demand: PathBuf,

        /// 台帳ファイル（出納記録: csv/xlsx/xls）
        #[arg(required = true)]
        store: PathBuf,

        /// 出力ディレクトリ（デフォルト: 設定のoutput_dir）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力形式 (plain/html/both)
        #[arg(short, long, default_value = "both")]
        format: ExportFormat,

        #[command(flatten)]
        columns: ColumnArgs,
    },

    /// 出力済みCSVの内容を表示
    Show {
        /// 照合結果CSV
        #[arg(required = true)]
        file: PathBuf,
    },

    /// 設定を表示/編集
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// 設定を初期値に戻す
        #[arg(long)]
        reset: bool,

        /// 受け取りディレクトリ
        #[arg(long)]
        upload_dir: Option<PathBuf>,

        /// 出力ディレクトリ
        #[arg(long)]
        output_dir: Option<PathBuf>,

        #[command(flatten)]
        columns: ColumnArgs,
    },

    /// 受け取り・出力ディレクトリを作成
    Init,
}

/// 列名の上書き指定
#[derive(Args, Clone, Debug, Default)]
pub struct ColumnArgs {
    /// 需要ファイルの材料列名
    #[arg(long)]
    pub material_column: Option<String>,

    /// 台帳ファイルの摘要列名
    #[arg(long)]
    pub summary_column: Option<String>,

    /// 台帳ファイルの取引先列名
    #[arg(long)]
    pub counterparty_column: Option<String>,

    /// 台帳ファイルの金額列名
    #[arg(long)]
    pub amount_column: Option<String>,
}

impl ColumnArgs {
    pub fn is_empty(&self) -> bool {
        self.material_column.is_none()
            && self.summary_column.is_none()
            && self.counterparty_column.is_none()
            && self.amount_column.is_none()
    }

    /// 指定された列名だけを上書きした設定を返す
    pub fn apply(&self, base: &ColumnNames) -> ColumnNames {
        ColumnNames {
            material: self.material_column.clone().unwrap_or_else(|| base.material.clone()),
            summary: self.summary_column.clone().unwrap_or_else(|| base.summary.clone()),
            counterparty: self
                .counterparty_column
                .clone()
                .unwrap_or_else(|| base.counterparty.clone()),
            amount: self.amount_column.clone().unwrap_or_else(|| base.amount.clone()),
        }
    }
}

/// CLIで選べる出力形式
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    Plain,
    Html,
    #[default]
    Both,
}

impl ExportFormat {
    /// 実際に書き出す形式の一覧
    pub fn formats(&self) -> Vec<OutputFormat> {
        match self {
            ExportFormat::Plain => vec![OutputFormat::Plain],
            ExportFormat::Html => vec![OutputFormat::Html],
            ExportFormat::Both => vec![OutputFormat::Plain, OutputFormat::Html],
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" | "csv" => Ok(ExportFormat::Plain),
            "html" => Ok(ExportFormat::Html),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use plain, html, or both", s)),
        }
    }
}
