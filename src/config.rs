use crate::error::{MatchError, Result};
use material_match_common::ColumnNames;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub columns: ColumnNames,
    /// 受け取ったファイルの置き場所
    pub upload_dir: PathBuf,
    /// 照合結果の出力先
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            columns: ColumnNames::default(),
            upload_dir: PathBuf::from("uploads"),
            output_dir: PathBuf::from("output"),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| MatchError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("material-match").join("config.json"))
    }

    /// 受け取り・出力ディレクトリを作成する
    ///
    /// # Returns
    /// 新たに作成したディレクトリ
    pub fn ensure_directories(&self) -> Result<Vec<PathBuf>> {
        let mut created = Vec::new();
        for dir in [&self.upload_dir, &self.output_dir] {
            if !dir.exists() {
                std::fs::create_dir_all(dir)?;
                tracing::info!("ディレクトリを作成: {}", dir.display());
                created.push(dir.clone());
            }
        }
        Ok(created)
    }
}
