use crate::error::{MapperError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 既定の入出力パス（CLI引数で個別に上書きできる）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub catalog_path: PathBuf,
    pub page_text_path: PathBuf,
    pub extracted_dir: PathBuf,
    pub products_dir: PathBuf,
    pub mapping_file: PathBuf,
    /// 手動テンプレートの候補一覧から除外する派生品の接尾辞
    pub excluded_suffix: String,
    /// 手動テンプレート作成時に表示する候補数
    pub preview_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("./src/data/antennas.json"),
            page_text_path: PathBuf::from("./page_text.json"),
            extracted_dir: PathBuf::from("./public/images/extracted"),
            products_dir: PathBuf::from("./public/images/products"),
            mapping_file: PathBuf::from("image_mapping.json"),
            excluded_suffix: "EVB".into(),
            preview_count: 20,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<PathBuf> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(config_path)
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| MapperError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("pdf-image-mapper").join("config.json"))
    }
}
