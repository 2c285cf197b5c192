//! 製品カタログ読み込み
//!
//! JSON（`[{"id": "..."}, ...]`）または Excel（`id` 列）から製品IDをカタログ順で取り出す。
//! 重複除去や形式チェックは行わない。

mod excel;

use crate::error::{MapperError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// 読み込む製品IDの範囲
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogVariant {
    /// 全製品ID（自動割当用）
    All,
    /// 指定の接尾辞で終わるIDを除外（手動テンプレート用）
    ExcludingSuffix(String),
}

impl CatalogVariant {
    fn accepts(&self, id: &str) -> bool {
        match self {
            CatalogVariant::All => true,
            CatalogVariant::ExcludingSuffix(suffix) => !id.ends_with(suffix.as_str()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ProductRecord {
    id: String,
}

/// カタログファイルから製品IDを読み込み
pub fn load_product_ids(path: &Path, variant: &CatalogVariant) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(MapperError::CatalogNotFound(path.display().to_string()));
    }

    let ids = if is_spreadsheet(path) {
        excel::read_id_column(path)?
    } else {
        let content = std::fs::read_to_string(path)?;
        parse_json_catalog(&content)?
    };
    debug!("カタログ {} 件を読み込み: {}", ids.len(), path.display());

    let selected: Vec<String> = ids.into_iter().filter(|id| variant.accepts(id)).collect();
    info!("製品ID {} 件 ({:?})", selected.len(), variant);

    Ok(selected)
}

/// JSON配列の各レコードから `id` を取り出す（他のフィールドは無視）
pub fn parse_json_catalog(json: &str) -> Result<Vec<String>> {
    let records: Vec<ProductRecord> = serde_json::from_str(json)
        .map_err(|e| MapperError::InvalidCatalog(format!("JSONパースエラー: {}", e)))?;

    Ok(records.into_iter().map(|r| r.id).collect())
}

fn is_spreadsheet(path: &Path) -> bool {
    path.extension()
        .map(|e| {
            let ext = e.to_string_lossy().to_lowercase();
            ext == "xlsx" || ext == "xls"
        })
        .unwrap_or(false)
}
