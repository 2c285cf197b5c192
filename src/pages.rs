//! ページテキスト読み込み
//!
//! PDFパーサが出力したページ本文を読み込む。受け付ける形式:
//! - `{"1": "本文", "2": "本文"}`（キーは1始まりのページ番号）
//! - `["本文", "本文"]`（要素 i がページ i+1）

use crate::error::{MapperError, Result};
use pdf_image_mapper_common::PageTextIndex;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

#[derive(Deserialize)]
#[serde(untagged)]
enum PageTextSource {
    Keyed(HashMap<String, String>),
    Sequence(Vec<String>),
}

pub fn load_page_text(path: &Path) -> Result<PageTextIndex> {
    if !path.exists() {
        return Err(MapperError::PageTextNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let index = parse_page_text(&content)?;
    info!("ページテキスト {} ページ分を読み込み", index.len());

    Ok(index)
}

pub fn parse_page_text(json: &str) -> Result<PageTextIndex> {
    let source: PageTextSource = serde_json::from_str(json).map_err(|_| {
        MapperError::InvalidPageText("ページ番号→本文のオブジェクト、または本文の配列が必要です".into())
    })?;

    match source {
        PageTextSource::Keyed(pages) => pages
            .into_iter()
            .map(|(key, text)| match key.trim().parse::<u32>() {
                Ok(page) if page >= 1 => Ok((page, text)),
                _ => Err(MapperError::InvalidPageText(format!("ページ番号が不正: {}", key))),
            })
            .collect(),
        PageTextSource::Sequence(pages) => Ok(pages
            .into_iter()
            .enumerate()
            .map(|(i, text)| (i as u32 + 1, text))
            .collect()),
    }
}
