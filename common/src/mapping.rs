//! マッピングファイル（画像ファイル名 → 割当）
//!
//! 自動割当と手動修正・適用の間で受け渡す唯一のファイル。
//! JSONオブジェクトとして保存し、キーの挿入順を保持する。

use crate::error::Result;
use crate::types::Resolution;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 挿入順を保持するマッピング
///
/// 同名キーは最初の位置のまま値を上書きする。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MappingDocument {
    entries: IndexMap<String, Resolution>,
}

impl MappingDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, file_name: impl Into<String>, resolution: Resolution) {
        self.entries.insert(file_name.into(), resolution);
    }

    pub fn get(&self, file_name: &str) -> Option<&Resolution> {
        self.entries.get(file_name)
    }

    /// 挿入順のエントリ（ファイル名, 割当）
    pub fn entries(&self) -> indexmap::map::Iter<'_, String, Resolution> {
        self.entries.iter()
    }

    /// 位置指定でエントリを取得
    pub fn get_index(&self, index: usize) -> Option<(&String, &Resolution)> {
        self.entries.get_index(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 未割当（プレースホルダ）のエントリ数
    pub fn pending_count(&self) -> usize {
        self.entries.values().filter(|r| r.is_placeholder()).count()
    }

    /// インデント付きJSON（非ASCIIはそのまま出力）
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl FromIterator<(String, Resolution)> for MappingDocument {
    fn from_iter<I: IntoIterator<Item = (String, Resolution)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MappingDocument {
        let mut doc = MappingDocument::new();
        doc.insert("page_005_img_01.jpg", Resolution::UnknownPage(5));
        doc.insert("page_003_img_01.png", Resolution::Resolved("YC0018CA".into()));
        doc.insert(
            "page_003_img_03.png",
            Resolution::MultiMatch { page: 3, first: "YC0018CA".into() },
        );
        doc
    }

    #[test]
    fn test_pretty_json_layout() {
        let json = sample().to_json_pretty().unwrap();
        let expected = "{\n  \"page_005_img_01.jpg\": \"UNKNOWN_PAGE_005\",\n  \"page_003_img_01.png\": \"YC0018CA\",\n  \"page_003_img_03.png\": \"MULTI_003_YC0018CA\"\n}";
        assert_eq!(json, expected);
    }

    #[test]
    fn test_reparse_keeps_insertion_order() {
        let doc = sample();
        let reparsed = MappingDocument::from_json(&doc.to_json_pretty().unwrap()).unwrap();
        assert_eq!(reparsed, doc);
        assert_eq!(reparsed.get_index(0).unwrap().0, "page_005_img_01.jpg");
    }

    #[test]
    fn test_non_ascii_kept_verbatim() {
        let mut doc = MappingDocument::new();
        doc.insert("page_001_img_01.png", Resolution::Resolved("アンテナ01".into()));
        let json = doc.to_json_pretty().unwrap();
        assert!(json.contains("アンテナ01"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_duplicate_key_keeps_first_position_last_value() {
        let json = r#"{"a.png": "X1", "b.png": "Y1", "a.png": "X2"}"#;
        let doc = MappingDocument::from_json(json).unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.get_index(0).unwrap().0, "a.png");
        assert_eq!(doc.get("a.png"), Some(&Resolution::Resolved("X2".into())));
    }

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut doc = sample();
        doc.insert("page_005_img_01.jpg", Resolution::Resolved("YF0001AA".into()));
        assert_eq!(doc.len(), 3);
        assert_eq!(doc.get_index(0).unwrap().1, &Resolution::Resolved("YF0001AA".into()));

        let collected: MappingDocument = doc
            .entries()
            .map(|(f, r)| (f.clone(), r.clone()))
            .collect();
        assert_eq!(collected, doc);
    }

    #[test]
    fn test_pending_count() {
        let mut doc = sample();
        doc.insert("page_009_img_01.png", Resolution::pending_for_page(9));
        assert_eq!(doc.pending_count(), 3);
    }

    #[test]
    fn test_rejects_non_object() {
        assert!(MappingDocument::from_json("[1, 2]").is_err());
    }
}
