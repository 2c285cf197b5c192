//! 対応付けの型定義
//!
//! - Resolution: 画像1枚に対する割当結果（製品ID または プレースホルダ）
//! - PageTextIndex: ページ番号 → ページ本文

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// 手動テンプレートのプレースホルダ接頭辞（未割当）
pub const PENDING_PREFIX: &str = "PRODUCT_ID_";

const UNKNOWN_PREFIX: &str = "UNKNOWN_PAGE_";
const MULTI_PREFIX: &str = "MULTI_";

/// 画像1枚の割当結果
///
/// マッピングファイル上では文字列として表現される:
/// - `Resolved`: 製品IDそのもの（例: `YC0018CA`）
/// - `UnknownPage`: `UNKNOWN_PAGE_005`
/// - `MultiMatch`: `MULTI_007_YC0027CA`
/// - `PendingManual`: `PRODUCT_ID_PAGE_003`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// 製品IDが確定
    Resolved(String),
    /// ページ上に製品IDが見つからない
    UnknownPage(u32),
    /// 画像数が一致した製品ID数を超えている
    MultiMatch { page: u32, first: String },
    /// 手動入力待ち（`PRODUCT_ID_` 以降のラベルを保持）
    PendingManual(String),
}

impl Resolution {
    /// 手動テンプレート用のプレースホルダ
    pub fn pending_for_page(page: u32) -> Self {
        Resolution::PendingManual(format!("PAGE_{:03}", page))
    }

    /// マッピングファイルの文字列を解釈
    ///
    /// 接頭辞が一致しても書式が崩れているものは製品IDとして扱う。
    /// ただし `PRODUCT_ID_` で始まるものは常に未割当。
    pub fn parse(value: &str) -> Self {
        if let Some(label) = value.strip_prefix(PENDING_PREFIX) {
            return Resolution::PendingManual(label.to_string());
        }

        if let Some(digits) = value.strip_prefix(UNKNOWN_PREFIX) {
            if let Some(page) = parse_page(digits) {
                return Resolution::UnknownPage(page);
            }
        }

        if let Some(rest) = value.strip_prefix(MULTI_PREFIX) {
            if let Some((digits, first)) = rest.split_once('_') {
                if let Some(page) = parse_page(digits) {
                    if !first.is_empty() {
                        return Resolution::MultiMatch {
                            page,
                            first: first.to_string(),
                        };
                    }
                }
            }
        }

        Resolution::Resolved(value.to_string())
    }

    /// 確定した製品ID（プレースホルダは None）
    pub fn identifier(&self) -> Option<&str> {
        match self {
            Resolution::Resolved(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        !matches!(self, Resolution::Resolved(_))
    }
}

fn parse_page(digits: &str) -> Option<u32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Resolved(id) => write!(f, "{}", id),
            Resolution::UnknownPage(page) => write!(f, "{}{:03}", UNKNOWN_PREFIX, page),
            Resolution::MultiMatch { page, first } => {
                write!(f, "{}{:03}_{}", MULTI_PREFIX, page, first)
            }
            Resolution::PendingManual(label) => write!(f, "{}{}", PENDING_PREFIX, label),
        }
    }
}

impl From<&str> for Resolution {
    fn from(value: &str) -> Self {
        Resolution::parse(value)
    }
}

impl Serialize for Resolution {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Resolution {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Resolution::parse(&value))
    }
}

/// ページ番号（1始まり）→ 抽出テキスト
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageTextIndex {
    pages: BTreeMap<u32, String>,
}

impl PageTextIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, page: u32, text: impl Into<String>) {
        self.pages.insert(page, text.into());
    }

    /// ページ本文（存在しないページは空文字列）
    pub fn get(&self, page: u32) -> &str {
        self.pages.get(&page).map(String::as_str).unwrap_or("")
    }

    /// ページ数
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl FromIterator<(u32, String)> for PageTextIndex {
    fn from_iter<I: IntoIterator<Item = (u32, String)>>(iter: I) -> Self {
        Self {
            pages: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_placeholders() {
        assert_eq!(Resolution::UnknownPage(5).to_string(), "UNKNOWN_PAGE_005");
        assert_eq!(
            Resolution::MultiMatch { page: 7, first: "YC0027CA".into() }.to_string(),
            "MULTI_007_YC0027CA"
        );
        assert_eq!(Resolution::pending_for_page(3).to_string(), "PRODUCT_ID_PAGE_003");
        assert_eq!(Resolution::UnknownPage(1234).to_string(), "UNKNOWN_PAGE_1234");
    }

    #[test]
    fn test_parse_placeholders() {
        assert_eq!(Resolution::parse("UNKNOWN_PAGE_012"), Resolution::UnknownPage(12));
        assert_eq!(
            Resolution::parse("MULTI_007_YC0027CA"),
            Resolution::MultiMatch { page: 7, first: "YC0027CA".into() }
        );
        assert_eq!(
            Resolution::parse("PRODUCT_ID_PAGE_003"),
            Resolution::PendingManual("PAGE_003".into())
        );
        // 接頭辞のみ一致する任意のラベルも未割当
        assert!(Resolution::parse("PRODUCT_ID_TODO").is_placeholder());
    }

    #[test]
    fn test_parse_identifier() {
        assert_eq!(Resolution::parse("YC0018CA"), Resolution::Resolved("YC0018CA".into()));
        // 書式が崩れたものは製品IDとして扱う
        assert_eq!(
            Resolution::parse("UNKNOWN_PAGE_X"),
            Resolution::Resolved("UNKNOWN_PAGE_X".into())
        );
        assert_eq!(Resolution::parse("MULTI_abc"), Resolution::Resolved("MULTI_abc".into()));
    }

    #[test]
    fn test_identifier_accessor() {
        assert_eq!(Resolution::Resolved("YF0001AA".into()).identifier(), Some("YF0001AA"));
        assert_eq!(Resolution::UnknownPage(1).identifier(), None);
    }

    #[test]
    fn test_page_text_missing_page_is_empty() {
        let mut index = PageTextIndex::new();
        index.insert(1, "YC0018CA antenna");
        assert_eq!(index.get(1), "YC0018CA antenna");
        assert_eq!(index.get(2), "");
        assert_eq!(index.len(), 1);
    }
}
