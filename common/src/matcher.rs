//! 製品ID照合
//!
//! ページ本文に製品IDが単語として出現するかを判定する。
//! - 大文字小文字を区別しない
//! - 前後が英数字/アンダースコアの場合は一致としない（`YC0018CA` は `YC0018CAEVB` に一致しない）
//! - 結果はカタログ順（本文中の出現順ではない）

use crate::error::{Error, Result};
use regex::{Regex, RegexBuilder};

/// カタログ全体に対する照合器
///
/// 候補ごとの正規表現を一度だけ構築し、全ページで使い回す。
#[derive(Debug, Clone)]
pub struct Matcher {
    candidates: Vec<(String, Regex)>,
}

impl Matcher {
    /// 候補製品ID（カタログ順）から照合器を構築
    ///
    /// 空文字列の候補はどのページにも一致しない。
    pub fn new<I, S>(candidates: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut compiled = Vec::new();

        for candidate in candidates {
            let id = candidate.as_ref();
            if id.is_empty() {
                continue;
            }

            let pattern = format!(r"\b{}\b", regex::escape(id));
            let re = RegexBuilder::new(&pattern)
                .case_insensitive(true)
                .build()
                .map_err(|e| Error::Parse(format!("照合パターンの構築に失敗: {}: {}", id, e)))?;

            compiled.push((id.to_string(), re));
        }

        Ok(Self { candidates: compiled })
    }

    /// ページ本文に出現する製品ID（カタログ順、元の表記のまま）
    pub fn find(&self, page_text: &str) -> Vec<String> {
        if page_text.is_empty() {
            return Vec::new();
        }

        self.candidates
            .iter()
            .filter(|(_, re)| re.is_match(page_text))
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// 候補数
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(ids: &[&str]) -> Matcher {
        Matcher::new(ids.iter().copied()).unwrap()
    }

    #[test]
    fn test_whole_word_case_insensitive() {
        let m = matcher(&["YC0018CA"]);
        assert_eq!(m.find("Model: yc0018ca (LTE)"), vec!["YC0018CA"]);
        assert_eq!(m.find("YC0018CA\nMain antenna"), vec!["YC0018CA"]);
    }

    #[test]
    fn test_substring_of_longer_token_is_not_a_match() {
        let m = matcher(&["YC0018CA"]);
        assert!(m.find("Evaluation board YC0018CAEVB").is_empty());
        assert!(m.find("XYC0018CA").is_empty());
        assert!(m.find("YC0018CA_v2").is_empty());
    }

    #[test]
    fn test_result_follows_catalog_order() {
        let m = matcher(&["YC0018CA", "YC0018CAEVB", "YF0001AA"]);
        let text = "YF0001AA ... YC0018CAEVB ... YC0018CA";
        assert_eq!(m.find(text), vec!["YC0018CA", "YC0018CAEVB", "YF0001AA"]);
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let m = matcher(&["A.B", "C+D"]);
        assert!(m.find("AxB CCD").is_empty());
        assert_eq!(m.find("see A.B and C+D"), vec!["A.B", "C+D"]);
    }

    #[test]
    fn test_original_casing_is_preserved() {
        let m = matcher(&["Yc0018Ca"]);
        assert_eq!(m.find("YC0018CA"), vec!["Yc0018Ca"]);
    }

    #[test]
    fn test_empty_inputs() {
        let m = matcher(&["", "YC0018CA"]);
        assert_eq!(m.len(), 1);
        assert!(m.find("").is_empty());
        assert!(matcher(&[]).find("YC0018CA").is_empty());
    }
}
