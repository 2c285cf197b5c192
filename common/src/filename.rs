//! 抽出画像ファイル名の解析
//!
//! 抽出時の命名規則: `page_<ページ3桁>_img_<連番2桁>.<拡張子>`

use crate::error::{Error, Result};
use regex::Regex;

/// ファイル名から読み取った位置情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageName {
    pub file_name: String,
    /// ページ番号（1始まり）
    pub page: u32,
    /// ページ内の画像連番（1始まり）
    pub ordinal: u32,
    pub extension: String,
}

impl ImageName {
    pub fn parse(file_name: &str) -> Result<Self> {
        lazy_static::lazy_static! {
            static ref NAME_RE: Regex = Regex::new(r"^page_(\d+)_img_(\d+)\.(\w+)$").unwrap();
        }

        let caps = NAME_RE
            .captures(file_name)
            .ok_or_else(|| Error::Parse(format!("命名規則に一致しません: {}", file_name)))?;

        let page = parse_positive(&caps[1], file_name)?;
        let ordinal = parse_positive(&caps[2], file_name)?;

        Ok(Self {
            file_name: file_name.to_string(),
            page,
            ordinal,
            extension: caps[3].to_string(),
        })
    }
}

fn parse_positive(digits: &str, file_name: &str) -> Result<u32> {
    match digits.parse::<u32>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(Error::Parse(format!("番号が不正です: {}", file_name))),
    }
}
