//! PDF Image Mapper Common Library
//!
//! 抽出画像と製品IDの対応付けロジック（ファイル操作を含まない部分）

pub mod error;
pub mod types;
pub mod filename;
pub mod matcher;
pub mod resolver;
pub mod mapping;

pub use error::{Error, Result};
pub use types::{PageTextIndex, Resolution, PENDING_PREFIX};
pub use filename::ImageName;
pub use matcher::Matcher;
pub use resolver::{resolve, Basis, Decision, RunStats};
pub use mapping::MappingDocument;
