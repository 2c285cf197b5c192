use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapperError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("カタログファイルが見つかりません: {0}")]
    CatalogNotFound(String),

    #[error("ページテキストファイルが見つかりません: {0}")]
    PageTextNotFound(String),

    #[error("画像フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("マッピングファイルが見つかりません: {0}（先に `image-map map` または `image-map template` を実行してください）")]
    MappingNotFound(String),

    #[error("カタログが不正: {0}")]
    InvalidCatalog(String),

    #[error("ページテキストが不正: {0}")]
    InvalidPageText(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error(transparent)]
    Common(#[from] pdf_image_mapper_common::Error),
}

impl MapperError {
    /// プロセス終了コード（前提条件の欠落ごとに区別する）
    pub fn exit_code(&self) -> u8 {
        match self {
            MapperError::CatalogNotFound(_) => 2,
            MapperError::PageTextNotFound(_) => 3,
            MapperError::FolderNotFound(_) => 4,
            MapperError::MappingNotFound(_) => 5,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, MapperError>;
