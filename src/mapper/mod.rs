//! マッピング作成
//!
//! - 自動割当: カタログ + ページテキスト + 抽出画像 → マッピング
//! - 手動テンプレート: 抽出画像 → `PRODUCT_ID_PAGE_<ページ>` のマッピング

mod report;

pub use report::{format_decision_line, format_summary};

use crate::catalog::{self, CatalogVariant};
use crate::error::{MapperError, Result};
use crate::pages;
use crate::scanner::{self, ImageFile};
use pdf_image_mapper_common::{
    resolve, Decision, ImageName, MappingDocument, Matcher, PageTextIndex, Resolution, RunStats,
};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

/// 命名規則に合わず対象外となったファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub file_name: String,
    pub reason: String,
}

/// 画像1枚の判定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDecision {
    pub file_name: String,
    pub decision: Decision,
}

/// 自動割当の結果
#[derive(Debug, Clone, Default)]
pub struct MappingRun {
    pub document: MappingDocument,
    /// 処理順（ファイル名順）の判定
    pub decisions: Vec<ImageDecision>,
    pub stats: RunStats,
    /// 検出した画像ファイル数（対象外を含む）
    pub total_images: usize,
    pub skipped: Vec<SkippedFile>,
}

/// 自動割当（ファイル入出力なし）
///
/// `images` はファイル名順であること。
pub fn build_mapping(images: &[ImageFile], pages: &PageTextIndex, matcher: &Matcher) -> MappingRun {
    let mut run = MappingRun {
        total_images: images.len(),
        ..Default::default()
    };
    let mut page_matches: HashMap<u32, Vec<String>> = HashMap::new();

    for image in images {
        let name = match ImageName::parse(&image.file_name) {
            Ok(name) => name,
            Err(e) => {
                warn!("対象外: {}", image.file_name);
                run.skipped.push(SkippedFile {
                    file_name: image.file_name.clone(),
                    reason: e.to_string(),
                });
                continue;
            }
        };

        let matches = page_matches
            .entry(name.page)
            .or_insert_with(|| matcher.find(pages.get(name.page)));
        debug!("{}: ページ{}の一致 {:?}", name.file_name, name.page, matches);

        let decision = resolve(name.page, name.ordinal, matches);
        run.stats = run.stats.record(&decision);
        run.document.insert(name.file_name.clone(), decision.resolution.clone());
        run.decisions.push(ImageDecision {
            file_name: name.file_name,
            decision,
        });
    }

    run
}

/// 自動割当を実行してマッピングファイルを保存
pub fn create_mapping(
    catalog_path: &Path,
    page_text_path: &Path,
    extracted_dir: &Path,
    output: &Path,
) -> Result<MappingRun> {
    let product_ids = catalog::load_product_ids(catalog_path, &CatalogVariant::All)?;
    let pages = pages::load_page_text(page_text_path)?;
    let images = scanner::scan_folder(extracted_dir)?;

    let matcher = Matcher::new(&product_ids)?;
    let run = build_mapping(&images, &pages, &matcher);

    save_mapping(&run.document, output)?;
    Ok(run)
}

/// 手動編集用テンプレート（全エントリが未割当）
pub fn build_template(images: &[ImageFile]) -> (MappingDocument, Vec<SkippedFile>) {
    let mut document = MappingDocument::new();
    let mut skipped = Vec::new();

    for image in images {
        match ImageName::parse(&image.file_name) {
            Ok(name) => document.insert(name.file_name, Resolution::pending_for_page(name.page)),
            Err(e) => {
                warn!("対象外: {}", image.file_name);
                skipped.push(SkippedFile {
                    file_name: image.file_name.clone(),
                    reason: e.to_string(),
                })
            }
        }
    }

    (document, skipped)
}

pub fn save_mapping(document: &MappingDocument, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, document.to_json_pretty()?)?;
    Ok(())
}

pub fn load_mapping(path: &Path) -> Result<MappingDocument> {
    if !path.exists() {
        return Err(MapperError::MappingNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    Ok(MappingDocument::from_json(&content)?)
}
