//! マッピング適用
//!
//! レビュー済みのマッピングに従い、抽出画像を `<製品ID>.<拡張子>` として製品画像フォルダへコピーする。
//! 未割当のエントリや元画像がないエントリはスキップし、結果はエントリごとに `ApplyReport` に残す。
//! 同じマッピングで何度実行しても同じファイル群になる（上書きコピー）。

use crate::error::{MapperError, Result};
use pdf_image_mapper_common::{ImageName, MappingDocument, Resolution};
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};

/// スキップ理由
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// 手動テンプレートのまま
    Pending,
    /// 自動割当で製品IDが見つからなかった
    UnknownPage(u32),
    /// 自動割当で確定できなかった
    MultiMatch { page: u32, first: String },
    /// 抽出画像フォルダ直下の画像ファイル名ではない
    InvalidSource,
    /// 製品IDがファイル名として使えない
    InvalidTarget(String),
    /// 元画像がない
    SourceMissing,
    /// 先行エントリが同じコピー先を使用済み
    DuplicateTarget(String),
    /// コピー失敗
    CopyFailed(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Pending => write!(f, "未割当"),
            SkipReason::UnknownPage(page) => write!(f, "ページ{}に製品IDなし", page),
            SkipReason::MultiMatch { page, first } => {
                write!(f, "ページ{}で複数一致（先頭: {}）", page, first)
            }
            SkipReason::InvalidSource => write!(f, "抽出画像のファイル名ではありません"),
            SkipReason::InvalidTarget(id) => write!(f, "ファイル名に使えない製品ID: {:?}", id),
            SkipReason::SourceMissing => write!(f, "元画像が見つかりません"),
            SkipReason::DuplicateTarget(target) => write!(f, "コピー先が重複: {}", target),
            SkipReason::CopyFailed(msg) => write!(f, "コピー失敗: {}", msg),
        }
    }
}

/// エントリ1件の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    Copied { target: String },
    /// コピー先が同一内容のため書き込みなし
    Unchanged { target: String },
    Skipped(SkipReason),
}

impl ApplyOutcome {
    pub fn is_materialized(&self) -> bool {
        matches!(self, ApplyOutcome::Copied { .. } | ApplyOutcome::Unchanged { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryOutcome {
    pub file_name: String,
    pub outcome: ApplyOutcome,
}

/// 適用結果（マッピング順）
#[derive(Debug, Clone, Default)]
pub struct ApplyReport {
    pub products_dir: PathBuf,
    pub entries: Vec<EntryOutcome>,
}

impl ApplyReport {
    /// コピー先に揃ったファイル数
    pub fn materialized(&self) -> usize {
        self.entries.iter().filter(|e| e.outcome.is_materialized()).count()
    }

    pub fn skipped(&self) -> impl Iterator<Item = (&str, &SkipReason)> {
        self.entries.iter().filter_map(|e| match &e.outcome {
            ApplyOutcome::Skipped(reason) => Some((e.file_name.as_str(), reason)),
            _ => None,
        })
    }

    /// 未割当以外の理由でスキップしたもの（要確認）
    pub fn warnings(&self) -> impl Iterator<Item = (&str, &SkipReason)> {
        self.skipped().filter(|(_, reason)| {
            matches!(
                reason,
                SkipReason::SourceMissing
                    | SkipReason::InvalidSource
                    | SkipReason::InvalidTarget(_)
                    | SkipReason::DuplicateTarget(_)
                    | SkipReason::CopyFailed(_)
            )
        })
    }
}

/// マッピングを適用
pub fn apply_mapping(
    document: &MappingDocument,
    extracted_dir: &Path,
    products_dir: &Path,
) -> Result<ApplyReport> {
    if !extracted_dir.is_dir() {
        return Err(MapperError::FolderNotFound(extracted_dir.display().to_string()));
    }
    std::fs::create_dir_all(products_dir)?;

    let mut report = ApplyReport {
        products_dir: products_dir.to_path_buf(),
        entries: Vec::with_capacity(document.len()),
    };
    let mut used_targets = HashSet::new();

    for (file_name, resolution) in document.entries() {
        let outcome = apply_entry(
            file_name,
            resolution,
            extracted_dir,
            products_dir,
            &mut used_targets,
        );

        if let ApplyOutcome::Skipped(reason) = &outcome {
            match reason {
                SkipReason::Pending | SkipReason::UnknownPage(_) | SkipReason::MultiMatch { .. } => {
                    debug!("スキップ: {} ({})", file_name, reason)
                }
                _ => warn!("{}: {}", file_name, reason),
            }
        }

        report.entries.push(EntryOutcome {
            file_name: file_name.clone(),
            outcome,
        });
    }

    Ok(report)
}

fn apply_entry(
    file_name: &str,
    resolution: &Resolution,
    extracted_dir: &Path,
    products_dir: &Path,
    used_targets: &mut HashSet<String>,
) -> ApplyOutcome {
    let product_id = match resolution {
        Resolution::Resolved(id) => id,
        Resolution::PendingManual(_) => return ApplyOutcome::Skipped(SkipReason::Pending),
        Resolution::UnknownPage(page) => return ApplyOutcome::Skipped(SkipReason::UnknownPage(*page)),
        Resolution::MultiMatch { page, first } => {
            return ApplyOutcome::Skipped(SkipReason::MultiMatch {
                page: *page,
                first: first.clone(),
            })
        }
    };

    if !is_extracted_image_name(file_name) {
        return ApplyOutcome::Skipped(SkipReason::InvalidSource);
    }

    let target = match target_name(file_name, product_id) {
        Some(target) => target,
        None => return ApplyOutcome::Skipped(SkipReason::InvalidTarget(product_id.clone())),
    };

    let source = extracted_dir.join(file_name);
    if !source.is_file() {
        return ApplyOutcome::Skipped(SkipReason::SourceMissing);
    }

    if !used_targets.insert(target.clone()) {
        return ApplyOutcome::Skipped(SkipReason::DuplicateTarget(target));
    }

    let destination = products_dir.join(&target);
    match copy_if_changed(&source, &destination) {
        Ok(true) => ApplyOutcome::Copied { target },
        Ok(false) => ApplyOutcome::Unchanged { target },
        Err(e) => ApplyOutcome::Skipped(SkipReason::CopyFailed(e.to_string())),
    }
}

/// 抽出画像フォルダ直下を指す命名規則どおりのファイル名か
pub fn is_extracted_image_name(file_name: &str) -> bool {
    let mut components = Path::new(file_name).components();
    let single_normal = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    single_normal && ImageName::parse(file_name).is_ok()
}

/// `<製品ID><元の拡張子>`（製品IDがファイル名として不正なら None）
pub fn target_name(file_name: &str, product_id: &str) -> Option<String> {
    let id = product_id.trim();
    if id.is_empty() || id == "." || id == ".." || id.contains(|c: char| c == '/' || c == '\\') {
        return None;
    }

    match Path::new(file_name).extension() {
        Some(ext) => Some(format!("{}.{}", id, ext.to_string_lossy())),
        None => Some(id.to_string()),
    }
}

/// 内容が異なる場合のみコピー（一時ファイル経由で置き換え）
fn copy_if_changed(source: &Path, destination: &Path) -> std::io::Result<bool> {
    if destination.is_file() && file_digest(source)? == file_digest(destination)? {
        return Ok(false);
    }

    let file_name = destination
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let partial = destination.with_file_name(format!(".{}.partial", file_name));

    if let Err(e) = std::fs::copy(source, &partial).and_then(|_| std::fs::rename(&partial, destination)) {
        std::fs::remove_file(&partial).ok();
        return Err(e);
    }

    Ok(true)
}

fn file_digest(path: &Path) -> std::io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    std::io::copy(&mut file, &mut hasher)?;
    Ok(hex::encode(hasher.finalize()))
}
