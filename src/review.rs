//! 対話式マッピング修正モジュール
//!
//! 未割当・要確認（`PRODUCT_ID_*` / `UNKNOWN_PAGE_*` / `MULTI_*`）のエントリに製品IDを入力する。

use crate::error::{MapperError, Result};
use crate::mapper::{load_mapping, save_mapping};
use dialoguer::Input;
use pdf_image_mapper_common::{MappingDocument, Resolution};
use std::collections::HashSet;
use std::path::Path;
use tracing::warn;

/// 修正が必要なエントリのファイル名（マッピング順）
pub fn extract_placeholder_entries(document: &MappingDocument) -> Vec<String> {
    document
        .entries()
        .filter(|(_, r)| r.is_placeholder())
        .map(|(f, _)| f.clone())
        .collect()
}

/// プレースホルダから推測できる候補（複数一致の先頭ID）
pub fn suggestion_for(resolution: &Resolution) -> Option<&str> {
    match resolution {
        Resolution::MultiMatch { first, .. } => Some(first),
        _ => None,
    }
}

/// 対話アクション
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewAction {
    /// 製品IDを入力
    Input(String),
    /// この画像をスキップ
    Skip,
    /// 残り全部スキップ
    SkipAll,
    /// 保存して終了
    Quit,
}

/// 入力文字列をアクションに変換
pub fn parse_action(input: &str, suggestion: Option<&str>) -> ReviewAction {
    match input.trim() {
        "" | "s" => ReviewAction::Skip,
        "S" => ReviewAction::SkipAll,
        "q" | "Q" => ReviewAction::Quit,
        "f" => match suggestion {
            Some(id) => ReviewAction::Input(id.to_string()),
            None => ReviewAction::Skip,
        },
        other => ReviewAction::Input(other.to_string()),
    }
}

/// 対話式で製品IDを入力
///
/// `known_ids` があれば、カタログにない入力に警告を出す（入力自体は受け付ける）。
pub fn run_interactive_review(
    mapping_path: &Path,
    output_path: Option<&Path>,
    known_ids: Option<&[String]>,
) -> Result<()> {
    let mut document = load_mapping(mapping_path)?;
    let targets = extract_placeholder_entries(&document);

    if targets.is_empty() {
        println!("✓ すべての画像に製品IDが設定されています");
        return Ok(());
    }

    println!("🔎 要確認の画像: {}枚", targets.len());
    println!("---");
    println!("操作: 製品IDを入力 [s]スキップ [S]残り全スキップ [f]候補を採用 [q]終了");
    println!("---\n");

    let known: Option<HashSet<String>> =
        known_ids.map(|ids| ids.iter().map(|id| id.to_uppercase()).collect());
    let mut updated = 0usize;

    for (count, file_name) in targets.iter().enumerate() {
        let Some(current) = document.get(file_name) else {
            continue;
        };
        println!(
            "[{}/{}] {} ({})",
            count + 1,
            targets.len(),
            file_name,
            current
        );

        let suggestion = suggestion_for(current).map(str::to_string);
        let action = prompt_review_action(suggestion.as_deref())?;

        match action {
            ReviewAction::Input(id) => {
                if let Some(known) = &known {
                    if !known.contains(&id.to_uppercase()) {
                        warn!("カタログにない製品ID: {}", id);
                    }
                }
                println!("  → {}\n", id);
                document.insert(file_name.clone(), Resolution::parse(&id));
                updated += 1;
            }
            ReviewAction::Skip => println!("  → スキップ\n"),
            ReviewAction::SkipAll => {
                println!("  → 残り全部スキップ\n");
                break;
            }
            ReviewAction::Quit => {
                println!("保存して終了します...");
                break;
            }
        }
    }

    let output = output_path.unwrap_or(mapping_path);
    save_mapping(&document, output)?;

    println!("\n✓ {}件を更新して保存しました: {}", updated, output.display());
    println!("  残りの要確認: {}件", document.pending_count());

    Ok(())
}

fn prompt_review_action(suggestion: Option<&str>) -> Result<ReviewAction> {
    if let Some(id) = suggestion {
        println!("  候補: {}", id);
    }

    let input: String = Input::new()
        .with_prompt("製品ID (s:スキップ S:全スキップ f:候補 q:終了)")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| MapperError::Prompt(e.to_string()))?;

    Ok(parse_action(&input, suggestion))
}
