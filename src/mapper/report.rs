use super::{ImageDecision, MappingRun};
use pdf_image_mapper_common::Basis;

/// 割当できた画像のコンソール行（プレースホルダは None）
pub fn format_decision_line(item: &ImageDecision) -> Option<String> {
    let id = item.decision.resolution.identifier()?;
    match item.decision.basis {
        Basis::Positional => Some(format!("  ✓ {} -> {} (複数一致・位置推定)", item.file_name, id)),
        _ => Some(format!("  ✓ {} -> {}", item.file_name, id)),
    }
}

pub fn format_summary(run: &MappingRun) -> String {
    let rule = "=".repeat(60);
    let mut lines = vec![
        rule.clone(),
        format!("割当成功:               {}", run.stats.mapped),
        format!("複数一致（要確認）:     {}", run.stats.multiple_matches),
        format!("該当なし:               {}", run.stats.unmapped),
        format!("画像総数:               {}", run.total_images),
    ];
    if !run.skipped.is_empty() {
        lines.push(format!("対象外（命名規則外）:   {}", run.skipped.len()));
    }
    lines.push(rule);
    lines.join("\n")
}
