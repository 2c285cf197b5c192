use crate::error::{MapperError, Result};
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// 先頭シートのヘッダー行から `id` 列を探し、空でないセルを上から順に返す
pub fn read_id_column(path: &Path) -> Result<Vec<String>> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| MapperError::InvalidCatalog(format!("Excelを開けません: {}", e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| MapperError::InvalidCatalog("シートがありません".into()))?
        .map_err(|e| MapperError::InvalidCatalog(format!("シート読み込みエラー: {}", e)))?;

    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| MapperError::InvalidCatalog("ヘッダー行がありません".into()))?;

    let column = header
        .iter()
        .position(|cell| cell_text(cell).eq_ignore_ascii_case("id"))
        .ok_or_else(|| MapperError::InvalidCatalog("id 列がありません".into()))?;

    let ids = rows
        .filter_map(|row| row.get(column))
        .map(cell_text)
        .filter(|id| !id.is_empty())
        .collect();

    Ok(ids)
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string().trim().to_string(),
    }
}
