//! Excel生成（CLI版）
//!
//! ブック生成は共通ライブラリ、ファイル書き込みのみここで行う

use crate::error::{AppError, Result};
use artwork_select_common::export::excel_core::generate_selection_excel;
use artwork_select_common::Artwork;
use std::path::Path;

pub fn write_selection_excel(records: &[Artwork], output_path: &Path, title: &str) -> Result<()> {
    let buffer = generate_selection_excel(records, title).map_err(AppError::ExcelGeneration)?;
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_path, buffer)?;
    Ok(())
}
