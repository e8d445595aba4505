//! Excel生成（共通ライブラリ）
//!
//! table.rs の列定義で選択中の作品を1シートに書き出す

use crate::table::{cell_number, cell_text, TABLE_COLUMNS};
use crate::types::Artwork;
use rust_xlsxwriter::*;

/// シート名の最大長（Excel仕様）
const MAX_SHEET_NAME_LEN: usize = 31;

/// Excelをバッファに生成
///
/// # Arguments
/// * `records` - 出力する作品（この順で1行ずつ）
/// * `sheet_title` - シート名（31文字に切り詰め、使えない文字は `_`）
pub fn generate_selection_excel(records: &[Artwork], sheet_title: &str) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    // フォーマット定義
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0x333333))
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    let value_format = Format::new()
        .set_align(FormatAlign::Top)
        .set_text_wrap()
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sanitize_sheet_name(sheet_title))
        .map_err(|e| format!("シート名設定エラー: {}", e))?;

    // ヘッダー行（A列: ID、以降: 表示列）
    worksheet.write_string_with_format(0, 0, "ID", &header_format)
        .map_err(|e| format!("ヘッダー書き込みエラー: {}", e))?;
    worksheet.set_column_width(0, 10)
        .map_err(|e| format!("列幅設定エラー: {}", e))?;

    for (i, column) in TABLE_COLUMNS.iter().enumerate() {
        let col = (i + 1) as u16;
        worksheet.write_string_with_format(0, col, column.label, &header_format)
            .map_err(|e| format!("ヘッダー書き込みエラー: {}", e))?;
        worksheet.set_column_width(col, column.width)
            .map_err(|e| format!("列幅設定エラー: {}", e))?;
    }
    worksheet.set_freeze_panes(1, 0)
        .map_err(|e| format!("ウィンドウ枠固定エラー: {}", e))?;

    for (r, artwork) in records.iter().enumerate() {
        let row = (r + 1) as u32;
        worksheet.write_number_with_format(row, 0, artwork.id as f64, &value_format)
            .map_err(|e| format!("値書き込みエラー: {}", e))?;

        for (i, column) in TABLE_COLUMNS.iter().enumerate() {
            let col = (i + 1) as u16;
            match cell_number(artwork, column.key) {
                Some(number) => {
                    worksheet.write_number_with_format(row, col, number, &value_format)
                        .map_err(|e| format!("値書き込みエラー: {}", e))?;
                }
                None => {
                    worksheet.write_string_with_format(row, col, cell_text(artwork, column.key), &value_format)
                        .map_err(|e| format!("値書き込みエラー: {}", e))?;
                }
            }
        }
    }

    // バッファに書き出し
    workbook.save_to_buffer()
        .map_err(|e| format!("Excel保存エラー: {}", e))
}

fn sanitize_sheet_name(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .map(|c| if matches!(c, '[' | ']' | ':' | '*' | '?' | '/' | '\\') { '_' } else { c })
        .take(MAX_SHEET_NAME_LEN)
        .collect();
    let cleaned = cleaned.trim().trim_matches('\'').to_string();
    if cleaned.is_empty() {
        "Selection".to_string()
    } else {
        cleaned
    }
}
