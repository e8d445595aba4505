pub mod excel;
pub mod json;

use crate::cli::ExportFormat;
use crate::error::Result;
use artwork_select_common::Artwork;
use std::path::{Path, PathBuf};

fn output_path_for_format(output: &Path, title: &str, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", title, extension))
    } else {
        output.to_path_buf()
    }
}

fn output_paths_for_both(output: &Path, title: &str) -> (PathBuf, PathBuf) {
    if output.is_dir() || output.extension().is_none() {
        (
            output.join(format!("{}.json", title)),
            output.join(format!("{}.xlsx", title)),
        )
    } else {
        let parent = output.parent().unwrap_or_else(|| Path::new("."));
        let stem = output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(title);
        (
            parent.join(format!("{}.json", stem)),
            parent.join(format!("{}.xlsx", stem)),
        )
    }
}

/// 選択結果を書き出す
///
/// # Returns
/// 書き出したファイルのパス
pub fn export_selection(
    records: &[Artwork],
    format: ExportFormat,
    output: &Path,
    title: &str,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    match format {
        ExportFormat::Json => {
            let path = output_path_for_format(output, title, "json");
            json::write_selection_json(records, &path)?;
            println!("✔ JSON出力: {}", path.display());
            written.push(path);
        }
        ExportFormat::Excel => {
            let path = output_path_for_format(output, title, "xlsx");
            println!("- Excelを生成中...");
            excel::write_selection_excel(records, &path, title)?;
            println!("✔ Excel出力: {}", path.display());
            written.push(path);
        }
        ExportFormat::Both => {
            let (json_path, excel_path) = output_paths_for_both(output, title);

            json::write_selection_json(records, &json_path)?;
            println!("✔ JSON出力: {}", json_path.display());

            println!("- Excelを生成中...");
            excel::write_selection_excel(records, &excel_path, title)?;
            println!("✔ Excel出力: {}", excel_path.display());

            written.push(json_path);
            written.push(excel_path);
        }
    }

    Ok(written)
}
