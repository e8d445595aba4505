//! 選択結果のJSON出力

use crate::error::Result;
use artwork_select_common::Artwork;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionExport {
    /// 出力日時（RFC 3339）
    pub exported_at: String,
    pub count: usize,
    pub records: Vec<Artwork>,
}

impl SelectionExport {
    pub fn new(records: &[Artwork]) -> Self {
        Self {
            exported_at: Local::now().to_rfc3339(),
            count: records.len(),
            records: records.to_vec(),
        }
    }
}

pub fn write_selection_json(records: &[Artwork], output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(&SelectionExport::new(records))?;
    std::fs::write(output_path, json)?;
    Ok(())
}
