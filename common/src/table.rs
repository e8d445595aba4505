//! 表の列定義
//!
//! Web版の表・CLIの一覧表示・Excel出力で同じ列を使う

use crate::types::Artwork;

// ============================================
// 列定義
// ============================================

/// 表の1列
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableColumn {
    /// APIのフィールド名
    pub key: &'static str,
    pub label: &'static str,
    /// Excel列幅（文字数）
    pub width: f64,
}

pub const TABLE_COLUMNS: [TableColumn; 6] = [
    TableColumn { key: "title", label: "Title", width: 40.0 },
    TableColumn { key: "place_of_origin", label: "Place of origin", width: 18.0 },
    TableColumn { key: "artist_display", label: "Artist display", width: 40.0 },
    TableColumn { key: "inscriptions", label: "Inscriptions", width: 30.0 },
    TableColumn { key: "date_start", label: "Date Start", width: 11.0 },
    TableColumn { key: "date_end", label: "Date End", width: 11.0 },
];

// ============================================
// 値の取得
// ============================================

/// セル表示用の文字列
pub fn cell_text(artwork: &Artwork, key: &str) -> String {
    match key {
        "id" => artwork.id.to_string(),
        "title" => artwork.title.clone(),
        "place_of_origin" => artwork.place_of_origin.clone(),
        "artist_display" => artwork.artist_display.clone(),
        "inscriptions" => artwork.inscriptions.clone().unwrap_or_default(),
        "date_start" => artwork.date_start.to_string(),
        "date_end" => artwork.date_end.to_string(),
        _ => String::new(),
    }
}

/// 数値列なら値を返す（Excelで数値セルにする）
pub fn cell_number(artwork: &Artwork, key: &str) -> Option<f64> {
    match key {
        "date_start" => Some(artwork.date_start as f64),
        "date_end" => Some(artwork.date_end as f64),
        _ => None,
    }
}
