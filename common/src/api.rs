//! カタログAPIのURL生成とレスポンス解析
//!
//! `GET {base}?page={i}&limit=12&fields=...` が返す
//! `{ "pagination": {...}, "data": [...] }` を `Page` に変換する。
//! 通信自体はCLI(reqwest)とWeb(fetch)それぞれが行う。

use crate::error::{Error, Result};
use crate::pager::reachable_total_pages;
use crate::types::{Artwork, Page, PAGE_SIZE};
use serde::Deserialize;

pub const ARTIC_API_URL: &str = "https://api.artic.edu/api/v1/artworks";

/// 取得するフィールド（表示列 + id）
pub const ARTWORK_FIELDS: [&str; 7] = [
    "id",
    "title",
    "place_of_origin",
    "artist_display",
    "inscriptions",
    "date_start",
    "date_end",
];

/// APIのページング情報
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub total: u64,
    pub limit: u32,
    pub offset: u64,
    pub total_pages: u32,
    pub current_page: u32,
}

/// レスポンス全体
#[derive(Debug, Clone, Deserialize)]
pub struct PageEnvelope {
    #[serde(default)]
    pub pagination: Option<Pagination>,
    pub data: Vec<Artwork>,
}

impl PageEnvelope {
    /// 要求したページ番号で `Page` に変換
    pub fn into_page(self, page: u32) -> Page {
        let mut result = Page::new(page, self.data);
        if let Some(pagination) = self.pagination {
            result = result.with_total_pages(reachable_total_pages(pagination.total));
        }
        result
    }
}

/// エラーレスポンス（`{"status": 403, "error": "...", "detail": "..."}`）
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    detail: Option<String>,
}

/// ページURLを生成（1始まり）
pub fn page_url(base: &str, page: u32) -> String {
    format!(
        "{}?page={}&limit={}&fields={}",
        base.trim_end_matches('/'),
        page.max(1),
        PAGE_SIZE,
        ARTWORK_FIELDS.join(",")
    )
}

/// 成功レスポンス本文を解析
pub fn parse_page_response(page: u32, body: &str) -> Result<Page> {
    let envelope: PageEnvelope = serde_json::from_str(body)?;
    Ok(envelope.into_page(page))
}

/// 非成功ステータスを `SourceUnavailable` に変換
///
/// 本文がAPIのエラー形式なら `detail`（なければ `error`）を含める。
pub fn source_error(status: u16, body: &str) -> Error {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail.or(b.error))
        .filter(|m| !m.trim().is_empty());

    match message {
        Some(message) => Error::SourceUnavailable(format!("HTTP {}: {}", status, message)),
        None => Error::SourceUnavailable(format!("HTTP {}", status)),
    }
}
