//! カタログレコードの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Artwork: 作品1件（APIの `data[]` 要素）
//! - Page: 1ページ分の作品（1始まりのページ番号付き）

use serde::{Deserialize, Deserializer, Serialize};

/// 1ページあたりの件数（固定）
pub const PAGE_SIZE: usize = 12;

/// 一括選択の上限件数
pub const MAX_BULK_SELECT: usize = 30;

/// 作品レコード
///
/// `id` が唯一の重複判定キー。APIが `null` を返すフィールドは既定値に寄せる。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: u64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub place_of_origin: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub artist_display: String,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub inscriptions: Option<String>,

    /// 制作開始年（負数は紀元前）
    #[serde(default, deserialize_with = "null_as_default")]
    pub date_start: i32,

    #[serde(default, deserialize_with = "null_as_default")]
    pub date_end: i32,
}

/// 1ページ分のレコード
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// 1始まりのページ番号
    pub index: u32,
    pub records: Vec<Artwork>,
    /// API報告の総ページ数
    #[serde(default)]
    pub total_pages: Option<u32>,
}

impl Page {
    pub fn new(index: u32, records: Vec<Artwork>) -> Self {
        Self { index, records, total_pages: None }
    }

    pub fn with_total_pages(mut self, total_pages: u32) -> Self {
        self.total_pages = Some(total_pages);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}
