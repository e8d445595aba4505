//! ページ送りの計算
//!
//! ページ番号は1始まり。ページリンクは現在ページを中心に最大5件。

use crate::types::PAGE_SIZE;

/// ページリンクの表示数
pub const PAGE_LINK_WINDOW: u32 = 5;

/// APIでページングできる最大件数（offset + limit がこれを超えるとエラー）
pub const MAX_REACHABLE_RECORDS: u64 = 10_000;

/// API報告の総件数から到達可能な総ページ数を求める
pub fn reachable_total_pages(total_records: u64) -> u32 {
    let page_size = PAGE_SIZE as u64;
    // 上限をまたぐページは取得できない
    total_records
        .div_ceil(page_size)
        .min(MAX_REACHABLE_RECORDS / page_size) as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    current: u32,
    total_pages: u32,
}

impl Pager {
    /// 範囲外の値は丸める（総ページ数は最低1）
    pub fn new(current: u32, total_pages: u32) -> Self {
        let total_pages = total_pages.max(1);
        Self {
            current: current.clamp(1, total_pages),
            total_pages,
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// 現在ページ先頭行の0始まりオフセット
    pub fn first_offset(&self) -> u64 {
        (self.current as u64 - 1) * PAGE_SIZE as u64
    }

    pub fn prev(&self) -> Option<u32> {
        (self.current > 1).then(|| self.current - 1)
    }

    pub fn next(&self) -> Option<u32> {
        (self.current < self.total_pages).then(|| self.current + 1)
    }

    pub fn last(&self) -> u32 {
        self.total_pages
    }

    /// 範囲内ならそのページ
    pub fn jump(&self, page: u32) -> Option<u32> {
        (1..=self.total_pages).contains(&page).then_some(page)
    }

    pub fn page_links(&self) -> Vec<u32> {
        let half = PAGE_LINK_WINDOW / 2;
        let end = (self.current.saturating_sub(half).max(1) + PAGE_LINK_WINDOW - 1).min(self.total_pages);
        let start = end.saturating_sub(PAGE_LINK_WINDOW - 1).max(1);
        (start..=end).collect()
    }
}
