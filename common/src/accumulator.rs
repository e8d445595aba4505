//! ページをまたぐ一括選択
//!
//! 一度にメモリにあるのは表示中の1ページだけ。その状態で「全体の先頭N件を選択」を
//! 受け付け、次ページが読み込まれた時点で残り件数を追加選択する。
//!
//! - `request_bulk_select` / `on_page_advance`: 状態を持たない遷移関数
//! - `SelectionState`: 選択・保留件数・ページ要求を1つにまとめた状態。
//!   古いフェッチ結果の破棄もここで行う

use crate::error::{Error, InvalidRequest, Result};
use crate::selection::SelectionSet;
use crate::types::{Artwork, Page, MAX_BULK_SELECT, PAGE_SIZE};
use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;
use tracing::{debug, warn};

/// 次ページで追加選択する残り件数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PendingCount {
    /// 保留なし
    #[default]
    Resolved,
    /// 残り件数（常に1以上）
    Remaining(usize),
}

impl PendingCount {
    /// 0以下は `Resolved`
    pub fn from_signed(count: i64) -> Self {
        if count > 0 {
            PendingCount::Remaining(count as usize)
        } else {
            PendingCount::Resolved
        }
    }

    pub fn remaining(&self) -> usize {
        match self {
            PendingCount::Resolved => 0,
            PendingCount::Remaining(n) => *n,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.remaining() > 0
    }
}

/// 検証済みの一括選択件数（1..=30）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkSelectCount(usize);

impl BulkSelectCount {
    pub fn new(count: u64) -> std::result::Result<Self, InvalidRequest> {
        if count == 0 {
            return Err(InvalidRequest::MissingValue);
        }
        if count > MAX_BULK_SELECT as u64 {
            return Err(InvalidRequest::ExceedsMaximum {
                requested: count,
                max: MAX_BULK_SELECT,
            });
        }
        Ok(Self(count as usize))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl FromStr for BulkSelectCount {
    type Err = InvalidRequest;

    /// 空・数値以外・0以下は `MissingValue`、正の桁あふれは `ExceedsMaximum`
    fn from_str(input: &str) -> std::result::Result<Self, Self::Err> {
        let value: i64 = input.trim().parse().map_err(|e: ParseIntError| match e.kind() {
            IntErrorKind::PosOverflow => InvalidRequest::ExceedsMaximum {
                requested: u64::MAX,
                max: MAX_BULK_SELECT,
            },
            _ => InvalidRequest::MissingValue,
        })?;
        if value <= 0 {
            return Err(InvalidRequest::MissingValue);
        }
        Self::new(value as u64)
    }
}

/// 先頭N件の一括選択（純関数）
///
/// - N ≤ ページ件数: ページ先頭N件を選択集合の先頭に追加。保留なし
/// - N > ページ件数: 選択集合をページ全件で置き換え、保留 = N − ページ件数
///
/// # Errors
/// * `InvalidRequest` - Nが0または上限超過
/// * `PageNotLoaded` - 表示中のページが空
pub fn request_bulk_select(
    count: u64,
    page_records: &[Artwork],
    selection: &SelectionSet,
) -> Result<(SelectionSet, PendingCount)> {
    let count = BulkSelectCount::new(count)?.get();
    if page_records.is_empty() {
        return Err(Error::PageNotLoaded);
    }

    if count > PAGE_SIZE {
        let replaced = SelectionSet::from_records(page_records.iter().cloned());
        let pending = PendingCount::from_signed(count as i64 - PAGE_SIZE as i64);
        return Ok((replaced, pending));
    }

    let mut updated = selection.clone();
    updated.prepend(page_records.iter().take(count).cloned());
    Ok((updated, PendingCount::Resolved))
}

/// 次ページ読み込み時の追加選択（純関数）
///
/// `page_delta` が +1 で保留があるときだけ、新ページの先頭
/// min(保留, 件数) 件を末尾に追加して保留を解消する。それ以外は入力をそのまま返す。
pub fn on_page_advance(
    new_page_records: &[Artwork],
    selection: &SelectionSet,
    pending: PendingCount,
    page_delta: i64,
) -> (SelectionSet, PendingCount) {
    if page_delta != 1 || !pending.is_pending() {
        return (selection.clone(), pending);
    }

    let take = pending.remaining().min(new_page_records.len());
    let mut updated = selection.clone();
    updated.merge(new_page_records.iter().take(take).cloned());
    (updated, PendingCount::Resolved)
}

/// ページ要求の識別子。最後に発行したものだけが有効
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub page: u32,
    seq: u64,
}

/// 一括選択の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkSelectSummary {
    /// 選択集合の件数
    pub selected: usize,
    pub pending: PendingCount,
}

/// ページ読み込み完了の扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// 表示ページとして採用。`auto_selected` は保留分として追加された件数
    Displayed { page: u32, auto_selected: usize },
    /// 既に別ページへ移動済みのため破棄
    Discarded { page: u32 },
}

/// セッション全体の選択状態
///
/// 初期値: 選択なし・保留なし・ページ0（未要求）
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    selection: SelectionSet,
    pending: PendingCount,
    /// 保留を発生させた一括選択を受け付けたページ
    pending_origin: Option<u32>,
    current: Option<Page>,
    requested_page: u32,
    /// 直近の移動元ページ
    navigated_from: Option<u32>,
    fetch_seq: u64,
    loading: bool,
    load_error: Option<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn pending(&self) -> PendingCount {
        self.pending
    }

    pub fn pending_origin(&self) -> Option<u32> {
        self.pending_origin
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.current.as_ref()
    }

    /// 表示中の行（未読み込みなら空）
    pub fn records(&self) -> &[Artwork] {
        self.current.as_ref().map(|p| p.records.as_slice()).unwrap_or(&[])
    }

    pub fn displayed_page(&self) -> Option<u32> {
        self.current.as_ref().map(|p| p.index)
    }

    /// 最後に要求したページ（0 = 未要求）
    pub fn requested_page(&self) -> u32 {
        self.requested_page
    }

    pub fn total_pages(&self) -> Option<u32> {
        self.current.as_ref().and_then(|p| p.total_pages)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn is_selected(&self, id: u64) -> bool {
        self.selection.contains(id)
    }

    /// 表示中の行がすべて選択済みか
    pub fn all_visible_selected(&self) -> bool {
        self.selection.contains_all(self.records())
    }

    /// 一括選択を受け付けられる状態か
    pub fn can_bulk_select(&self) -> bool {
        !self.loading && !self.records().is_empty()
    }

    /// ページ移動を開始（1始まり、0は1に丸める）
    pub fn navigate(&mut self, page: u32) -> FetchTicket {
        let page = page.max(1);
        self.navigated_from = self.displayed_page();
        self.requested_page = page;
        self.issue_ticket()
    }

    /// 最後に要求したページを再取得。未要求ならNone
    pub fn retry(&mut self) -> Option<FetchTicket> {
        if self.requested_page == 0 {
            return None;
        }
        Some(self.issue_ticket())
    }

    fn issue_ticket(&mut self) -> FetchTicket {
        self.fetch_seq += 1;
        self.loading = true;
        self.load_error = None;
        debug!(page = self.requested_page, seq = self.fetch_seq, "page fetch issued");
        FetchTicket {
            page: self.requested_page,
            seq: self.fetch_seq,
        }
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.seq == self.fetch_seq && ticket.page == self.requested_page
    }

    /// ページ読み込み完了
    ///
    /// 古いチケットの結果は破棄する（表示・選択・保留すべて変更しない）。
    pub fn complete_fetch(&mut self, ticket: FetchTicket, mut page: Page) -> LoadOutcome {
        if !self.is_current(ticket) {
            debug!(page = ticket.page, current = self.requested_page, "stale page fetch discarded");
            return LoadOutcome::Discarded { page: ticket.page };
        }

        page.index = ticket.page;
        self.loading = false;
        self.load_error = None;

        let mut auto_selected = 0;
        if let Some(delta) = self.advance_delta(page.index) {
            let before = self.selection.len();
            let (selection, pending) =
                on_page_advance(&page.records, &self.selection, self.pending, delta);
            auto_selected = selection.len() - before;
            self.selection = selection;
            self.pending = pending;
            if !self.pending.is_pending() {
                self.pending_origin = None;
                debug!(page = page.index, auto_selected, "pending bulk selection applied");
            }
        }

        let index = page.index;
        self.current = Some(page);
        LoadOutcome::Displayed { page: index, auto_selected }
    }

    /// 保留のある移動元から直接来た場合だけ差分を返す
    fn advance_delta(&self, loaded: u32) -> Option<i64> {
        let origin = self.pending_origin?;
        if !self.pending.is_pending() || self.navigated_from != Some(origin) {
            return None;
        }
        Some(loaded as i64 - origin as i64)
    }

    /// ページ読み込み失敗。表示中のページはそのまま残す
    ///
    /// # Returns
    /// 現在の要求に対する失敗として記録した場合true（古いチケットはfalse）
    pub fn fail_fetch(&mut self, ticket: FetchTicket, error: &Error) -> bool {
        if !self.is_current(ticket) {
            debug!(page = ticket.page, "stale page failure ignored");
            return false;
        }
        warn!(page = ticket.page, %error, "page fetch failed");
        self.loading = false;
        self.load_error = Some(error.to_string());
        true
    }

    /// 先頭N件の一括選択
    ///
    /// 失敗時は状態を変更しない。
    pub fn request_bulk_select(&mut self, count: u64) -> Result<BulkSelectSummary> {
        BulkSelectCount::new(count)?;
        if self.loading {
            return Err(Error::PageNotLoaded);
        }

        let (selection, pending) = request_bulk_select(count, self.records(), &self.selection)?;
        self.selection = selection;
        self.pending = pending;
        self.pending_origin = if pending.is_pending() { self.displayed_page() } else { None };

        debug!(count, selected = self.selection.len(), pending = pending.remaining(), "bulk selection accepted");
        Ok(BulkSelectSummary {
            selected: self.selection.len(),
            pending,
        })
    }

    /// 入力文字列からの一括選択
    pub fn request_bulk_select_input(&mut self, input: &str) -> Result<BulkSelectSummary> {
        let count: BulkSelectCount = input.parse()?;
        self.request_bulk_select(count.get() as u64)
    }

    /// 1行の選択切り替え
    pub fn toggle(&mut self, artwork: &Artwork) -> bool {
        self.selection.toggle(artwork)
    }

    /// 表示中ページの全選択
    pub fn select_visible(&mut self) -> usize {
        let records = self.records().to_vec();
        self.selection.merge(records)
    }

    /// 表示中ページの全解除
    pub fn deselect_visible(&mut self) -> usize {
        let records = self.records().to_vec();
        self.selection.remove_all(&records)
    }

    /// 表ウィジェットからの選択値で置き換え
    pub fn replace_selection(&mut self, records: Vec<Artwork>) {
        self.selection = SelectionSet::from_records(records);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }
}
