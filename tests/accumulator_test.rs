//! ページ横断の一括選択の統合テスト
//!
//! 純粋関数とセッション状態の両方で、件数制限・保留の適用・古い応答の破棄を検証

use artwork_select_common::{
    on_page_advance, request_bulk_select, Artwork, Error, InvalidRequest, LoadOutcome, Page,
    PendingCount, SelectionSet, SelectionState,
};

fn artwork(id: u64) -> Artwork {
    Artwork {
        id,
        title: format!("Artwork {}", id),
        place_of_origin: "France".to_string(),
        artist_display: "Unknown".to_string(),
        inscriptions: None,
        date_start: 1900,
        date_end: 1901,
    }
}

/// ページ番号に対応する12件（1ページ目は id 1..=12）
fn page_records(index: u32) -> Vec<Artwork> {
    let first = (index as u64 - 1) * 12 + 1;
    (first..first + 12).map(artwork).collect()
}

fn ids(selection: &SelectionSet) -> Vec<u64> {
    selection.iter().map(|a| a.id).collect()
}

fn load(state: &mut SelectionState, index: u32) -> LoadOutcome {
    let ticket = state.navigate(index);
    state.complete_fetch(ticket, Page::new(index, page_records(index)).with_total_pages(833))
}

/// 0件と31件はどちらも拒否され、状態は変わらない
#[test]
fn test_bounds_rejected_without_mutation() {
    let page = page_records(1);
    let selection = SelectionSet::from_records(page[..2].to_vec());

    let err = request_bulk_select(0, &page, &selection).unwrap_err();
    assert!(matches!(err, Error::InvalidRequest(InvalidRequest::MissingValue)));

    let err = request_bulk_select(31, &page, &selection).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidRequest(InvalidRequest::ExceedsMaximum { requested: 31, max: 30 })
    ));

    let mut state = SelectionState::new();
    load(&mut state, 1);
    state.toggle(&page[3]);
    for count in [0, 31, 1000] {
        assert!(state.request_bulk_select(count).is_err());
        assert_eq!(ids(state.selection()), vec![4]);
        assert_eq!(state.pending(), PendingCount::Resolved);
    }
}

/// 5件はページ内で完結する
#[test]
fn test_within_page_selection() {
    let page = page_records(1);
    let (selection, pending) = request_bulk_select(5, &page, &SelectionSet::new()).unwrap();
    assert_eq!(ids(&selection), vec![1, 2, 3, 4, 5]);
    assert_eq!(pending, PendingCount::Resolved);
}

/// 20件は12件＋次ページ先頭8件
#[test]
fn test_cross_page_accumulation() {
    let (selection, pending) =
        request_bulk_select(20, &page_records(1), &SelectionSet::new()).unwrap();
    assert_eq!(selection.len(), 12);
    assert_eq!(pending, PendingCount::Remaining(8));

    let (selection, pending) = on_page_advance(&page_records(2), &selection, pending, 1);
    assert_eq!(selection.len(), 20);
    assert_eq!(ids(&selection), (1..=20).collect::<Vec<_>>());
    assert_eq!(pending, PendingCount::Resolved);
}

/// 2ページ飛ばし・戻りでは保留を適用しない
#[test]
fn test_non_sequential_navigation_guard() {
    let (selection, pending) =
        request_bulk_select(20, &page_records(1), &SelectionSet::new()).unwrap();

    for delta in [2, -1, 0] {
        let (after, after_pending) = on_page_advance(&page_records(3), &selection, pending, delta);
        assert_eq!(after, selection);
        assert_eq!(after_pending, PendingCount::Remaining(8));
    }
}

/// 解決済みの保留で再度呼んでも変化しない
#[test]
fn test_idempotent_resolution() {
    let (selection, pending) =
        request_bulk_select(14, &page_records(1), &SelectionSet::new()).unwrap();
    let (selection, pending) = on_page_advance(&page_records(2), &selection, pending, 1);
    assert_eq!(selection.len(), 14);

    let (again, again_pending) = on_page_advance(&page_records(3), &selection, pending, 1);
    assert_eq!(again, selection);
    assert_eq!(again_pending, PendingCount::Resolved);
}

/// 追い越されたページの応答は選択にも保留にも影響しない
#[test]
fn test_stale_fetch_discarded() {
    let mut state = SelectionState::new();
    load(&mut state, 1);
    state.request_bulk_select(20).unwrap();

    let stale = state.navigate(2);
    let fresh = state.navigate(3);

    let outcome = state.complete_fetch(stale, Page::new(2, page_records(2)));
    assert_eq!(outcome, LoadOutcome::Discarded { page: 2 });
    assert_eq!(state.selection().len(), 12);
    assert_eq!(state.pending(), PendingCount::Remaining(8));
    assert_eq!(state.displayed_page(), Some(1));

    let outcome = state.complete_fetch(fresh, Page::new(3, page_records(3)));
    assert_eq!(outcome, LoadOutcome::Displayed { page: 3, auto_selected: 0 });
    assert_eq!(state.selection().len(), 12);
}

/// 次ページ移動で保留分が自動選択され、以降のページには及ばない
#[test]
fn test_session_flow_applies_pending_once() {
    let mut state = SelectionState::new();
    load(&mut state, 1);

    let summary = state.request_bulk_select(30).unwrap();
    assert_eq!(summary.selected, 12);
    assert_eq!(summary.pending, PendingCount::Remaining(18));

    let outcome = load(&mut state, 2);
    assert_eq!(outcome, LoadOutcome::Displayed { page: 2, auto_selected: 12 });
    assert_eq!(state.selection().len(), 24);
    assert_eq!(state.pending(), PendingCount::Resolved);

    let outcome = load(&mut state, 3);
    assert_eq!(outcome, LoadOutcome::Displayed { page: 3, auto_selected: 0 });
    assert_eq!(state.selection().len(), 24);
}

/// ページ内の一括選択は既存の選択を残して先頭に追加する
#[test]
fn test_within_page_keeps_existing_selection() {
    let mut state = SelectionState::new();
    load(&mut state, 2);
    let page2 = page_records(2);
    state.toggle(&page2[10]);
    state.toggle(&page2[1]);

    state.request_bulk_select(3).unwrap();
    assert_eq!(ids(state.selection()), vec![13, 15, 23, 14]);
}

/// 読み込み中の一括選択は拒否される
#[test]
fn test_bulk_select_rejected_while_loading() {
    let mut state = SelectionState::new();
    load(&mut state, 1);
    let _ticket = state.navigate(2);

    let err = state.request_bulk_select(5).unwrap_err();
    assert!(matches!(err, Error::PageNotLoaded));
    assert!(state.selection().is_empty());
}
