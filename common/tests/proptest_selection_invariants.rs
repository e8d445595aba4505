//! 選択集合のプロパティテスト
//!
//! 1. **一意性** - 一括選択・行の切り替え・ページ移動をどう組み合わせても、
//!    選択集合に同じ `id` が2件入らない
//! 2. **先着優先** - 既にある `id` を合成しても、元の要素の位置と内容が残る
//! 3. **保留の範囲** - 保留件数は常に 0..=30−12

use artwork_select_common::{
    Artwork, Page, PendingCount, SelectionSet, SelectionState, MAX_BULK_SELECT, PAGE_SIZE,
};
use proptest::prelude::*;
use std::collections::HashSet;

// 隣り合うページで半分ずつ `id` が重なる
fn page_records(index: u32) -> Vec<Artwork> {
    let first = (index as u64 - 1) * 6 + 1;
    (first..first + PAGE_SIZE as u64)
        .map(|id| Artwork { id, title: format!("page {} / {}", index, id), ..Default::default() })
        .collect()
}

#[derive(Debug, Clone)]
enum Op {
    Navigate(u32),
    /// 応答前に次の移動で追い越される
    Superseded(u32, u32),
    Bulk(u64),
    Toggle(usize),
    SelectPage,
    DeselectPage,
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1u32..8).prop_map(Op::Navigate),
        (1u32..8, 1u32..8).prop_map(|(a, b)| Op::Superseded(a, b)),
        (0u64..40).prop_map(Op::Bulk),
        (0usize..PAGE_SIZE).prop_map(Op::Toggle),
        Just(Op::SelectPage),
        Just(Op::DeselectPage),
        Just(Op::Clear),
    ]
}

fn apply(state: &mut SelectionState, op: &Op) {
    match *op {
        Op::Navigate(page) => {
            let ticket = state.navigate(page);
            state.complete_fetch(ticket, Page::new(page, page_records(page)));
        }
        Op::Superseded(stale, fresh) => {
            let stale_ticket = state.navigate(stale);
            let fresh_ticket = state.navigate(fresh);
            state.complete_fetch(stale_ticket, Page::new(stale, page_records(stale)));
            state.complete_fetch(fresh_ticket, Page::new(fresh, page_records(fresh)));
        }
        Op::Bulk(count) => {
            let _ = state.request_bulk_select(count);
        }
        Op::Toggle(row) => {
            if let Some(artwork) = state.records().get(row).cloned() {
                state.toggle(&artwork);
            }
        }
        Op::SelectPage => {
            state.select_visible();
        }
        Op::DeselectPage => {
            state.deselect_visible();
        }
        Op::Clear => state.clear_selection(),
    }
}

fn artwork_vec() -> impl Strategy<Value = Vec<Artwork>> {
    prop::collection::vec((0u64..30, "[a-z]{1,8}"), 0..20).prop_map(|items| {
        items
            .into_iter()
            .map(|(id, title)| Artwork { id, title, ..Default::default() })
            .collect()
    })
}

proptest! {
    #[test]
    fn selection_ids_stay_unique(ops in prop::collection::vec(op_strategy(), 1..60)) {
        let mut state = SelectionState::new();
        for op in &ops {
            apply(&mut state, op);

            let ids: Vec<u64> = state.selection().iter().map(|a| a.id).collect();
            let unique: HashSet<u64> = ids.iter().copied().collect();
            prop_assert_eq!(ids.len(), unique.len(), "duplicate id after {:?}", op);
            prop_assert_eq!(state.selection().len(), ids.len());
        }
    }

    #[test]
    fn pending_stays_in_range(ops in prop::collection::vec(op_strategy(), 1..60)) {
        let mut state = SelectionState::new();
        for op in &ops {
            apply(&mut state, op);
            match state.pending() {
                PendingCount::Resolved => {}
                PendingCount::Remaining(n) => {
                    prop_assert!(n >= 1 && n <= MAX_BULK_SELECT - PAGE_SIZE);
                    prop_assert!(state.pending_origin().is_some());
                }
            }
        }
    }

    #[test]
    fn merge_keeps_first_seen(existing in artwork_vec(), incoming in artwork_vec()) {
        let base = SelectionSet::from_records(existing);
        let before: Vec<Artwork> = base.records().to_vec();

        let mut merged = base.clone();
        merged.merge(incoming.clone());
        prop_assert_eq!(&merged.records()[..before.len()], &before[..]);

        let mut prepended = base.clone();
        let added = prepended.prepend(incoming);
        prop_assert_eq!(&prepended.records()[added..], &before[..]);
    }
}
