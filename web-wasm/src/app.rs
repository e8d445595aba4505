//! メインアプリケーションコンポーネント
//!
//! 状態は `SelectionState` 1つにまとめ、ページ取得の完了・一括選択・手動選択は
//! すべてその更新として適用する。

use crate::api::artic::fetch_page;
use crate::components::{
    artwork_table::ArtworkTable,
    bulk_select_panel::BulkSelectPanel,
    header::Header,
    paginator::Paginator,
    toast::{error_message, Toast, ToastKind, ToastStack, TOAST_DURATION_MS},
};
use artwork_select_common::{
    Artwork, FetchTicket, LoadOutcome, Pager, PendingCount, SelectionState, ARTIC_API_URL,
};
use gloo::console;
use gloo::timers::callback::Timeout;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // アプリケーション状態
    let (state, set_state) = signal(SelectionState::new());
    let (toasts, set_toasts) = signal(Vec::<Toast>::new());
    let (toast_seq, set_toast_seq) = signal(0u64);
    let (panel_open, set_panel_open) = signal(false);
    let (bulk_input, set_bulk_input) = signal(String::new());

    // 派生状態
    let records = Memo::new(move |_| state.with(|s| s.records().to_vec()));
    let selected_ids = Memo::new(move |_| {
        state.with(|s| s.selection().iter().map(|a| a.id).collect::<HashSet<u64>>())
    });
    let selected_count = Memo::new(move |_| state.with(|s| s.selection().len()));
    let pending = Memo::new(move |_| state.with(|s| s.pending()));
    let all_selected = Memo::new(move |_| state.with(|s| s.all_visible_selected()));
    let loading = Memo::new(move |_| state.with(|s| s.is_loading()));
    let bulk_disabled = Memo::new(move |_| state.with(|s| !s.can_bulk_select()));
    let load_error = Memo::new(move |_| state.with(|s| s.load_error().map(str::to_string)));
    let has_page = Memo::new(move |_| state.with(|s| s.current_page().is_some()));
    let pager = Memo::new(move |_| {
        state.with(|s| {
            let current = s.displayed_page().unwrap_or(s.requested_page());
            Pager::new(current, s.total_pages().unwrap_or(1))
        })
    });

    // 通知
    let notify = move |kind: ToastKind, message: String| {
        let id = set_toast_seq
            .try_update(|seq| {
                *seq += 1;
                *seq
            })
            .unwrap_or_else(|| toast_seq.get_untracked());
        set_toasts.update(|t| t.push(Toast { id, kind, message }));
        Timeout::new(TOAST_DURATION_MS, move || {
            set_toasts.update(|t| t.retain(|toast| toast.id != id));
        })
        .forget();
    };

    // ページ移動
    let load_page = move |page: u32| {
        if let Some(ticket) = set_state.try_update(|s| s.navigate(page)) {
            spawn_fetch(set_state, ticket);
        }
    };

    let on_retry = move |_: MouseEvent| {
        if let Some(ticket) = set_state.try_update(|s| s.retry()).flatten() {
            spawn_fetch(set_state, ticket);
        }
    };

    // 一括選択
    let on_bulk_submit = move |_: ()| {
        let input = bulk_input.get_untracked();
        let result = set_state.try_update(|s| s.request_bulk_select_input(&input));
        set_panel_open.set(false);

        match result {
            Some(Ok(summary)) => {
                let message = match summary.pending {
                    PendingCount::Remaining(rest) => {
                        format!("{}件を選択しました（次ページで +{}件）", summary.selected, rest)
                    }
                    PendingCount::Resolved => format!("選択中: {}件", summary.selected),
                };
                notify(ToastKind::Success, message);
            }
            Some(Err(error)) => notify(ToastKind::Error, error_message(&error)),
            None => {}
        }
    };

    let on_bulk_close = move |_: ()| set_panel_open.set(false);
    let on_open_bulk = move |_: ()| set_panel_open.update(|open| *open = !*open);

    // 手動選択
    let on_toggle_row = move |artwork: Artwork| {
        set_state.update(|s| {
            s.toggle(&artwork);
        });
    };

    let on_toggle_all = move |checked: bool| {
        set_state.update(|s| {
            if checked {
                s.select_visible();
            } else {
                s.deselect_visible();
            }
        });
    };

    let on_clear = move |_: ()| set_state.update(|s| s.clear_selection());

    load_page(1);

    view! {
        <div class="container">
            <Header selected_count=selected_count pending=pending on_clear=on_clear />

            {move || load_error.get().map(|message| view! {
                <div class="load-error">
                    <span>{format!("作品データを取得できませんでした: {}", message)}</span>
                    <button class="btn btn-secondary btn-small" on:click=on_retry>"再試行"</button>
                </div>
            })}

            <BulkSelectPanel
                open=panel_open
                value=bulk_input
                set_value=set_bulk_input
                disabled=bulk_disabled
                on_submit=on_bulk_submit
                on_close=on_bulk_close
            />

            <Show
                when=move || !loading.get() && has_page.get()
                fallback=move || view! {
                    <div class="loading">
                        <p>{move || if loading.get() { "Loading...." } else { "" }}</p>
                    </div>
                }
            >
                <ArtworkTable
                    records=records
                    selected_ids=selected_ids
                    all_selected=all_selected
                    on_toggle_row=on_toggle_row
                    on_toggle_all=on_toggle_all
                    on_open_bulk=on_open_bulk
                />
            </Show>

            <Paginator pager=pager loading=loading on_page=load_page />

            <ToastStack toasts=toasts />
        </div>
    }
}

/// ページ取得を開始し、完了したらチケットと照合して状態へ反映
fn spawn_fetch(set_state: WriteSignal<SelectionState>, ticket: FetchTicket) {
    spawn_local(async move {
        let result = fetch_page(ARTIC_API_URL, ticket.page).await;
        set_state.update(|state| match result {
            Ok(page) => match state.complete_fetch(ticket, page) {
                LoadOutcome::Displayed { page, auto_selected } if auto_selected > 0 => {
                    console::log!(format!("page {}: {} rows auto-selected", page, auto_selected));
                }
                LoadOutcome::Discarded { page } => {
                    console::log!(format!("stale response for page {} discarded", page));
                }
                LoadOutcome::Displayed { .. } => {}
            },
            Err(error) => {
                if state.fail_fetch(ticket, &error) {
                    console::warn!(format!("page {} fetch failed: {}", ticket.page, error));
                }
            }
        });
    });
}
