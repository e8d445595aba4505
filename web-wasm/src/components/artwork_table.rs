//! 作品一覧テーブルコンポーネント
//!
//! 1列目はチェックボックス。ヘッダーのチェックで表示中ページの全選択/全解除、
//! ▾ で一括選択パネルを開く。

use artwork_select_common::{cell_text, Artwork, TABLE_COLUMNS};
use leptos::prelude::*;
use std::collections::HashSet;

#[component]
pub fn ArtworkTable<FR, FA, FO>(
    records: Memo<Vec<Artwork>>,
    selected_ids: Memo<HashSet<u64>>,
    all_selected: Memo<bool>,
    on_toggle_row: FR,
    on_toggle_all: FA,
    on_open_bulk: FO,
) -> impl IntoView
where
    FR: Fn(Artwork) + 'static + Clone + Send,
    FA: Fn(bool) + 'static + Clone,
    FO: Fn(()) + 'static + Clone,
{
    view! {
        <table class="artwork-table">
            <thead>
                <tr>
                    <th class="select-col">
                        <div class="select-header">
                            <input
                                type="checkbox"
                                prop:checked=move || all_selected.get()
                                on:change={
                                    let on_toggle_all = on_toggle_all.clone();
                                    move |ev| on_toggle_all(event_target_checked(&ev))
                                }
                            />
                            <button
                                class="chevron"
                                title="先頭N件を選択"
                                on:click={
                                    let on_open_bulk = on_open_bulk.clone();
                                    move |_| on_open_bulk(())
                                }
                            >
                                "▾"
                            </button>
                        </div>
                    </th>
                    {TABLE_COLUMNS
                        .iter()
                        .map(|column| view! { <th>{column.label}</th> })
                        .collect_view()}
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || records.get()
                    key=|artwork| artwork.id
                    children=move |artwork| {
                        let on_toggle_row = on_toggle_row.clone();
                        view! {
                            <ArtworkRow
                                artwork=artwork
                                selected_ids=selected_ids
                                on_toggle_row=on_toggle_row
                            />
                        }
                    }
                />
            </tbody>
        </table>
    }
}

#[component]
fn ArtworkRow<FR>(
    artwork: Artwork,
    selected_ids: Memo<HashSet<u64>>,
    on_toggle_row: FR,
) -> impl IntoView
where
    FR: Fn(Artwork) + 'static + Clone + Send,
{
    let id = artwork.id;
    let is_selected = move || selected_ids.with(|ids| ids.contains(&id));

    let cells = TABLE_COLUMNS
        .iter()
        .map(|column| {
            let text = cell_text(&artwork, column.key);
            view! { <td class=format!("col-{}", column.key)>{text}</td> }
        })
        .collect_view();

    view! {
        <tr class:selected=is_selected>
            <td class="select-col">
                <input
                    type="checkbox"
                    prop:checked=is_selected
                    on:change={
                        let on_toggle_row = on_toggle_row.clone();
                        let artwork = artwork.clone();
                        move |_| on_toggle_row(artwork.clone())
                    }
                />
            </td>
            {cells}
        </tr>
    }
}
