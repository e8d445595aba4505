//! ページ送りコンポーネント

use artwork_select_common::Pager;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

#[component]
pub fn Paginator<FP>(
    pager: Memo<Pager>,
    loading: Memo<bool>,
    on_page: FP,
) -> impl IntoView
where
    FP: Fn(u32) + 'static + Clone + Send,
{
    let go_first = {
        let on_page = on_page.clone();
        move |_: MouseEvent| {
            let pager = pager.get_untracked();
            if pager.prev().is_some() {
                on_page(1);
            }
        }
    };
    let go_prev = {
        let on_page = on_page.clone();
        move |_: MouseEvent| {
            if let Some(page) = pager.get_untracked().prev() {
                on_page(page);
            }
        }
    };
    let go_next = {
        let on_page = on_page.clone();
        move |_: MouseEvent| {
            if let Some(page) = pager.get_untracked().next() {
                on_page(page);
            }
        }
    };
    let go_last = {
        let on_page = on_page.clone();
        move |_: MouseEvent| {
            let pager = pager.get_untracked();
            if pager.next().is_some() {
                on_page(pager.last());
            }
        }
    };

    view! {
        <nav class="paginator" class:hidden=move || loading.get()>
            <button class="page-nav" disabled=move || pager.get().prev().is_none() on:click=go_first>"«"</button>
            <button class="page-nav" disabled=move || pager.get().prev().is_none() on:click=go_prev>"‹"</button>
            <For
                each=move || pager.get().page_links()
                key=|page| *page
                children=move |page| {
                    let on_page = on_page.clone();
                    view! {
                        <button
                            class="page-link"
                            class:active=move || pager.get().current() == page
                            on:click=move |_| on_page(page)
                        >
                            {page}
                        </button>
                    }
                }
            />
            <button class="page-nav" disabled=move || pager.get().next().is_none() on:click=go_next>"›"</button>
            <button class="page-nav" disabled=move || pager.get().next().is_none() on:click=go_last>"»"</button>
            <span class="page-report">
                {move || {
                    let pager = pager.get();
                    format!("{} / {}", pager.current(), pager.total_pages())
                }}
            </span>
        </nav>
    }
}
