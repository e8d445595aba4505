//! ヘッダーコンポーネント

use artwork_select_common::PendingCount;
use leptos::prelude::*;

#[component]
pub fn Header<FC>(
    selected_count: Memo<usize>,
    pending: Memo<PendingCount>,
    on_clear: FC,
) -> impl IntoView
where
    FC: Fn(()) + 'static + Clone,
{
    view! {
        <header class="header">
            <h1>"Artwork Catalog"</h1>
            <div class="selection-summary">
                <span class="selected-count">
                    {move || format!("選択中: {}件", selected_count.get())}
                </span>
                <Show when=move || pending.get().is_pending()>
                    <span class="pending-badge">
                        {move || format!("次ページで +{}件", pending.get().remaining())}
                    </span>
                </Show>
                <button
                    class="btn btn-tertiary btn-small"
                    disabled=move || selected_count.get() == 0
                    on:click={
                        let on_clear = on_clear.clone();
                        move |_| on_clear(())
                    }
                >
                    "選択をクリア"
                </button>
            </div>
        </header>
    }
}
