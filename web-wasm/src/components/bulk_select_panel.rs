//! 一括選択パネルコンポーネント
//!
//! 行数を入力して送信すると、全体の先頭N件を選択する（ページをまたぐ分は次ページで追加）。

use artwork_select_common::MAX_BULK_SELECT;
use leptos::ev::KeyboardEvent;
use leptos::prelude::*;

#[component]
pub fn BulkSelectPanel<FS, FC>(
    open: ReadSignal<bool>,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
    disabled: Memo<bool>,
    on_submit: FS,
    on_close: FC,
) -> impl IntoView
where
    FS: Fn(()) + 'static + Clone + Send + Sync,
    FC: Fn(()) + 'static + Clone + Send + Sync,
{
    let on_keydown = {
        let on_submit = on_submit.clone();
        let on_close = on_close.clone();
        move |ev: KeyboardEvent| match ev.key().as_str() {
            "Enter" if !disabled.get_untracked() => on_submit(()),
            "Escape" => on_close(()),
            _ => {}
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="bulk-select-panel">
                <input
                    type="number"
                    placeholder="Select rows"
                    min="1"
                    max=MAX_BULK_SELECT.to_string()
                    prop:value=move || value.get()
                    on:input=move |ev| set_value.set(event_target_value(&ev))
                    on:keydown=on_keydown.clone()
                />
                <div class="bulk-actions">
                    <button
                        class="btn btn-primary btn-small"
                        disabled=move || disabled.get()
                        on:click={
                            let on_submit = on_submit.clone();
                            move |_| on_submit(())
                        }
                    >
                        "Submit"
                    </button>
                    <button
                        class="btn btn-tertiary btn-small"
                        on:click={
                            let on_close = on_close.clone();
                            move |_| on_close(())
                        }
                    >
                        "閉じる"
                    </button>
                </div>
                <p class="text-muted">{format!("1〜{}件", MAX_BULK_SELECT)}</p>
            </div>
        </Show>
    }
}
