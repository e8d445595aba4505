//! トースト通知コンポーネント

use artwork_select_common::{Error, InvalidRequest};
use leptos::prelude::*;

/// 表示時間（ミリ秒）
pub const TOAST_DURATION_MS: u32 = 2_500;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

/// エラーをユーザー向けメッセージに変換
pub fn error_message(error: &Error) -> String {
    match error {
        Error::InvalidRequest(InvalidRequest::MissingValue) => "有効な行数を入力してください".to_string(),
        Error::InvalidRequest(InvalidRequest::ExceedsMaximum { max, .. }) => {
            format!("最大{}行まで選択できます", max)
        }
        Error::PageNotLoaded => "ページの読み込み完了後に実行してください".to_string(),
        Error::SourceUnavailable(detail) => format!("作品データを取得できませんでした（{}）", detail),
        Error::Json(e) => format!("作品データの解析に失敗しました（{}）", e),
    }
}

#[component]
pub fn ToastStack(toasts: ReadSignal<Vec<Toast>>) -> impl IntoView {
    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let icon = match toast.kind {
                        ToastKind::Success => "✔",
                        ToastKind::Error => "✖",
                    };
                    view! {
                        <div class=format!("toast toast-{}", toast.kind.as_str())>
                            <span class="toast-icon">{icon}</span>
                            <span>{toast.message.clone()}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_missing_value() {
        let message = error_message(&Error::InvalidRequest(InvalidRequest::MissingValue));
        assert_eq!(message, "有効な行数を入力してください");
    }

    #[test]
    fn test_error_message_exceeds_maximum() {
        let error = Error::InvalidRequest(InvalidRequest::ExceedsMaximum { requested: 45, max: 30 });
        assert_eq!(error_message(&error), "最大30行まで選択できます");
    }

    #[test]
    fn test_error_message_source_unavailable() {
        let message = error_message(&Error::SourceUnavailable("HTTP 503".to_string()));
        assert!(message.contains("HTTP 503"));
    }

    #[test]
    fn test_toast_kind_as_str() {
        assert_eq!(ToastKind::Success.as_str(), "success");
        assert_eq!(ToastKind::Error.as_str(), "error");
    }
}
