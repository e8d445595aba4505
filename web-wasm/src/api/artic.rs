//! Art Institute of Chicago API連携
//!
//! ページ単位で作品を取得する。URL生成とレスポンス解析は共通ライブラリ側。

use artwork_select_common::{page_url, source_error, Error, Page, PageEnvelope, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// 1ページ取得
///
/// 通信失敗・非成功ステータス・解析失敗はすべて `SourceUnavailable`
///
/// # Arguments
/// * `base_url` - 作品一覧エンドポイント
/// * `page` - 1始まりのページ番号
pub async fn fetch_page(base_url: &str, page: u32) -> Result<Page> {
    let url = page_url(base_url, page);
    let resp = send_get(&url).await.map_err(unavailable)?;

    if !resp.ok() {
        let body = read_text(&resp).await.unwrap_or_default();
        return Err(source_error(resp.status(), &body));
    }

    let json = JsFuture::from(resp.json().map_err(unavailable)?)
        .await
        .map_err(unavailable)?;
    let envelope: PageEnvelope = serde_wasm_bindgen::from_value(json)
        .map_err(|e| Error::SourceUnavailable(format!("invalid response: {}", e)))?;

    Ok(envelope.into_page(page))
}

async fn send_get(url: &str) -> std::result::Result<Response, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is unavailable"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    resp_value.dyn_into()
}

async fn read_text(resp: &Response) -> Option<String> {
    let text = JsFuture::from(resp.text().ok()?).await.ok()?;
    text.as_string()
}

fn unavailable(error: JsValue) -> Error {
    Error::SourceUnavailable(describe_js_error(&error))
}

/// JS例外を文字列化（`TypeError: Failed to fetch` など）
fn describe_js_error(error: &JsValue) -> String {
    error
        .as_string()
        .or_else(|| {
            error
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", error))
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_describe_js_error_string() {
        let message = describe_js_error(&JsValue::from_str("Failed to fetch"));
        assert_eq!(message, "Failed to fetch");
    }

    #[wasm_bindgen_test]
    fn wasm_describe_js_error_object() {
        let error: JsValue = js_sys::Error::new("network down").into();
        assert_eq!(describe_js_error(&error), "network down");
    }

    #[wasm_bindgen_test]
    async fn wasm_fetch_unreachable_host_is_source_unavailable() {
        let result = fetch_page("http://127.0.0.1:9/artworks", 1).await;
        assert!(matches!(result, Err(Error::SourceUnavailable(_))));
    }
}
