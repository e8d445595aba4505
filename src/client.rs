//! カタログAPIクライアント（CLI版）
//!
//! reqwestでページを取得し、解析は共通ライブラリに任せる

use crate::config::Config;
use crate::error::Result;
use artwork_select_common::{page_url, parse_page_response, source_error, Error, Page};
use std::time::Duration;
use tracing::debug;

pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
    user_agent: String,
}

impl CatalogClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_url(),
            user_agent: config.user_agent.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 1ページ取得
    ///
    /// 通信失敗・非成功ステータス・解析失敗はすべて `SourceUnavailable`
    pub async fn fetch_page(&self, page: u32) -> std::result::Result<Page, Error> {
        let url = page_url(&self.base_url, page);
        debug!(%url, "fetching page");

        let response = self
            .client
            .get(&url)
            .header("AIC-User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(|e| Error::SourceUnavailable(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::SourceUnavailable(e.to_string()))?;

        if !status.is_success() {
            return Err(source_error(status.as_u16(), &body));
        }

        parse_page_response(page, &body)
            .map_err(|e| Error::SourceUnavailable(format!("invalid response: {}", e)))
    }
}
