//! エラー型定義

use thiserror::Error;

/// 一括選択リクエストの入力エラー
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidRequest {
    /// 未入力・0・数値以外
    #[error("InvalidRequest: missing value")]
    MissingValue,

    /// 上限（30件）超過
    #[error("InvalidRequest: exceeds maximum")]
    ExceedsMaximum { requested: u64, max: usize },
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequest),

    #[error("page not loaded yet")]
    PageNotLoaded,

    #[error("SourceUnavailable: {0}")]
    SourceUnavailable(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_missing_value() {
        let error = Error::from(InvalidRequest::MissingValue);
        assert_eq!(format!("{}", error), "InvalidRequest: missing value");
    }

    #[test]
    fn test_error_display_exceeds_maximum() {
        let error = Error::from(InvalidRequest::ExceedsMaximum { requested: 31, max: 30 });
        assert_eq!(format!("{}", error), "InvalidRequest: exceeds maximum");
    }

    #[test]
    fn test_error_display_source_unavailable() {
        let error = Error::SourceUnavailable("HTTP 503".to_string());
        let display = format!("{}", error);
        assert!(display.starts_with("SourceUnavailable"));
        assert!(display.contains("HTTP 503"));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::PageNotLoaded;
        let debug = format!("{:?}", error);
        assert!(debug.contains("PageNotLoaded"));
    }
}
