//! Artwork Select Common Library
//!
//! CLIとWeb(WASM)で共有される型・選択ロジック・API解析

pub mod types;
pub mod error;
pub mod selection;
pub mod accumulator;
pub mod pager;
pub mod api;
pub mod table;
pub mod export;

pub use types::{Artwork, Page, PAGE_SIZE, MAX_BULK_SELECT};
pub use error::{Error, InvalidRequest, Result};
pub use selection::SelectionSet;
pub use accumulator::{
    on_page_advance, request_bulk_select, BulkSelectCount, BulkSelectSummary, FetchTicket,
    LoadOutcome, PendingCount, SelectionState,
};
pub use pager::{reachable_total_pages, Pager, PAGE_LINK_WINDOW};
pub use api::{page_url, parse_page_response, source_error, PageEnvelope, Pagination, ARTIC_API_URL};
pub use table::{cell_text, TableColumn, TABLE_COLUMNS};
