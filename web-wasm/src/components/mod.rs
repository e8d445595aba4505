//! UIコンポーネント

pub mod header;
pub mod artwork_table;
pub mod bulk_select_panel;
pub mod paginator;
pub mod toast;
