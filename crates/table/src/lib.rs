//! Catalog table: the derived-data pipeline behind the product grid.
//!
//! Everything here is a pure function of the fetched records and a
//! [`ViewState`]. The GUI calls [`derive_view`] once per frame; nothing is
//! cached between frames.
//!
//! Stages, in order:
//! - [`filter_records`]: case-insensitive substring match across all fields
//! - [`sort_records`]: stable, numeric or collated text comparison
//! - [`page_slice`]: one page window of the sorted set
//! - [`page_tokens`]: the pager row (Prev, pages, ellipses, Next)

#![forbid(unsafe_code)]

mod filter;
mod page_size;
mod pages;
mod paginate;
mod sort;
mod state;
mod view;

pub use filter::filter_records;
pub use page_size::PageSizeInput;
pub use pages::{page_tokens, PageToken, PageTokens};
pub use paginate::{clamp_page, page_slice, total_pages};
pub use sort::{compare_numbers, compare_text, sort_records, SortDirection, TextCollator};
pub use state::{ViewState, DEFAULT_PAGE_SIZE};
pub use view::{derive_view, range_message, TableView, NO_ENTRIES};

pub mod prelude {
    pub use super::{derive_view, PageSizeInput, PageToken, SortDirection, TableView, ViewState};
    pub use catalog_core::columns::ColumnKind;
    pub use catalog_core::Record;
}
