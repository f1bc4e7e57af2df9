use catalog_core::columns::ColumnKind;

use crate::paginate::clamp_page;
use crate::sort::SortDirection;

pub const DEFAULT_PAGE_SIZE: usize = 5;

/// User-controlled parameters driving the pipeline.
///
/// Transitions take `self` and return the next state; nothing mutates in
/// place. Pages are 1-based.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    pub search_term: String,
    pub page_size: usize,
    pub current_page: usize,
    pub sort_key: Option<ColumnKind>,
    pub sort_direction: SortDirection,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::with_initial_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl ViewState {
    /// Fresh state with a configured page size; 0 falls back to the default.
    pub fn with_initial_page_size(page_size: usize) -> Self {
        Self {
            search_term: String::new(),
            page_size: if page_size == 0 { DEFAULT_PAGE_SIZE } else { page_size },
            current_page: 1,
            sort_key: None,
            sort_direction: SortDirection::Ascending,
        }
    }

    /// New search term; back to page 1.
    pub fn with_search(self, term: impl Into<String>) -> Self {
        Self { search_term: term.into(), current_page: 1, ..self }
    }

    /// New page size; back to page 1. Zero is ignored.
    pub fn with_page_size(self, page_size: usize) -> Self {
        if page_size == 0 {
            return self;
        }
        Self { page_size, current_page: 1, ..self }
    }

    /// Header click: the active column flips direction, any other column
    /// becomes active ascending.
    pub fn toggle_sort(self, key: ColumnKind) -> Self {
        if self.sort_key == Some(key) {
            let sort_direction = self.sort_direction.flipped();
            Self { sort_direction, ..self }
        } else {
            Self { sort_key: Some(key), sort_direction: SortDirection::Ascending, ..self }
        }
    }

    pub fn go_to(self, page: usize, total_pages: usize) -> Self {
        Self { current_page: clamp_page(page, total_pages), ..self }
    }

    pub fn prev(self, total_pages: usize) -> Self {
        let page = self.current_page.saturating_sub(1);
        self.go_to(page, total_pages)
    }

    pub fn next(self, total_pages: usize) -> Self {
        let page = self.current_page.saturating_add(1);
        self.go_to(page, total_pages)
    }

    /// Re-establish the page invariant after the record set changed size.
    pub fn clamped(self, total_pages: usize) -> Self {
        let page = self.current_page;
        self.go_to(page, total_pages)
    }

    /// Arrow for `key`'s header when it is the active sort column.
    pub fn sort_indicator(&self, key: ColumnKind) -> Option<&'static str> {
        (self.sort_key == Some(key)).then(|| self.sort_direction.arrow())
    }
}
