use catalog_core::Record;

use crate::filter::filter_records;
use crate::pages::{page_tokens, PageTokens};
use crate::paginate::{clamp_page, page_slice, total_pages};
use crate::sort::sort_records;
use crate::state::ViewState;

pub const NO_ENTRIES: &str = "No entries to display";

/// Everything one frame needs to draw the table and pager.
#[derive(Clone, Debug)]
pub struct TableView<'a> {
    /// Records on the current page, in display order.
    pub rows: Vec<&'a Record>,
    /// Size of the filtered set.
    pub filtered: usize,
    pub total_pages: usize,
    /// Page actually shown, already clamped into range.
    pub current_page: usize,
    pub page_size: usize,
    pub tokens: PageTokens,
}

impl TableView<'_> {
    pub fn range_message(&self) -> String {
        range_message(self.filtered, self.page_size, self.current_page)
    }

    pub fn is_empty(&self) -> bool {
        self.filtered == 0
    }
}

/// "Showing A to B of N entries" with B clipped to `filtered`.
pub fn range_message(filtered: usize, page_size: usize, page: usize) -> String {
    if filtered == 0 || page_size == 0 {
        return NO_ENTRIES.to_string();
    }
    let start = page.saturating_sub(1).saturating_mul(page_size).saturating_add(1);
    let end = page.saturating_mul(page_size).min(filtered);
    format!("Showing {} to {} of {} entries", start, end, filtered)
}

/// Run filter → sort → paginate for `state`.
///
/// The page is clamped before slicing, so a state left pointing past the
/// end still renders the last page. Callers that keep the state should
/// store `state.clone().clamped(view.total_pages)` to match.
pub fn derive_view<'a>(records: &'a [Record], state: &ViewState) -> TableView<'a> {
    let mut sorted = filter_records(records, &state.search_term);
    sort_records(&mut sorted, state.sort_key, state.sort_direction);
    let filtered = sorted.len();
    let total = total_pages(filtered, state.page_size);
    let current_page = clamp_page(state.current_page, total);
    let rows = page_slice(&sorted, state.page_size, current_page).to_vec();
    TableView {
        rows,
        filtered,
        total_pages: total,
        current_page,
        page_size: state.page_size,
        tokens: page_tokens(total, current_page),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::PageToken;

    fn records(n: usize) -> Vec<Record> {
        (1..=n)
            .map(|i| Record::new(format!("item {i}"), "Brand", i as f64, i as f64 * 1.5))
            .collect()
    }

    #[test]
    fn twelve_records_three_pages() {
        let data = records(12);
        let view = derive_view(&data, &ViewState::default());
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.rows.len(), 5);
        assert_eq!(
            view.tokens.as_slice(),
            &[
                PageToken::Prev { enabled: false },
                PageToken::Page { number: 1, active: true },
                PageToken::Page { number: 2, active: false },
                PageToken::Page { number: 3, active: false },
                PageToken::Next { enabled: true },
            ]
        );
        assert_eq!(view.range_message(), "Showing 1 to 5 of 12 entries");
    }

    #[test]
    fn second_page_of_seven_is_clipped() {
        let data = records(7);
        let state = ViewState::default().go_to(2, 2);
        let view = derive_view(&data, &state);
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.range_message(), "Showing 6 to 7 of 7 entries");
    }

    #[test]
    fn no_match_renders_empty_state() {
        let data = records(12);
        let view = derive_view(&data, &ViewState::default().with_search("x"));
        assert!(view.is_empty());
        assert!(view.rows.is_empty());
        assert_eq!(view.range_message(), NO_ENTRIES);
        assert_eq!(
            view.tokens.as_slice(),
            &[PageToken::Prev { enabled: false }, PageToken::Next { enabled: false }]
        );
    }

    #[test]
    fn stale_page_is_clamped_on_render() {
        let data = records(12);
        let mut state = ViewState::default().go_to(3, 3);
        // narrowing search without going through with_search
        state.search_term = "item 1".into();
        let view = derive_view(&data, &state);
        // item 1, item 10, item 11, item 12
        assert_eq!(view.filtered, 4);
        assert_eq!(view.current_page, 1);
        assert_eq!(view.rows.len(), 4);
    }

    #[test]
    fn empty_catalog_is_not_an_error() {
        let view = derive_view(&[], &ViewState::default());
        assert_eq!(view.total_pages, 0);
        assert_eq!(view.current_page, 1);
        assert_eq!(view.range_message(), NO_ENTRIES);
    }

    #[test]
    fn sorted_page_comes_from_sorted_set() {
        let data = records(12);
        let state = ViewState::default()
            .toggle_sort(catalog_core::columns::ColumnKind::Stock)
            .toggle_sort(catalog_core::columns::ColumnKind::Stock);
        let view = derive_view(&data, &state);
        let stocks: Vec<f64> = view.rows.iter().filter_map(|r| r.stock).collect();
        assert_eq!(stocks, vec![12.0, 11.0, 10.0, 9.0, 8.0]);
    }
}
