use smallvec::SmallVec;

/// One unit in the pager row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageToken {
    Prev { enabled: bool },
    Page { number: usize, active: bool },
    /// Inert marker standing in for hidden pages.
    Ellipsis,
    Next { enabled: bool },
}

impl PageToken {
    /// Page a click on this token navigates to, if any.
    pub fn target(self, current: usize) -> Option<usize> {
        match self {
            PageToken::Prev { enabled: true } => Some(current.saturating_sub(1).max(1)),
            PageToken::Next { enabled: true } => Some(current.saturating_add(1)),
            PageToken::Page { number, .. } => Some(number),
            _ => None,
        }
    }

    pub fn label(self) -> String {
        match self {
            PageToken::Prev { .. } => "Previous".to_string(),
            PageToken::Next { .. } => "Next".to_string(),
            PageToken::Page { number, .. } => number.to_string(),
            PageToken::Ellipsis => "...".to_string(),
        }
    }
}

/// Prev + at most 7 page/ellipsis slots + Next.
pub type PageTokens = SmallVec<[PageToken; 9]>;

/// Build the pager row for `current` out of `total_pages`.
///
/// Page 1, the last page and `current ± 1` are always shown. A hidden page
/// at `current ± 2` becomes an ellipsis; other hidden pages are skipped.
/// Prev is disabled on the first page, Next on the last, and both when
/// there are no pages.
pub fn page_tokens(total_pages: usize, current: usize) -> PageTokens {
    let mut out = PageTokens::new();
    out.push(PageToken::Prev { enabled: total_pages > 0 && current > 1 });
    for page in 1..=total_pages {
        let near = page + 1 >= current && page <= current.saturating_add(1);
        if page == 1 || page == total_pages || near {
            out.push(PageToken::Page { number: page, active: page == current });
        } else if page + 2 == current || page == current.saturating_add(2) {
            out.push(PageToken::Ellipsis);
        }
    }
    out.push(PageToken::Next { enabled: total_pages > 0 && current < total_pages });
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(tokens: &[PageToken]) -> Vec<String> {
        tokens
            .iter()
            .map(|t| match t {
                PageToken::Prev { enabled } => format!("Prev{}", if *enabled { "" } else { "(x)" }),
                PageToken::Next { enabled } => format!("Next{}", if *enabled { "" } else { "(x)" }),
                PageToken::Page { number, active: true } => format!("[{}]", number),
                PageToken::Page { number, .. } => number.to_string(),
                PageToken::Ellipsis => "…".to_string(),
            })
            .collect()
    }

    #[test]
    fn three_pages_need_no_ellipsis() {
        assert_eq!(render(&page_tokens(3, 1)), vec!["Prev(x)", "[1]", "2", "3", "Next"]);
    }

    #[test]
    fn middle_of_twenty_has_two_ellipses() {
        assert_eq!(
            render(&page_tokens(20, 10)),
            vec!["Prev", "1", "…", "9", "[10]", "11", "…", "20", "Next"]
        );
    }

    #[test]
    fn edges_of_a_long_range() {
        assert_eq!(render(&page_tokens(20, 1)), vec!["Prev(x)", "[1]", "2", "…", "20", "Next"]);
        assert_eq!(render(&page_tokens(20, 20)), vec!["Prev", "1", "…", "19", "[20]", "Next(x)"]);
        // page 2 sits at current-2 and is replaced by the marker
        assert_eq!(render(&page_tokens(20, 4)), vec!["Prev", "1", "…", "3", "[4]", "5", "…", "20", "Next"]);
    }

    #[test]
    fn single_and_empty_ranges() {
        assert_eq!(render(&page_tokens(1, 1)), vec!["Prev(x)", "[1]", "Next(x)"]);
        assert_eq!(render(&page_tokens(0, 1)), vec!["Prev(x)", "Next(x)"]);
    }

    #[test]
    fn targets() {
        assert_eq!(PageToken::Prev { enabled: true }.target(3), Some(2));
        assert_eq!(PageToken::Prev { enabled: false }.target(1), None);
        assert_eq!(PageToken::Next { enabled: true }.target(3), Some(4));
        assert_eq!(PageToken::Ellipsis.target(3), None);
        assert_eq!(PageToken::Page { number: 7, active: false }.target(3), Some(7));
        assert_eq!(PageToken::Ellipsis.label(), "...");
    }
}
