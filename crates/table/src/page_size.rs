use tracing::debug;

use crate::state::{ViewState, DEFAULT_PAGE_SIZE};

/// Edit buffer behind the "Show N entries" box.
///
/// Typing only changes the buffer. The value reaches [`ViewState`] on
/// [`commit`](Self::commit), which the GUI calls on blur and Enter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageSizeInput {
    pub text: String,
}

impl Default for PageSizeInput {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PageSizeInput {
    pub fn new(page_size: usize) -> Self {
        Self { text: page_size.to_string() }
    }

    /// Leading integer of the buffer: optional whitespace and sign, then
    /// digits. Trailing garbage is ignored (`"12abc"` → 12). Digit runs too
    /// long for `i64` saturate.
    pub fn parse(&self) -> Option<i64> {
        let s = self.text.trim_start();
        let (neg, rest) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits_len == 0 {
            return None;
        }
        let digits = &rest[..digits_len];
        Some(match digits.parse::<i64>() {
            Ok(n) if neg => -n,
            Ok(n) => n,
            Err(_) if neg => i64::MIN,
            Err(_) => i64::MAX,
        })
    }

    /// ArrowUp. An unparsable buffer steps from `active`.
    pub fn step_up(&mut self, active: usize) {
        let base = self.parse().unwrap_or(active as i64);
        self.text = base.saturating_add(1).max(1).to_string();
    }

    /// ArrowDown; never goes below 1.
    pub fn step_down(&mut self, active: usize) {
        let base = self.parse().unwrap_or(active as i64);
        let next = base.saturating_sub(1);
        if next >= 1 {
            self.text = next.to_string();
        }
    }

    /// Apply the buffer to `state`. Invalid or non-positive input leaves the
    /// state as it was; either way the buffer is resynced to the page size
    /// in effect afterwards.
    pub fn commit(&mut self, state: ViewState) -> ViewState {
        let size = self
            .parse()
            .filter(|n| *n > 0)
            .map(|n| usize::try_from(n).unwrap_or(usize::MAX));
        let next = match size {
            Some(n) if n == state.page_size => state,
            Some(n) => state.with_page_size(n),
            None => {
                debug!(input = %self.text, kept = state.page_size, "page size commit ignored");
                state
            }
        };
        self.text = next.page_size.to_string();
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(s: &str) -> PageSizeInput {
        PageSizeInput { text: s.to_string() }
    }

    #[test]
    fn parses_leading_integer() {
        assert_eq!(input("12").parse(), Some(12));
        assert_eq!(input(" 7").parse(), Some(7));
        assert_eq!(input("12abc").parse(), Some(12));
        assert_eq!(input("-3").parse(), Some(-3));
        assert_eq!(input("").parse(), None);
        assert_eq!(input("abc").parse(), None);
        assert_eq!(input("99999999999999999999").parse(), Some(i64::MAX));
        assert_eq!(input("-99999999999999999999").parse(), Some(i64::MIN));
    }

    #[test]
    fn oversized_commit_saturates() {
        let mut i = input("99999999999999999999");
        let next = i.commit(ViewState::default());
        assert_eq!(next.page_size, usize::try_from(i64::MAX).unwrap_or(usize::MAX));
        assert_eq!(next.current_page, 1);
        assert_eq!(i.text, next.page_size.to_string());
    }

    #[test]
    fn arrows_step_and_floor_at_one() {
        let mut i = input("5");
        i.step_up(5);
        assert_eq!(i.text, "6");
        let mut i = input("2");
        i.step_down(2);
        assert_eq!(i.text, "1");
        i.step_down(2);
        assert_eq!(i.text, "1");
        let mut i = input("");
        i.step_up(5);
        assert_eq!(i.text, "6");
    }

    #[test]
    fn valid_commit_applies_and_resets_page() {
        let state = ViewState::default().go_to(3, 9);
        let mut i = input("10");
        let next = i.commit(state);
        assert_eq!((next.page_size, next.current_page), (10, 1));
        assert_eq!(i.text, "10");
    }

    #[test]
    fn same_value_commit_keeps_page() {
        let state = ViewState::default().go_to(3, 9);
        let mut i = input("5");
        assert_eq!(i.commit(state).current_page, 3);
    }

    #[test]
    fn invalid_commits_keep_previous_size() {
        for bad in ["", "abc", "0", "-4"] {
            let state = ViewState::default().with_page_size(8).go_to(2, 4);
            let mut i = input(bad);
            let next = i.commit(state.clone());
            assert_eq!(next, state, "input {bad:?}");
            assert_eq!(i.text, "8");
        }
    }
}
