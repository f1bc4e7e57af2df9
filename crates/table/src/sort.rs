use std::borrow::Cow;
use std::cmp::Ordering;

use catalog_core::columns::ColumnKind;
use catalog_core::Record;
use icu_collator::{Collator, CollatorOptions, Strength};
use tracing::warn;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Header marker for the active sort column.
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }

    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }
}

/// Root-locale collation for text cells.
///
/// Secondary strength: accents and regional letters order the way a reader
/// expects (`Øre` before `Pear`, `Łódź` before `Mazury`) while case is
/// ignored. Strings the collator calls equal fall back to their lowercase
/// forms, and only identical lowercase text ties.
pub struct TextCollator {
    inner: Option<Collator>,
}

impl TextCollator {
    pub fn root() -> Self {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Secondary);
        let inner = match Collator::try_new(&Default::default(), options) {
            Ok(c) => Some(c),
            Err(e) => {
                warn!(error = %e, "root collator unavailable; text sort falls back to lowercase order");
                None
            }
        };
        Self { inner }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        let primary = match &self.inner {
            Some(c) => c.compare(a, b),
            None => Ordering::Equal,
        };
        primary.then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
    }
}

thread_local! {
    static ROOT_COLLATOR: TextCollator = TextCollator::root();
}

pub fn compare_text(a: &str, b: &str, direction: SortDirection) -> Ordering {
    ROOT_COLLATOR.with(|c| direction.apply(c.compare(a, b)))
}

/// Absent and NaN values sort last in both directions.
pub fn compare_numbers(a: Option<f64>, b: Option<f64>, direction: SortDirection) -> Ordering {
    let a = a.filter(|v| !v.is_nan());
    let b = b.filter(|v| !v.is_nan());
    match (a, b) {
        (Some(x), Some(y)) => direction.apply(x.partial_cmp(&y).unwrap_or(Ordering::Equal)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Reorder `items` by `key`. `None` leaves the order untouched.
///
/// Both directions are stable: ties keep their incoming relative order.
pub fn sort_records<'a>(items: &mut [&'a Record], key: Option<ColumnKind>, direction: SortDirection) {
    let Some(key) = key else {
        return;
    };
    if items.len() <= 1 {
        return;
    }
    if key.is_numeric() {
        items.sort_by(|a, b| compare_numbers(key.number(a), key.number(b), direction));
        return;
    }
    // Render each cell once
    let mut keyed: Vec<(Cow<'a, str>, &'a Record)> = items.iter().map(|r| (key.text(*r), *r)).collect();
    ROOT_COLLATOR.with(|c| keyed.sort_by(|(ka, _), (kb, _)| direction.apply(c.compare(ka, kb))));
    for (slot, (_, r)) in items.iter_mut().zip(keyed) {
        *slot = r;
    }
}
