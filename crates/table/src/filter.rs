use catalog_core::columns::ColumnKind;
use catalog_core::Record;

/// Keep records where any field contains `term`, ignoring case.
///
/// The term is used literally (no trimming). An empty term keeps everything
/// and skips the per-record lowercasing. Relative order is preserved.
pub fn filter_records<'a, I>(items: I, term: &str) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    if term.is_empty() {
        return items.into_iter().collect();
    }
    let needle = term.to_lowercase();
    items
        .into_iter()
        .filter(|r| matches_lowered(r, &needle))
        .collect()
}

fn matches_lowered(r: &Record, needle: &str) -> bool {
    ColumnKind::ALL
        .iter()
        .any(|k| k.text(r).to_lowercase().contains(needle))
}
