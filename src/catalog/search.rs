use crate::catalog::entry::CatalogEntry;

/// Entries whose name contains `query`, ignoring case.
///
/// A blank query (only whitespace) keeps every entry. A non-blank query is
/// matched as typed, surrounding spaces included.
pub fn filter_by_name<'a>(entries: &'a [CatalogEntry], query: &str) -> Vec<&'a CatalogEntry> {
    if query.trim().is_empty() {
        return entries.iter().collect();
    }
    entries
        .iter()
        .filter(|entry| entry.name_matches(query))
        .collect()
}
