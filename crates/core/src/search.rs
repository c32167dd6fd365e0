//! Company name matching.
//!
//! Search is an index scan by tenant (and optionally type) followed by an
//! in-memory substring filter. Per-tenant company counts are small; no
//! pagination.

/// Case-insensitive substring match of `term` against `name`.
///
/// An empty or whitespace-only term matches everything.
pub fn matches_name(name: &str, term: &str) -> bool {
    let term = term.trim();
    if term.is_empty() {
        return true;
    }
    name.to_lowercase().contains(&term.to_lowercase())
}
