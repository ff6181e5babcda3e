//! Ordering of symbol names in generated build files.

/// Sort names case-insensitively ascending.
///
/// The sort is stable, so names that compare equal ignoring case keep their
/// input order. Build descriptors depend on this ordering being reproducible
/// across regenerations.
pub fn sort_case_insensitive<S: AsRef<str>>(names: &mut [S]) {
    names.sort_by_cached_key(|name| name.as_ref().to_lowercase());
}
