//! Name search helpers.
//!
//! Search is a case-insensitive substring match on the `name` column,
//! executed by the repository with `ILIKE ... ESCAPE '\'`.

/// Escape character used in generated `LIKE` patterns.
pub const LIKE_ESCAPE: char = '\\';

/// Build an `ILIKE` pattern matching any name containing `term`.
///
/// The term is trimmed and the `LIKE` metacharacters `%`, `_` and `\` are
/// escaped so they match literally. An empty term yields `%`, which matches
/// every row.
///
/// # Examples
///
/// ```
/// use gigboard_core::search::contains_pattern;
/// assert_eq!(contains_pattern("hall"), "%hall%");
/// assert_eq!(contains_pattern("  "), "%");
/// assert_eq!(contains_pattern("100%"), "%100\\%%");
/// ```
pub fn contains_pattern(term: &str) -> String {
    let term = term.trim();
    if term.is_empty() {
        return "%".to_string();
    }

    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_wraps_term() {
        assert_eq!(contains_pattern("hall"), "%hall%");
    }

    #[test]
    fn pattern_trims_whitespace() {
        assert_eq!(contains_pattern("  music  "), "%music%");
    }

    #[test]
    fn empty_term_matches_everything() {
        assert_eq!(contains_pattern(""), "%");
    }

    #[test]
    fn metacharacters_are_escaped() {
        assert_eq!(contains_pattern("a_b"), "%a\\_b%");
        assert_eq!(contains_pattern("50%"), "%50\\%%");
        assert_eq!(contains_pattern("x\\y"), "%x\\\\y%");
    }
}
