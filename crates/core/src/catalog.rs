//! Fixed choice lists offered by the venue and artist forms.
//!
//! State codes are stored verbatim in `locations.state`; genre names are
//! stored verbatim in the `genres` text arrays.

use serde::Serialize;

/* --------------------------------------------------------------------------
   States
   -------------------------------------------------------------------------- */

/// Two-letter US state codes accepted for a location (50 states plus DC).
pub const STATE_CODES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
    "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

/// Check whether `code` is an accepted state code. Matching is exact.
pub fn is_valid_state(code: &str) -> bool {
    STATE_CODES.contains(&code)
}

/* --------------------------------------------------------------------------
   Genres
   -------------------------------------------------------------------------- */

/// Genre tags a venue or artist can list.
pub const GENRES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

/// Check whether `genre` is a known genre tag. Matching is exact.
pub fn is_valid_genre(genre: &str) -> bool {
    GENRES.contains(&genre)
}

/* --------------------------------------------------------------------------
   Form choices
   -------------------------------------------------------------------------- */

/// Choice lists a client needs to render a venue or artist form.
#[derive(Debug, Clone, Serialize)]
pub struct FormChoices {
    pub states: &'static [&'static str],
    pub genres: &'static [&'static str],
}

impl FormChoices {
    pub const fn new() -> Self {
        Self {
            states: STATE_CODES,
            genres: GENRES,
        }
    }
}

impl Default for FormChoices {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_catalog_has_fifty_one_codes() {
        assert_eq!(STATE_CODES.len(), 51);
    }

    #[test]
    fn state_codes_are_unique_two_letter_uppercase() {
        let mut seen = std::collections::HashSet::new();
        for code in STATE_CODES {
            assert_eq!(code.len(), 2, "{code}");
            assert!(code.chars().all(|c| c.is_ascii_uppercase()), "{code}");
            assert!(seen.insert(code), "duplicate state code {code}");
        }
    }

    #[test]
    fn state_match_is_exact() {
        assert!(is_valid_state("TX"));
        assert!(!is_valid_state("tx"));
        assert!(!is_valid_state("Texas"));
        assert!(!is_valid_state(""));
    }

    #[test]
    fn genre_match_is_exact() {
        assert!(is_valid_genre("Jazz"));
        assert!(is_valid_genre("R&B"));
        assert!(!is_valid_genre("jazz"));
        assert!(!is_valid_genre("Polka"));
    }
}
