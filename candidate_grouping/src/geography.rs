use crate::config::{CandidateResult, ScopeType};

pub const UNKNOWN_STATE: &str = "Unknown State";
pub const AT_LARGE: &str = "At-Large";

// Suffix that district codes carry for at-large seats (e.g. "AKAL").
const AT_LARGE_SUFFIX: &str = "AL";

/// Full name and postal abbreviation of the 50 states and DC.
const STATES: [(&str, &str); 51] = [
    ("Alabama", "AL"),
    ("Alaska", "AK"),
    ("Arizona", "AZ"),
    ("Arkansas", "AR"),
    ("California", "CA"),
    ("Colorado", "CO"),
    ("Connecticut", "CT"),
    ("Delaware", "DE"),
    ("District of Columbia", "DC"),
    ("Florida", "FL"),
    ("Georgia", "GA"),
    ("Hawaii", "HI"),
    ("Idaho", "ID"),
    ("Illinois", "IL"),
    ("Indiana", "IN"),
    ("Iowa", "IA"),
    ("Kansas", "KS"),
    ("Kentucky", "KY"),
    ("Louisiana", "LA"),
    ("Maine", "ME"),
    ("Maryland", "MD"),
    ("Massachusetts", "MA"),
    ("Michigan", "MI"),
    ("Minnesota", "MN"),
    ("Mississippi", "MS"),
    ("Missouri", "MO"),
    ("Montana", "MT"),
    ("Nebraska", "NE"),
    ("Nevada", "NV"),
    ("New Hampshire", "NH"),
    ("New Jersey", "NJ"),
    ("New Mexico", "NM"),
    ("New York", "NY"),
    ("North Carolina", "NC"),
    ("North Dakota", "ND"),
    ("Ohio", "OH"),
    ("Oklahoma", "OK"),
    ("Oregon", "OR"),
    ("Pennsylvania", "PA"),
    ("Rhode Island", "RI"),
    ("South Carolina", "SC"),
    ("South Dakota", "SD"),
    ("Tennessee", "TN"),
    ("Texas", "TX"),
    ("Utah", "UT"),
    ("Vermont", "VT"),
    ("Virginia", "VA"),
    ("Washington", "WA"),
    ("West Virginia", "WV"),
    ("Wisconsin", "WI"),
    ("Wyoming", "WY"),
];

/// The state token of the election, or `"Unknown State"`.
pub fn state_of(candidate: &CandidateResult) -> String {
    candidate
        .scope(ScopeType::State)
        .unwrap_or(UNKNOWN_STATE)
        .to_string()
}

/// The district token of the election, or `"At-Large"`.
pub fn district_of(candidate: &CandidateResult) -> String {
    candidate
        .scope(ScopeType::District)
        .unwrap_or(AT_LARGE)
        .to_string()
}

fn lookup(token: &str) -> Option<(&'static str, &'static str)> {
    STATES
        .iter()
        .find(|(name, abbr)| *name == token || *abbr == token)
        .copied()
}

/// Resolves a full name or an abbreviation to the full state name.
pub fn state_full_name(token: &str) -> Option<&'static str> {
    lookup(token).map(|(name, _)| name)
}

/// Resolves a full name or an abbreviation to the postal abbreviation.
pub fn state_abbreviation(token: &str) -> Option<&'static str> {
    lookup(token).map(|(_, abbr)| abbr)
}

/// Renders a raw state token as `"{FullName} - {Abbreviation}"`.
///
/// Tokens that are neither a known name nor a known abbreviation (including
/// the `"Unknown State"` fallback) are returned unchanged. Only meant to be
/// called on raw tokens, not on its own output.
pub fn format_state_display_name(token: &str) -> String {
    match lookup(token) {
        Some((name, abbr)) => format!("{} - {}", name, abbr),
        None => token.to_string(),
    }
}

/// Renders a district code for display. At-large codes end with `AL`.
pub fn format_district_display(code: &str) -> String {
    if code.ends_with(AT_LARGE_SUFFIX) {
        "District At-Large".to_string()
    } else {
        format!("District {}", code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ElectionContext, GeographyScope};

    fn candidate(scopes: Vec<(ScopeType, &str)>) -> CandidateResult {
        CandidateResult {
            id: 7,
            first_name: "Jo".to_string(),
            last_name: "Doe".to_string(),
            party: None,
            election: ElectionContext {
                election_type: Some("Congressional".to_string()),
                cycle_year: Some(2024),
                cycle_date: None,
                scopes: scopes
                    .into_iter()
                    .map(|(scope_type, id)| GeographyScope {
                        scope_type,
                        scope_id: id.to_string(),
                    })
                    .collect(),
            },
        }
    }

    #[test]
    fn state_and_district_fallbacks() {
        let c = candidate(vec![(ScopeType::National, "US")]);
        assert_eq!(state_of(&c), "Unknown State");
        assert_eq!(district_of(&c), "At-Large");
    }

    #[test]
    fn first_scope_wins() {
        let c = candidate(vec![
            (ScopeType::County, "Travis"),
            (ScopeType::State, "TX"),
            (ScopeType::District, "35"),
            (ScopeType::State, "OK"),
            (ScopeType::District, "2"),
        ]);
        assert_eq!(state_of(&c), "TX");
        assert_eq!(district_of(&c), "35");
    }

    #[test]
    fn state_names_both_ways() {
        assert_eq!(format_state_display_name("CA"), "California - CA");
        assert_eq!(format_state_display_name("California"), "California - CA");
        assert_eq!(
            format_state_display_name("DC"),
            "District of Columbia - DC"
        );
        assert_eq!(format_state_display_name("Unknown State"), "Unknown State");
        assert_eq!(format_state_display_name("Atlantis"), "Atlantis");
        assert_eq!(state_full_name("NY"), Some("New York"));
        assert_eq!(state_abbreviation("New York"), Some("NY"));
        assert_eq!(state_full_name("ny"), None);
    }

    #[test]
    fn district_display() {
        assert_eq!(format_district_display("AKAL"), "District At-Large");
        assert_eq!(format_district_display("12"), "District 12");
        assert_eq!(format_district_display("CA12"), "District CA12");
        // The fallback token does not carry the suffix.
        assert_eq!(format_district_display(AT_LARGE), "District At-Large");
    }

    #[test]
    fn registry_is_a_bijection() {
        for (name, abbr) in STATES.iter() {
            assert_eq!(state_full_name(abbr), Some(*name));
            assert_eq!(state_abbreviation(name), Some(*abbr));
        }
    }
}
