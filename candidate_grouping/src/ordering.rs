use std::cmp::Ordering;

use crate::config::{CandidateResult, GroupingRules, SortKey};
use crate::geography::{state_full_name, state_of};

/// The key states are sorted by: the full name when the token is known
/// (so "CA" and "California" sort together), the raw token otherwise.
fn state_sort_name(token: &str) -> &str {
    state_full_name(token).unwrap_or(token)
}

/// Orders state tokens by full state name. Ties are broken on the raw token.
pub fn compare_states(a: &str, b: &str) -> Ordering {
    state_sort_name(a)
        .cmp(state_sort_name(b))
        .then_with(|| a.cmp(b))
}

/// Orders district tokens numerically when both are numbers, as text when
/// both are codes. Numbered districts come before all other codes.
pub fn compare_districts(a: &str, b: &str) -> Ordering {
    match (a.parse::<i64>().ok(), b.parse::<i64>().ok()) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Orders election types by the priority list of the rules. Types not in the
/// list come after all the listed ones, alphabetically.
pub fn compare_election_types(a: &str, b: &str, rules: &GroupingRules) -> Ordering {
    match (rules.type_rank(a), rules.type_rank(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

fn compare_names(a: &CandidateResult, b: &CandidateResult) -> Ordering {
    a.last_name
        .cmp(&b.last_name)
        .then_with(|| a.first_name.cmp(&b.first_name))
}

/// Orders two candidates of the same leaf group.
pub fn compare_candidates(a: &CandidateResult, b: &CandidateResult, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => compare_names(a, b),
        // The state mode has always compared election types.
        SortKey::ElectionType | SortKey::State => {
            a.election_type_name().cmp(b.election_type_name())
        }
        SortKey::ResolvedState => compare_states(&state_of(a), &state_of(b))
            .then_with(|| compare_names(a, b)),
    }
}

/// Sorts the candidates of a leaf group in place. The sort is stable.
pub fn sort_candidates(candidates: &mut [CandidateResult], key: SortKey) {
    candidates.sort_by(|a, b| compare_candidates(a, b, key));
}
