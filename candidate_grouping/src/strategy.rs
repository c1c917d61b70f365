use log::debug;

use crate::config::{FacetState, GroupingRules, GroupingStrategy};

/// Chooses how to group the results for the facets currently selected.
///
/// - no facet: nothing to group
/// - one facet: election type alone groups by state (or by state and district
///   for district-scoped types), any other facet alone groups by election type
/// - two facets: election type with state groups by district, election type
///   with party or search behaves as election type alone, other pairs group by
///   election type
/// - three or more: a single flat list
pub fn select_strategy(facets: &FacetState, rules: &GroupingRules) -> GroupingStrategy {
    let search = facets.is_search_active();
    let state = facets.is_state_active();
    let party = facets.is_party_active();
    let district_scoped = facets
        .active_election_type()
        .map(|t| rules.is_district_scoped(t));

    // By state, or by state then district for district-scoped types.
    let by_type_geography = |scoped: bool| {
        if scoped {
            GroupingStrategy::ByStateAndDistrict
        } else {
            GroupingStrategy::ByState
        }
    };

    let res = match facets.active_count() {
        0 => GroupingStrategy::None,
        1 => match district_scoped {
            Some(scoped) => by_type_geography(scoped),
            None => GroupingStrategy::ByElectionType,
        },
        2 => match district_scoped {
            Some(_) if state => GroupingStrategy::ByDistrict,
            Some(scoped) if party || search => by_type_geography(scoped),
            _ => GroupingStrategy::ByElectionType,
        },
        _ => GroupingStrategy::FlatList,
    };
    debug!("select_strategy: facets {:?} -> {:?}", facets, res);
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use GroupingStrategy::{ByDistrict, ByElectionType, ByState, ByStateAndDistrict, FlatList};

    fn facets(search: bool, state: bool, election_type: Option<&str>, party: bool) -> FacetState {
        FacetState {
            search: if search { Some("smith".to_string()) } else { None },
            state: if state { Some("CA".to_string()) } else { None },
            election_type: election_type.map(|s| s.to_string()),
            party: if party {
                Some("Green".to_string())
            } else {
                None
            },
        }
    }

    fn check(search: bool, state: bool, et: Option<&str>, party: bool, expected: GroupingStrategy) {
        let rules = GroupingRules::default_rules();
        assert_eq!(
            select_strategy(&facets(search, state, et, party), &rules),
            expected,
            "search={} state={} election_type={:?} party={}",
            search,
            state,
            et,
            party
        );
    }

    #[test]
    fn truth_table_non_district_type() {
        let s = Some("Senate");
        // (search, state, election type, party)
        check(false, false, None, false, GroupingStrategy::None);
        check(true, false, None, false, ByElectionType);
        check(false, true, None, false, ByElectionType);
        check(false, false, s, false, ByState);
        check(false, false, None, true, ByElectionType);
        check(true, true, None, false, ByElectionType);
        check(true, false, s, false, ByState);
        check(true, false, None, true, ByElectionType);
        check(false, true, s, false, ByDistrict);
        check(false, true, None, true, ByElectionType);
        check(false, false, s, true, ByState);
        check(true, true, s, false, FlatList);
        check(true, true, None, true, FlatList);
        check(true, false, s, true, FlatList);
        check(false, true, s, true, FlatList);
        check(true, true, s, true, FlatList);
    }

    #[test]
    fn truth_table_congressional() {
        let c = Some("Congressional");
        check(false, false, c, false, ByStateAndDistrict);
        check(true, false, c, false, ByStateAndDistrict);
        check(false, true, c, false, ByDistrict);
        check(false, false, c, true, ByStateAndDistrict);
        check(true, true, c, false, FlatList);
        check(true, false, c, true, FlatList);
        check(false, true, c, true, FlatList);
        check(true, true, c, true, FlatList);
    }

    #[test]
    fn blank_election_type_is_not_active() {
        check(false, false, Some("   "), false, GroupingStrategy::None);
        check(false, true, Some(""), false, ByElectionType);
    }

    #[test]
    fn election_type_must_match_exactly() {
        check(false, false, Some(" Congressional "), false, ByState);
        check(false, false, Some("congressional"), true, ByState);
        check(false, false, Some("Congressional"), false, ByStateAndDistrict);
    }

    #[test]
    fn district_scoping_follows_rules() {
        let mut rules = GroupingRules::default_rules();
        rules.district_scoped_types = vec!["State Legislature".to_string()];
        assert_eq!(
            select_strategy(&facets(false, false, Some("State Legislature"), false), &rules),
            ByStateAndDistrict
        );
        assert_eq!(
            select_strategy(&facets(false, false, Some("Congressional"), false), &rules),
            ByState
        );
    }
}
