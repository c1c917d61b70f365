mod collapse;
mod config;
mod geography;
mod ordering;
mod strategy;

pub mod builder;
pub mod manual;

use log::{debug, info};

use std::collections::HashMap;

pub use crate::collapse::CollapseSet;
pub use crate::config::*;
pub use crate::geography::{
    district_of, format_district_display, format_state_display_name, state_abbreviation,
    state_full_name, state_of, AT_LARGE, UNKNOWN_STATE,
};
pub use crate::ordering::{
    compare_candidates, compare_districts, compare_election_types, compare_states,
    sort_candidates,
};
pub use crate::strategy::select_strategy;

pub const ALL_CANDIDATES: &str = "All Candidates";

/// The grouping chosen for a set of facets, and the groups it produced.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct GroupingOutcome {
    pub strategy: GroupingStrategy,
    pub groups: Vec<Group>,
}

/// Splits the candidates by key. Partitions are in order of first appearance
/// and candidates keep their input order inside each partition.
fn partition_by<F>(candidates: &[CandidateResult], key: F) -> Vec<(String, Vec<CandidateResult>)>
where
    F: Fn(&CandidateResult) -> String,
{
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut res: Vec<(String, Vec<CandidateResult>)> = Vec::new();
    for c in candidates.iter() {
        let k = key(c);
        match positions.get(&k) {
            Some(idx) => res[*idx].1.push(c.clone()),
            None => {
                positions.insert(k.clone(), res.len());
                res.push((k, vec![c.clone()]));
            }
        }
    }
    res
}

fn sorted_group(label: String, mut candidates: Vec<CandidateResult>, rules: &GroupingRules) -> Group {
    sort_candidates(&mut candidates, rules.sort_key);
    Group::flat(label, candidates)
}

fn state_groups(candidates: &[CandidateResult], rules: &GroupingRules) -> Vec<Group> {
    let mut parts = partition_by(candidates, state_of);
    parts.sort_by(|a, b| compare_states(&a.0, &b.0));
    parts
        .into_iter()
        .map(|(state, cs)| sorted_group(format_state_display_name(&state), cs, rules))
        .collect()
}

fn district_groups(candidates: &[CandidateResult], rules: &GroupingRules) -> Vec<Group> {
    let mut parts = partition_by(candidates, district_of);
    parts.sort_by(|a, b| compare_districts(&a.0, &b.0));
    parts
        .into_iter()
        .map(|(district, cs)| sorted_group(format!("District {}", district), cs, rules))
        .collect()
}

/// One leaf group per (state, district) pair, states first then districts.
fn state_and_district_groups(candidates: &[CandidateResult], rules: &GroupingRules) -> Vec<Group> {
    let mut states = partition_by(candidates, state_of);
    states.sort_by(|a, b| compare_states(&a.0, &b.0));
    let mut res: Vec<Group> = Vec::new();
    for (state, state_candidates) in states {
        let state_label = format_state_display_name(&state);
        let mut districts = partition_by(&state_candidates, district_of);
        districts.sort_by(|a, b| compare_districts(&a.0, &b.0));
        for (district, cs) in districts {
            let label = format!("{} - District {}", state_label, district);
            res.push(sorted_group(label, cs, rules));
        }
    }
    res
}

fn election_type_groups(candidates: &[CandidateResult], rules: &GroupingRules) -> Vec<Group> {
    let mut parts = partition_by(candidates, |c| c.election_type_name().to_string());
    parts.sort_by(|a, b| compare_election_types(&a.0, &b.0, rules));
    parts
        .into_iter()
        .map(|(election_type, cs)| {
            if rules.is_district_scoped(&election_type) {
                let sub_groups = state_and_district_groups(&cs, rules);
                Group {
                    label: election_type,
                    candidates: cs,
                    sub_groups: Some(sub_groups),
                }
            } else {
                sorted_group(election_type, cs, rules)
            }
        })
        .collect()
}

/// Partitions and orders the candidates following a grouping strategy.
///
/// The candidates are expected to already match the active facets. An empty
/// list of candidates always produces no groups.
pub fn build_groups(
    candidates: &[CandidateResult],
    strategy: GroupingStrategy,
    rules: &GroupingRules,
) -> Vec<Group> {
    if candidates.is_empty() {
        return Vec::new();
    }
    match strategy {
        GroupingStrategy::None => Vec::new(),
        GroupingStrategy::FlatList => vec![sorted_group(
            ALL_CANDIDATES.to_string(),
            candidates.to_vec(),
            rules,
        )],
        GroupingStrategy::ByState => state_groups(candidates, rules),
        GroupingStrategy::ByDistrict => district_groups(candidates, rules),
        GroupingStrategy::ByStateAndDistrict => state_and_district_groups(candidates, rules),
        GroupingStrategy::ByElectionType => election_type_groups(candidates, rules),
    }
}

/// Selects the strategy for the facets and builds the groups.
///
/// Arguments:
/// * `candidates` the results returned by the directory for these facets
/// * `facets` the facets currently selected
/// * `rules` the grouping policy
pub fn run_grouping(
    candidates: &[CandidateResult],
    facets: &FacetState,
    rules: &GroupingRules,
) -> GroupingOutcome {
    let strategy = select_strategy(facets, rules);
    info!(
        "run_grouping: {} candidates, {} active facets, strategy {:?}",
        candidates.len(),
        facets.active_count(),
        strategy
    );
    let groups = build_groups(candidates, strategy, rules);
    for g in groups.iter() {
        debug!(
            "run_grouping: group {:?}: {} candidates, {} sub groups",
            g.label,
            g.candidates.len(),
            g.sub_groups.as_ref().map(|sg| sg.len()).unwrap_or(0)
        );
    }
    info!("run_grouping: {} groups", groups.len());
    GroupingOutcome { strategy, groups }
}

/// The groups candidates are actually displayed in: sub groups of a
/// hierarchical group, the group itself otherwise.
pub fn leaf_groups(groups: &[Group]) -> Vec<&Group> {
    let mut res: Vec<&Group> = Vec::new();
    for g in groups.iter() {
        match &g.sub_groups {
            Some(sub_groups) => res.extend(leaf_groups(sub_groups)),
            None => res.push(g),
        }
    }
    res
}

/// Number of candidates across the top-level groups.
pub fn total_candidates(groups: &[Group]) -> usize {
    groups.iter().map(|g| g.candidates.len()).sum()
}

/// A digest of the candidate list. Covers every field, since the groups hold
/// copies of the candidates.
fn fingerprint(candidates: &[CandidateResult]) -> String {
    let mut data = String::new();
    for c in candidates.iter() {
        data.push_str(&format!("{:?}\n", c));
    }
    sha256::digest(data.as_str())
}

#[derive(Eq, PartialEq, Debug, Clone)]
struct CacheKey {
    fingerprint: String,
    facets: FacetState,
    rules: GroupingRules,
}

/// Remembers the last grouping so that asking again with the same candidates,
/// facets and rules does not recompute it.
#[derive(Debug, Default)]
pub struct GroupingCache {
    last: Option<(CacheKey, GroupingOutcome)>,
    hits: u64,
    misses: u64,
}

impl GroupingCache {
    pub fn new() -> GroupingCache {
        GroupingCache::default()
    }

    pub fn get_or_compute(
        &mut self,
        candidates: &[CandidateResult],
        facets: &FacetState,
        rules: &GroupingRules,
    ) -> &GroupingOutcome {
        let key = CacheKey {
            fingerprint: fingerprint(candidates),
            facets: facets.clone(),
            rules: rules.clone(),
        };
        let fresh = matches!(&self.last, Some((k, _)) if *k == key);
        if fresh {
            self.hits += 1;
            debug!("GroupingCache: hit ({} hits)", self.hits);
        } else {
            self.misses += 1;
            debug!("GroupingCache: miss ({} misses)", self.misses);
            self.last = None;
        }
        let (_, outcome) = self
            .last
            .get_or_insert_with(|| (key, run_grouping(candidates, facets, rules)));
        outcome
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn invalidate(&mut self) {
        self.last = None;
    }
}
