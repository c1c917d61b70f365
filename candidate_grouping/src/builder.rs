use std::collections::HashSet;

pub use crate::config::*;
use crate::{run_grouping, GroupingOutcome};

/// A builder for assembling the candidates and facets of one grouping.
///
/// ```
/// use candidate_grouping::builder::Builder;
/// use candidate_grouping::{FacetState, GroupingRules, GroupingStrategy};
/// # use candidate_grouping::GroupingErrors;
///
/// let mut builder = Builder::new(&GroupingRules::default_rules())?
///     .facets(FacetState {
///         party: Some("Green".to_string()),
///         ..FacetState::default()
///     })?;
///
/// builder.add_candidate_simple(1, "Ada", "Byron", "Senate", "NY")?;
/// builder.add_candidate_simple(2, "Tim", "Burr", "Local", "NY")?;
///
/// let outcome = builder.run();
/// assert_eq!(outcome.strategy, GroupingStrategy::ByElectionType);
/// assert_eq!(outcome.groups.len(), 2);
///
/// # Ok::<(), GroupingErrors>(())
/// ```
pub struct Builder {
    pub(crate) _rules: GroupingRules,
    pub(crate) _facets: FacetState,
    pub(crate) _candidates: Vec<CandidateResult>,
    _ids: HashSet<u64>,
}

impl Builder {
    pub fn new(rules: &GroupingRules) -> Result<Builder, GroupingErrors> {
        Ok(Builder {
            _rules: rules.clone(),
            _facets: FacetState::default(),
            _candidates: Vec::new(),
            _ids: HashSet::new(),
        })
    }

    pub fn facets(self, facets: FacetState) -> Result<Builder, GroupingErrors> {
        Ok(Builder {
            _facets: facets,
            ..self
        })
    }

    /// Adds a candidate running in a statewide election.
    ///
    /// It is the simplest use case for most cases.
    pub fn add_candidate_simple(
        &mut self,
        id: u64,
        first_name: &str,
        last_name: &str,
        election_type: &str,
        state: &str,
    ) -> Result<(), GroupingErrors> {
        self.add_candidate(CandidateResult {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            party: None,
            election: ElectionContext {
                election_type: Some(election_type.to_string()),
                cycle_year: None,
                cycle_date: None,
                scopes: vec![GeographyScope {
                    scope_type: ScopeType::State,
                    scope_id: state.to_string(),
                }],
            },
        })
    }

    /// Adds a candidate record as returned by the directory.
    ///
    /// A candidate id may only be added once, and a candidate needs at least a
    /// last name to be sorted and displayed.
    pub fn add_candidate(&mut self, candidate: CandidateResult) -> Result<(), GroupingErrors> {
        if candidate.last_name.trim().is_empty() {
            return Err(GroupingErrors::MissingCandidateName(candidate.id));
        }
        if !self._ids.insert(candidate.id) {
            return Err(GroupingErrors::DuplicateCandidate(candidate.id));
        }
        self._candidates.push(candidate);
        Ok(())
    }

    pub fn candidates(&self) -> &[CandidateResult] {
        &self._candidates
    }

    pub fn run(&self) -> GroupingOutcome {
        run_grouping(&self._candidates, &self._facets, &self._rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_duplicates_and_blank_names() {
        let mut b = Builder::new(&GroupingRules::default_rules()).unwrap();
        b.add_candidate_simple(1, "Ada", "Byron", "Senate", "NY")
            .unwrap();
        assert_eq!(
            b.add_candidate_simple(1, "Ada", "King", "Senate", "NY"),
            Err(GroupingErrors::DuplicateCandidate(1))
        );
        assert_eq!(
            b.add_candidate_simple(2, "Ada", " ", "Senate", "NY"),
            Err(GroupingErrors::MissingCandidateName(2))
        );
        assert_eq!(b.candidates().len(), 1);
    }

    #[test]
    fn runs_with_facets() {
        let mut b = Builder::new(&GroupingRules::default_rules())
            .unwrap()
            .facets(FacetState {
                election_type: Some("Senate".to_string()),
                ..FacetState::default()
            })
            .unwrap();
        b.add_candidate_simple(1, "Ada", "Byron", "Senate", "NY")
            .unwrap();
        b.add_candidate_simple(2, "Bo", "Chen", "Senate", "Maine")
            .unwrap();
        let outcome = b.run();
        assert_eq!(outcome.strategy, GroupingStrategy::ByState);
        let labels: Vec<&str> = outcome.groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["Maine - ME", "New York - NY"]);
    }
}
