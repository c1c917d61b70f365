// ********* Input data structures ***********

use std::error::Error;
use std::fmt::Display;

/// The kinds of geography an election can be scoped to.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum ScopeType {
    National,
    State,
    County,
    City,
    District,
}

#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct GeographyScope {
    pub scope_type: ScopeType,
    pub scope_id: String,
}

/// The election a candidate is running in.
///
/// There should be at most one STATE scope and one DISTRICT scope. If more are
/// present, only the first one of each kind is looked at.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct ElectionContext {
    pub election_type: Option<String>,
    pub cycle_year: Option<i32>,
    pub cycle_date: Option<String>,
    pub scopes: Vec<GeographyScope>,
}

/// One row returned by the candidate directory.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct CandidateResult {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub party: Option<String>,
    pub election: ElectionContext,
}

pub const INDEPENDENT: &str = "Independent";
pub const OTHER_ELECTION_TYPE: &str = "Other";

impl CandidateResult {
    pub fn party_name(&self) -> &str {
        match self.party.as_deref() {
            Some(p) if !p.is_empty() => p,
            _ => INDEPENDENT,
        }
    }

    pub fn election_type_name(&self) -> &str {
        match self.election.election_type.as_deref() {
            Some(t) if !t.is_empty() => t,
            _ => OTHER_ELECTION_TYPE,
        }
    }

    pub fn full_name(&self) -> String {
        if self.first_name.is_empty() {
            self.last_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }

    /// The first scope of the given type, if any.
    pub fn scope(&self, scope_type: ScopeType) -> Option<&str> {
        self.election
            .scopes
            .iter()
            .find(|s| s.scope_type == scope_type)
            .map(|s| s.scope_id.as_str())
    }
}

/// The search facets currently selected by the user.
///
/// A facet is active when it is set to something other than blank text.
#[derive(Eq, PartialEq, Debug, Clone, Default, Hash)]
pub struct FacetState {
    pub search: Option<String>,
    pub state: Option<String>,
    pub election_type: Option<String>,
    pub party: Option<String>,
}

fn is_active(facet: &Option<String>) -> bool {
    facet.as_deref().map(|s| !s.trim().is_empty()).unwrap_or(false)
}

impl FacetState {
    pub fn is_search_active(&self) -> bool {
        is_active(&self.search)
    }

    pub fn is_state_active(&self) -> bool {
        is_active(&self.state)
    }

    pub fn is_election_type_active(&self) -> bool {
        is_active(&self.election_type)
    }

    pub fn is_party_active(&self) -> bool {
        is_active(&self.party)
    }

    pub fn active_count(&self) -> usize {
        [
            self.is_search_active(),
            self.is_state_active(),
            self.is_election_type_active(),
            self.is_party_active(),
        ]
        .iter()
        .filter(|b| **b)
        .count()
    }

    /// The election type as selected, when that facet is active.
    pub fn active_election_type(&self) -> Option<&str> {
        if self.is_election_type_active() {
            self.election_type.as_deref()
        } else {
            None
        }
    }
}

// ******** Output data structures *********

/// How a result set gets partitioned for display.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum GroupingStrategy {
    /// Nothing selected: nothing to show.
    None,
    ByElectionType,
    ByState,
    ByDistrict,
    ByStateAndDistrict,
    /// Too many facets selected: everything in one list.
    FlatList,
}

impl GroupingStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            GroupingStrategy::None => "none",
            GroupingStrategy::ByElectionType => "byElectionType",
            GroupingStrategy::ByState => "byState",
            GroupingStrategy::ByDistrict => "byDistrict",
            GroupingStrategy::ByStateAndDistrict => "byStateAndDistrict",
            GroupingStrategy::FlatList => "flatList",
        }
    }
}

/// A display section.
///
/// When `sub_groups` is present, `candidates` holds the whole (unsorted) set
/// across the sub groups and is only meant for counting.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Group {
    pub label: String,
    pub candidates: Vec<CandidateResult>,
    pub sub_groups: Option<Vec<Group>>,
}

impl Group {
    pub fn flat(label: String, candidates: Vec<CandidateResult>) -> Group {
        Group {
            label,
            candidates,
            sub_groups: None,
        }
    }

    pub fn is_hierarchical(&self) -> bool {
        self.sub_groups.is_some()
    }
}

/// Errors raised while assembling the engine inputs.
///
/// The grouping itself never fails.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum GroupingErrors {
    DuplicateCandidate(u64),
    MissingCandidateName(u64),
}

impl Error for GroupingErrors {}

impl Display for GroupingErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupingErrors::DuplicateCandidate(id) => {
                write!(f, "candidate {} appears more than once", id)
            }
            GroupingErrors::MissingCandidateName(id) => {
                write!(f, "candidate {} has no last name", id)
            }
        }
    }
}

// ********* Configuration **********

/// The order of candidates inside a leaf group.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum SortKey {
    /// Last name, then first name.
    Name,
    /// Election type name.
    ElectionType,
    /// Historically the same comparison as `ElectionType`: the state sort mode
    /// never looked at the state. Kept as is for compatibility; see
    /// `ResolvedState` for a comparison that does.
    State,
    /// Deviation from the historical `State` mode: full state name, then name.
    ResolvedState,
}

impl SortKey {
    pub fn parse(s: &str) -> Option<SortKey> {
        match s {
            "name" => Some(SortKey::Name),
            "election_type" | "electionType" => Some(SortKey::ElectionType),
            "state" => Some(SortKey::State),
            "resolved_state" | "resolvedState" => Some(SortKey::ResolvedState),
            _ => None,
        }
    }
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct GroupingRules {
    /// Election types whose candidates are shown per state, then per district.
    pub district_scoped_types: Vec<String>,
    /// Order of the top-level sections when grouping by election type.
    /// Types missing from this list come afterwards, alphabetically.
    pub type_priority: Vec<String>,
    pub sort_key: SortKey,
}

pub const CONGRESSIONAL: &str = "Congressional";

pub const DEFAULT_TYPE_PRIORITY: [&str; 6] = [
    "Presidential",
    "Senate",
    "Gubernatorial",
    "Congressional",
    "State Legislature",
    "Local",
];

impl GroupingRules {
    pub fn default_rules() -> GroupingRules {
        GroupingRules {
            district_scoped_types: vec![CONGRESSIONAL.to_string()],
            type_priority: DEFAULT_TYPE_PRIORITY.iter().map(|s| s.to_string()).collect(),
            sort_key: SortKey::Name,
        }
    }

    pub fn is_district_scoped(&self, election_type: &str) -> bool {
        self.district_scoped_types.iter().any(|t| t == election_type)
    }

    /// Position of an election type in the priority list.
    pub fn type_rank(&self, election_type: &str) -> Option<usize> {
        self.type_priority.iter().position(|t| t == election_type)
    }
}

impl Default for GroupingRules {
    fn default() -> Self {
        GroupingRules::default_rules()
    }
}
