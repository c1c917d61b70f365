use crate::grouping::*;
use snafu::prelude::*;

use serde::{Deserialize, Serialize};
use serde_json::Value as JSValue;

#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct FacetSettings {
    pub search: Option<String>,
    pub state: Option<String>,
    #[serde(rename = "electionType")]
    pub election_type: Option<String>,
    pub party: Option<String>,
}

#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupingSettings {
    #[serde(rename = "candidateFile")]
    pub candidate_file: Option<String>,
    pub facets: Option<FacetSettings>,
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    #[serde(rename = "districtScopedTypes")]
    pub district_scoped_types: Option<Vec<String>>,
    #[serde(rename = "typePriority")]
    pub type_priority: Option<Vec<String>>,
    pub collapsed: Option<Vec<String>>,
}

impl GroupingSettings {
    pub fn facet_state(&self) -> FacetState {
        match &self.facets {
            Some(f) => FacetState {
                search: f.search.clone(),
                state: f.state.clone(),
                election_type: f.election_type.clone(),
                party: f.party.clone(),
            },
            None => FacetState::default(),
        }
    }
}

pub fn read_settings(path: &str) -> GroupingCliResult<GroupingSettings> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let settings: GroupingSettings =
        serde_json::from_str(&contents).context(ParsingJsonSnafu { path })?;
    debug!("read_settings: {:?}", settings);
    Ok(settings)
}

pub fn read_reference(path: &str) -> GroupingCliResult<JSValue> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let js: JSValue = serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu { path })?;
    Ok(js)
}
