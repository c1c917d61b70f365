use crate::grouping::*;
use snafu::prelude::*;

use serde::{Deserialize, Serialize};

// Records as served by the candidate directory endpoint.

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryNamed {
    pub name: String,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryElectionCycle {
    pub year: Option<i32>,
    pub date: Option<String>,
}

#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryScope {
    #[serde(rename = "scopeType")]
    pub scope_type: String,
    // Numbered districts are sometimes served as numbers.
    #[serde(rename = "scopeId")]
    pub scope_id: JSValue,
}

#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryElection {
    #[serde(rename = "electionType")]
    pub election_type: Option<DirectoryNamed>,
    #[serde(rename = "electionCycle")]
    pub election_cycle: Option<DirectoryElectionCycle>,
    #[serde(rename = "geographyScopes", default)]
    pub geography_scopes: Vec<DirectoryScope>,
}

#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryCandidate {
    pub id: u64,
    #[serde(rename = "firstName", default)]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub party: Option<DirectoryNamed>,
    pub election: DirectoryElection,
}

/// Either a bare list or one page of results.
#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DirectoryResponse {
    Page {
        count: Option<u64>,
        results: Vec<DirectoryCandidate>,
    },
    List(Vec<DirectoryCandidate>),
}

fn read_scope_type(s: &str, candidate_id: u64) -> GroupingCliResult<ScopeType> {
    match s {
        "NATIONAL" => Ok(ScopeType::National),
        "STATE" => Ok(ScopeType::State),
        "COUNTY" => Ok(ScopeType::County),
        "CITY" => Ok(ScopeType::City),
        "DISTRICT" => Ok(ScopeType::District),
        _ => whatever!(
            "Unknown scope type {:?} for candidate {}",
            s,
            candidate_id
        ),
    }
}

fn read_scope_id(x: &JSValue, candidate_id: u64) -> GroupingCliResult<String> {
    match x {
        JSValue::String(s) => Ok(s.clone()),
        JSValue::Number(n) => Ok(n.to_string()),
        _ => whatever!(
            "Cannot read scope id {:?} for candidate {}",
            x,
            candidate_id
        ),
    }
}

fn to_candidate(dc: DirectoryCandidate) -> GroupingCliResult<CandidateResult> {
    let mut scopes: Vec<GeographyScope> = Vec::new();
    for s in dc.election.geography_scopes.iter() {
        scopes.push(GeographyScope {
            scope_type: read_scope_type(&s.scope_type, dc.id)?,
            scope_id: read_scope_id(&s.scope_id, dc.id)?,
        });
    }
    let cycle = dc.election.election_cycle;
    Ok(CandidateResult {
        id: dc.id,
        first_name: dc.first_name,
        last_name: dc.last_name,
        party: dc.party.map(|p| p.name),
        election: ElectionContext {
            election_type: dc.election.election_type.map(|t| t.name),
            cycle_year: cycle.as_ref().and_then(|c| c.year),
            cycle_date: cycle.and_then(|c| c.date),
            scopes,
        },
    })
}

pub fn parse_candidates(contents: &str, path: &str) -> GroupingCliResult<Vec<CandidateResult>> {
    let response: DirectoryResponse =
        serde_json::from_str(contents).context(ParsingJsonSnafu { path })?;
    let records = match response {
        DirectoryResponse::Page { count, results } => {
            if let Some(total) = count {
                if total as usize > results.len() {
                    warn!(
                        "{}: only {} of {} results present, grouping this page only",
                        path,
                        results.len(),
                        total
                    );
                }
            }
            results
        }
        DirectoryResponse::List(l) => l,
    };
    let mut res: Vec<CandidateResult> = Vec::new();
    for dc in records {
        debug!("parse_candidates: {:?}", dc);
        res.push(to_candidate(dc)?);
    }
    Ok(res)
}

pub fn read_candidates(path: &str) -> GroupingCliResult<Vec<CandidateResult>> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    parse_candidates(&contents, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_plain_list() {
        let js = r#"[
            {"id": 3, "firstName": "Ana", "lastName": "Nguyen", "party": null,
             "election": {"electionType": {"name": "Congressional"},
                          "electionCycle": {"year": 2024, "date": "2024-11-05"},
                          "geographyScopes": [{"scopeType": "STATE", "scopeId": "CA"},
                                              {"scopeType": "DISTRICT", "scopeId": 12}]}}
        ]"#;
        let cs = parse_candidates(js, "inline").unwrap();
        assert_eq!(cs.len(), 1);
        assert_eq!(cs[0].party_name(), "Independent");
        assert_eq!(cs[0].election.cycle_year, Some(2024));
        assert_eq!(state_of(&cs[0]), "CA");
        assert_eq!(district_of(&cs[0]), "12");
    }

    #[test]
    fn reads_page() {
        let js = r#"{"count": 40, "results": [
            {"id": 1, "lastName": "Moss", "party": {"name": "Green"},
             "election": {"electionType": null}}
        ]}"#;
        let cs = parse_candidates(js, "inline").unwrap();
        assert_eq!(cs[0].first_name, "");
        assert_eq!(cs[0].party_name(), "Green");
        assert_eq!(cs[0].election_type_name(), "Other");
        assert_eq!(state_of(&cs[0]), "Unknown State");
    }

    #[test]
    fn rejects_unknown_scope() {
        let js = r#"[{"id": 9, "lastName": "X",
            "election": {"geographyScopes": [{"scopeType": "PLANET", "scopeId": "Mars"}]}}]"#;
        let res = parse_candidates(js, "inline");
        assert!(matches!(res, Err(GroupingCliError::Whatever { .. })));
    }
}
