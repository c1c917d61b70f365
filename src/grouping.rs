use log::{debug, info, warn};

use candidate_grouping::builder::Builder;
use candidate_grouping::*;
use snafu::{prelude::*, Snafu};

use std::fs;
use std::path::Path;

use serde_json::json;
use serde_json::Value as JSValue;
use text_diff::print_diff;

use crate::args::Args;
use crate::grouping::config_reader::*;
use crate::grouping::io_directory::read_candidates;

pub mod config_reader;
pub mod io_directory;

#[derive(Debug, Snafu)]
pub enum GroupingCliError {
    #[snafu(display("Error opening file {path}"))]
    OpeningJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing the JSON content of {path}"))]
    ParsingJson {
        source: serde_json::Error,
        path: String,
    },
    #[snafu(display("Error rendering the groups as JSON"))]
    RenderingJson { source: serde_json::Error },
    #[snafu(display("Error writing the groups to {path}"))]
    WritingOutput {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("No candidate file: use --input or set candidateFile in the configuration"))]
    MissingCandidateFile {},
    #[snafu(display("The configuration file {path} has no parent directory"))]
    MissingParentDir { path: String },
    #[snafu(display(
        "Unknown sort mode {value:?}: expected name, electionType, state or resolvedState"
    ))]
    UnknownSortMode { value: String },
    #[snafu(display("Invalid candidate list in {path}: {source}"))]
    InvalidCandidates {
        source: GroupingErrors,
        path: String,
    },
    #[snafu(display("Difference detected between the computed groups and the reference {path}"))]
    ReferenceMismatch { path: String },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type GroupingCliResult<T> = Result<T, GroupingCliError>;

/// Everything a run needs, once the command line and the configuration file
/// have been merged.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub input_path: String,
    pub facets: FacetState,
    pub rules: GroupingRules,
    pub collapsed: CollapseSet,
}

fn candidate_to_json(c: &CandidateResult) -> JSValue {
    json!({
        "id": c.id,
        "name": c.full_name(),
        "party": c.party_name(),
        "electionType": c.election_type_name(),
        "state": state_of(c),
        "district": district_of(c),
    })
}

fn group_to_json(g: &Group, collapsed: &CollapseSet) -> JSValue {
    let candidates: Vec<JSValue> = g.candidates.iter().map(candidate_to_json).collect();
    let mut js = json!({
        "label": g.label,
        "count": g.candidates.len(),
        "collapsed": collapsed.is_collapsed(&g.label),
        "candidates": candidates,
    });
    if let Some(sub_groups) = &g.sub_groups {
        let sub_js: Vec<JSValue> = sub_groups
            .iter()
            .map(|sg| group_to_json(sg, collapsed))
            .collect();
        js["subGroups"] = JSValue::Array(sub_js);
    }
    js
}

fn build_summary_js(outcome: &GroupingOutcome, collapsed: &CollapseSet) -> JSValue {
    let groups: Vec<JSValue> = outcome
        .groups
        .iter()
        .map(|g| group_to_json(g, collapsed))
        .collect();
    json!({
        "strategy": outcome.strategy.name(),
        "groups": groups,
    })
}

fn parse_sort_key(value: &str) -> GroupingCliResult<SortKey> {
    SortKey::parse(value).context(UnknownSortModeSnafu { value })
}

/// Merges the command line arguments with the optional configuration file.
pub fn resolve_options(args: &Args) -> GroupingCliResult<RunOptions> {
    let settings = match &args.config {
        Some(config_path) => Some((config_path.clone(), read_settings(config_path)?)),
        None => None,
    };

    let input_path: String = match (&args.input, &settings) {
        (Some(p), _) => p.clone(),
        (None, Some((config_path, s))) => {
            let file = s
                .candidate_file
                .clone()
                .context(MissingCandidateFileSnafu {})?;
            let root_p = Path::new(config_path)
                .parent()
                .context(MissingParentDirSnafu { path: config_path })?;
            root_p.join(file).display().to_string()
        }
        (None, None) => return MissingCandidateFileSnafu {}.fail(),
    };

    let settings: GroupingSettings = settings.map(|(_, s)| s).unwrap_or_default();
    debug!("resolve_options: settings {:?}", settings);

    let mut facets = settings.facet_state();
    let overrides = [
        (&mut facets.search, &args.search),
        (&mut facets.state, &args.state),
        (&mut facets.election_type, &args.election_type),
        (&mut facets.party, &args.party),
    ];
    for (facet, arg) in overrides {
        if arg.is_some() {
            *facet = arg.clone();
        }
    }

    let mut rules = GroupingRules::default_rules();
    if let Some(types) = &settings.district_scoped_types {
        rules.district_scoped_types = types.clone();
    }
    if let Some(priority) = &settings.type_priority {
        rules.type_priority = priority.clone();
    }
    if let Some(sort_by) = args.sort_by.as_ref().or(settings.sort_by.as_ref()) {
        rules.sort_key = parse_sort_key(sort_by)?;
    }

    let mut labels: Vec<String> = settings.collapsed.clone().unwrap_or_default();
    if let Some(extra) = &args.collapsed {
        labels.extend(extra.iter().cloned());
    }
    let collapsed: CollapseSet = labels.iter().collect();

    Ok(RunOptions {
        input_path,
        facets,
        rules,
        collapsed,
    })
}

/// Reads the candidates and computes the groups, as JSON.
pub fn run_grouping_js(options: &RunOptions) -> GroupingCliResult<JSValue> {
    let candidates = read_candidates(&options.input_path)?;
    info!(
        "Read {} candidates from {:?}",
        candidates.len(),
        options.input_path
    );

    let mut builder = Builder::new(&options.rules)
        .and_then(|b| b.facets(options.facets.clone()))
        .context(InvalidCandidatesSnafu {
            path: &options.input_path,
        })?;
    for c in candidates {
        builder.add_candidate(c).context(InvalidCandidatesSnafu {
            path: &options.input_path,
        })?;
    }
    let outcome = builder.run();
    info!(
        "Strategy {}: {} groups",
        outcome.strategy.name(),
        outcome.groups.len()
    );
    let mut known_labels: Vec<&str> = outcome.groups.iter().map(|g| g.label.as_str()).collect();
    known_labels.extend(
        leaf_groups(&outcome.groups)
            .into_iter()
            .map(|g| g.label.as_str()),
    );
    for label in options.collapsed.labels() {
        if !known_labels.contains(&label) {
            debug!("Collapsed label {:?} matches no group", label);
        }
    }
    Ok(build_summary_js(&outcome, &options.collapsed))
}

fn write_output(out: &Option<String>, pretty_js: &str) -> GroupingCliResult<()> {
    match out.as_deref() {
        None | Some("") | Some("stdout") => {
            println!("{}", pretty_js);
        }
        Some(path) => {
            fs::write(path, pretty_js).context(WritingOutputSnafu { path })?;
            info!("Groups written to {:?}", path);
        }
    }
    Ok(())
}

pub fn run(args: &Args) -> GroupingCliResult<()> {
    let options = resolve_options(args)?;
    info!("options: {:?}", options);

    let result_js = run_grouping_js(&options)?;
    let pretty_js = serde_json::to_string_pretty(&result_js).context(RenderingJsonSnafu {})?;
    write_output(&args.out, &pretty_js)?;

    // The reference groups, if provided for comparison
    if let Some(reference_p) = &args.reference {
        let reference = read_reference(reference_p)?;
        let pretty_js_reference =
            serde_json::to_string_pretty(&reference).context(RenderingJsonSnafu {})?;
        if pretty_js_reference != pretty_js {
            warn!("Found differences with the reference file");
            print_diff(pretty_js_reference.as_str(), pretty_js.as_str(), "\n");
            return ReferenceMismatchSnafu { path: reference_p }.fail();
        }
        info!("Groups match the reference {:?}", reference_p);
    }
    Ok(())
}

#[cfg(test)]
pub fn test_wrapper(test_name: &str) {
    let test_dir = option_env!("CANDGROUP_TEST_DIR")
        .unwrap_or(concat!(env!("CARGO_MANIFEST_DIR"), "/testdata"));
    info!("Running test {}", test_name);
    let args = Args {
        config: Some(format!(
            "{}/{}/{}_config.json",
            test_dir, test_name, test_name
        )),
        reference: Some(format!(
            "{}/{}/{}_expected.json",
            test_dir, test_name, test_name
        )),
        ..Args::default()
    };
    if let Err(e) = run(&args) {
        panic!("{}: {}", test_name, e);
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn testdata(path: &str) -> String {
        format!("{}/testdata/{}", env!("CARGO_MANIFEST_DIR"), path)
    }

    #[test]
    fn congressional_districts() {
        test_wrapper("congressional_districts");
    }

    #[test]
    fn election_type_sections() {
        test_wrapper("election_type_sections");
    }

    #[test]
    fn flat_list() {
        test_wrapper("flat_list");
    }

    #[test]
    fn command_line_overrides_config() {
        let args = Args {
            config: Some(testdata(
                "congressional_districts/congressional_districts_config.json",
            )),
            state: Some("CA".to_string()),
            sort_by: Some("resolvedState".to_string()),
            collapsed: Some(vec!["District 4".to_string()]),
            ..Args::default()
        };
        let options = resolve_options(&args).unwrap();
        assert_eq!(options.facets.state.as_deref(), Some("CA"));
        assert_eq!(
            options.facets.election_type.as_deref(),
            Some("Congressional")
        );
        assert_eq!(options.rules.sort_key, SortKey::ResolvedState);
        assert!(options.collapsed.is_collapsed("District 4"));
        assert!(options
            .collapsed
            .is_collapsed("Texas - TX - District 2"));

        let js = run_grouping_js(&options).unwrap();
        assert_eq!(js["strategy"], "byDistrict");
        let labels: Vec<&str> = js["groups"]
            .as_array()
            .unwrap()
            .iter()
            .map(|g| g["label"].as_str().unwrap())
            .collect();
        assert_eq!(labels, vec!["District 2", "District 4", "District 12"]);
        assert_eq!(js["groups"][1]["collapsed"], true);
    }

    #[test]
    fn input_overrides_candidate_file() {
        let args = Args {
            config: Some(testdata(
                "congressional_districts/congressional_districts_config.json",
            )),
            input: Some(testdata("flat_list/candidates.json")),
            ..Args::default()
        };
        let options = resolve_options(&args).unwrap();
        assert_eq!(options.input_path, testdata("flat_list/candidates.json"));
    }

    #[test]
    fn unknown_sort_mode() {
        let args = Args {
            input: Some(testdata("flat_list/candidates.json")),
            sort_by: Some("zip".to_string()),
            ..Args::default()
        };
        assert!(matches!(
            resolve_options(&args),
            Err(GroupingCliError::UnknownSortMode { .. })
        ));
    }

    #[test]
    fn missing_candidate_file() {
        assert!(matches!(
            resolve_options(&Args::default()),
            Err(GroupingCliError::MissingCandidateFile {})
        ));
    }

    #[test]
    fn reference_mismatch_fails() {
        let args = Args {
            input: Some(testdata("flat_list/candidates.json")),
            election_type: Some("Senate".to_string()),
            reference: Some(testdata("flat_list/flat_list_expected.json")),
            ..Args::default()
        };
        assert!(matches!(
            run(&args),
            Err(GroupingCliError::ReferenceMismatch { .. })
        ));
    }
}
