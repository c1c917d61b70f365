use clap::Parser;

/// This program groups election candidates into display sections.
#[derive(Parser, Debug, Clone, Default)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, optional) A JSON file with the facets and grouping options.
    /// Options passed on the command line take precedence over the ones in this file.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,
    /// (file path) A reference file containing the expected groups in JSON format. If provided, candgroup will
    /// check that the computed groups match the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    /// (file path, 'stdout' or empty) Where to write the groups in JSON format. Defaults to the standard output.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path) The candidate list, as returned by the candidate directory. Setting this option overrides
    /// the candidate file that may be specified with the --config option.
    #[clap(short, long, value_parser)]
    pub input: Option<String>,

    /// (text, optional) The free-text search facet.
    #[clap(long, value_parser)]
    pub search: Option<String>,

    /// (state name or abbreviation, optional) The state facet.
    #[clap(long, value_parser)]
    pub state: Option<String>,

    /// (election type name, optional) The election type facet, for example 'Congressional'.
    #[clap(long, value_parser)]
    pub election_type: Option<String>,

    /// (party name, optional) The party facet.
    #[clap(long, value_parser)]
    pub party: Option<String>,

    /// (default name) How to sort candidates inside a group: name, electionType, state or resolvedState.
    #[clap(long, value_parser)]
    pub sort_by: Option<String>,

    /// (group label, repeatable) The groups to mark as collapsed.
    #[clap(long, value_parser)]
    pub collapsed: Option<Vec<String>>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
