use clap::Parser;
use dep_info::application::dto::OutputFormat;
use dep_info::shared::error::ExitCode;
use std::path::PathBuf;

/// Print the dependency closure of packages in a port registry
#[derive(Parser, Debug)]
#[command(name = "dep-info")]
#[command(version)]
#[command(
    about = "Print the dependency closure of packages as a listing, a DOT graph or a DGML graph",
    long_about = None
)]
pub struct Args {
    /// Packages whose dependencies should be listed (all packages if omitted)
    #[arg(value_name = "PACKAGE")]
    pub packages: Vec<String>,

    /// Emit a Graphviz DOT graph instead of the plain listing
    #[arg(long, conflicts_with = "dgml")]
    pub dot: bool,

    /// Emit a DGML graph instead of the plain listing
    #[arg(long)]
    pub dgml: bool,

    /// Ports directory or registry lockfile [default: ports]
    #[arg(short, long, value_name = "PATH")]
    pub registry: Option<PathBuf>,

    /// Exclude packages matching patterns (supports wildcards: *)
    /// Can be specified multiple times: -e "zlib" -e "boost-*"
    #[arg(short, long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Config file path (defaults to dep-info.config.yml in the current directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// Output format selected by flags, if any
    pub fn format(&self) -> Option<OutputFormat> {
        if self.dot {
            Some(OutputFormat::Dot)
        } else if self.dgml {
            Some(OutputFormat::Dgml)
        } else {
            None
        }
    }
}

/// Exit code for a clap parse result that did not yield `Args`
///
/// `--help` and `--version` arrive as errors printed to stdout; they succeed.
pub fn exit_code_for(error: &clap::Error) -> ExitCode {
    if error.use_stderr() {
        ExitCode::InvalidArguments
    } else {
        ExitCode::Success
    }
}
