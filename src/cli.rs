use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand};
use spdx_licences::application::dto::OutputFormat;
use std::path::PathBuf;

/// Render and classify SPDX licence expressions
#[derive(Parser, Debug)]
#[command(name = "spdx-licences")]
#[command(version)]
#[command(about = "Render and classify SPDX licence expressions", long_about = None)]
pub struct Args {
    /// Config file (defaults to spdx-licences.config.yml in the current directory)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the canonical rendering of each licence tree in a JSON document
    Render {
        /// JSON document holding a licence tree or an array of trees
        input: PathBuf,

        /// Output file path (if not specified, outputs to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Classify every licence in a JSON document against the SPDX Licence List
    Classify {
        /// JSON document holding a licence tree or an array of trees
        input: PathBuf,

        #[command(flatten)]
        report: ReportArgs,

        /// Output file path (if not specified, outputs to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Classify bare licence identifiers
    Check {
        /// Licence identifiers, e.g. MIT LicenseRef-foo
        #[arg(required = true, value_name = "ID")]
        ids: Vec<String>,

        #[command(flatten)]
        report: ReportArgs,
    },
}

/// Options shared by the classifying commands
#[derive(ClapArgs, Debug)]
pub struct ReportArgs {
    /// Path to the SPDX licenses.json
    #[arg(short, long, value_name = "FILE")]
    pub licence_list: Option<PathBuf>,

    /// Treat an identifier as listed; can be specified multiple times
    #[arg(short, long = "add", value_name = "ID")]
    pub additional: Vec<String>,

    /// Output format: json or markdown
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Exit with code 1 when any licence is unknown
    #[arg(long)]
    pub strict: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
