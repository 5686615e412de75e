use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

/// Default file name of the job queue written by `batch`.
pub const DEFAULT_QUEUE_FILE: &str = "protein_job_queue.json";

#[derive(Parser, Debug)]
#[command(
    author = "The foldjob developers",
    version,
    about = "foldjob - Turn predicted protein structures into verifiable Ising optimization jobs.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a job descriptor from a single structure file.
    Extract(ExtractArgs),
    /// Build job descriptors for many structures and collect them into a job queue.
    Batch(BatchArgs),
    /// Check the integrity of a job descriptor or a job queue file.
    Verify(VerifyArgs),
}

/// Problem construction settings shared by `extract` and `batch`.
#[derive(Args, Debug, Clone, Default)]
pub struct ProblemArgs {
    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Keep only the first N residues of each structure.
    #[arg(short = 'm', long, value_name = "INT", conflicts_with = "no_limit")]
    pub max_size: Option<usize>,

    /// Encode every residue, however large the structure.
    #[arg(long)]
    pub no_limit: bool,

    /// Override the contact distance cutoff, in Angstroms.
    #[arg(long, value_name = "FLOAT")]
    pub cutoff: Option<f64>,

    /// Override the minimum sequence separation of a contact.
    #[arg(long = "min-seq-sep", value_name = "INT")]
    pub min_sequence_separation: Option<usize>,

    /// Override the data source tag recorded in each descriptor.
    #[arg(long, value_name = "NAME")]
    pub source: Option<String>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S contacts.cutoff=7.5
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `extract` subcommand.
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Path to the input structure file (e.g., TP53_human.pdb).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the descriptor file. Defaults to <input stem>_job.json next to the input.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub problem: ProblemArgs,
}

/// Arguments for the `batch` subcommand.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Structure files to process.
    #[arg(value_name = "PATHS")]
    pub paths: Vec<PathBuf>,

    /// TOML manifest listing structures with optional UniProt IDs and descriptions.
    #[arg(long, value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    /// Path for the job queue file.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_QUEUE_FILE)]
    pub queue: PathBuf,

    #[command(flatten)]
    pub problem: ProblemArgs,
}

/// Arguments for the `verify` subcommand.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// A descriptor file or a job queue file.
    #[arg(required = true, value_name = "PATH")]
    pub path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn extract_accepts_overrides() {
        let cli = Cli::parse_from([
            "foldjob",
            "-vv",
            "extract",
            "-i",
            "TP53_human.pdb",
            "--max-size",
            "128",
            "--cutoff",
            "7.5",
            "--min-seq-sep",
            "4",
            "-S",
            "job.source=pdb",
        ]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Extract(args) => {
                assert_eq!(args.input, PathBuf::from("TP53_human.pdb"));
                assert!(args.output.is_none());
                assert_eq!(args.problem.max_size, Some(128));
                assert_eq!(args.problem.cutoff, Some(7.5));
                assert_eq!(args.problem.min_sequence_separation, Some(4));
                assert_eq!(args.problem.set_values, vec!["job.source=pdb"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn max_size_conflicts_with_no_limit() {
        let result = Cli::try_parse_from([
            "foldjob",
            "extract",
            "-i",
            "a.pdb",
            "--max-size",
            "10",
            "--no-limit",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn batch_defaults_queue_file() {
        let cli = Cli::parse_from(["foldjob", "batch", "a.pdb", "b.pdb"]);
        match cli.command {
            Commands::Batch(args) => {
                assert_eq!(args.paths.len(), 2);
                assert_eq!(args.queue, PathBuf::from(DEFAULT_QUEUE_FILE));
                assert!(args.manifest.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
