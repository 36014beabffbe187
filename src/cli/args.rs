use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// tidysweep — a config-driven directory sweeper
#[derive(Parser, Debug)]
#[command(
    name = "tidysweep",
    version,
    about = "A config-driven directory sweeper",
    long_about = "tidysweep is a config-driven directory sweeper: it deletes files by\n\
                   extension or age and prunes directories left empty, driven by an\n\
                   ordered list of directives in a TOML file.",
    after_help = "EXAMPLES:\n  \
        tidysweep run                            Execute the configured directives\n  \
        tidysweep run --dry-run                  Preview without deleting anything\n  \
        tidysweep run --config ./sweep.toml      Use an explicit config file\n  \
        tidysweep sweep ~/tmp                    Empty out a tree, prune empty dirs\n  \
        tidysweep sweep ~/logs -e .log --age     Remove old .log files, one level\n  \
        tidysweep config init                    Write a starter config\n  \
        tidysweep config show                    Print the active config"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the config file (default: ~/.tidysweep/config.toml)
    #[arg(long, short, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Quiet mode — minimal output
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Execute every directive from the config file, in order
    Run {
        /// Report what would be removed without deleting anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Sweep a single directory without a config file
    Sweep {
        /// Directory to sweep
        path: PathBuf,

        /// Only remove direct children with this name suffix (e.g. ".log").
        /// Without it, the whole tree is swept and empty dirs are pruned.
        #[arg(long, short, value_name = "SUFFIX")]
        extension: Option<String>,

        /// Only remove files more than one day old (by calendar date)
        #[arg(long)]
        age: bool,

        /// Report what would be removed without deleting anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Inspect or scaffold the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the active config
    Show,
    /// Write a starter config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(ValueEnum, Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Human,
    Json,
    Quiet,
}

#[derive(ValueEnum, Clone, Debug)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
