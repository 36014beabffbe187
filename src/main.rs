use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;

use tidysweep::cli::args::{Cli, Commands, ConfigAction, OutputFormat};
use tidysweep::cli::output;
use tidysweep::common::config::{self, Config};
use tidysweep::sweeper::{self, Directive};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Run { dry_run } => cmd_run(&cli, dry_run),

        Commands::Sweep {
            ref path,
            ref extension,
            age,
            dry_run,
        } => cmd_sweep(&cli, path, extension.clone(), age, dry_run),

        Commands::Config { ref action } => cmd_config(&cli, action),

        Commands::Completions { shell } => {
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            let shell = match shell {
                tidysweep::cli::args::CompletionShell::Bash => clap_complete::Shell::Bash,
                tidysweep::cli::args::CompletionShell::Zsh => clap_complete::Shell::Zsh,
                tidysweep::cli::args::CompletionShell::Fish => clap_complete::Shell::Fish,
            };
            clap_complete::generate(shell, &mut cmd, "tidysweep", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Install the tracing subscriber.
///
/// With a log file configured, the file is recreated for each run and all
/// engine output goes there (no ANSI). Otherwise events go to stderr so
/// stdout stays pipe-friendly. The returned guard must outlive the run or
/// buffered lines are lost.
fn init_logging(log_file: Option<&Path>, verbose: bool) -> Result<Option<WorkerGuard>> {
    let filter = if verbose {
        "tidysweep=debug"
    } else {
        "tidysweep=info"
    };

    match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log dir: {}", parent.display()))?;
            }
            // One log per run: recreate rather than append
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file: {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}

fn config_path(cli: &Cli) -> std::path::PathBuf {
    cli.config.clone().unwrap_or_else(Config::default_path)
}

// ─── Run ──────────────────────────────────────────────────────────────────────

fn cmd_run(cli: &Cli, dry_run: bool) -> Result<()> {
    let path = config_path(cli);
    let config = Config::load(&path)?;
    let _guard = init_logging(config.log_file.as_deref(), cli.verbose)?;

    let report = sweeper::run(&config.directives, dry_run)?;

    match cli.format {
        OutputFormat::Human => {
            if !cli.quiet {
                output::print_run_report(&report);
            }
        }
        OutputFormat::Json => output::print_run_json(&report),
        OutputFormat::Quiet => output::print_run_quiet(&report),
    }

    Ok(())
}

// ─── Sweep (ad-hoc, no config file) ───────────────────────────────────────────

fn cmd_sweep(
    cli: &Cli,
    path: &Path,
    extension: Option<String>,
    age: bool,
    dry_run: bool,
) -> Result<()> {
    let _guard = init_logging(None, cli.verbose)?;

    let directive = Directive {
        path: config::expand_home(path),
        extension,
        remove_by_age: age,
    };

    let report = sweeper::run(std::slice::from_ref(&directive), dry_run)?;

    match cli.format {
        OutputFormat::Human => {
            if !cli.quiet {
                output::print_run_report(&report);
            }
        }
        OutputFormat::Json => output::print_run_json(&report),
        OutputFormat::Quiet => output::print_run_quiet(&report),
    }

    Ok(())
}

// ─── Config ───────────────────────────────────────────────────────────────────

fn cmd_config(cli: &Cli, action: &ConfigAction) -> Result<()> {
    let path = config_path(cli);

    match action {
        ConfigAction::Show => {
            let config = Config::load(&path)?;
            let rendered = toml::to_string_pretty(&config).context("Failed to render config")?;
            println!("# {}", path.display());
            print!("{}", rendered);
            Ok(())
        }
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                anyhow::bail!(
                    "Config already exists: {} (use --force to overwrite)",
                    path.display()
                );
            }
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create config dir: {}", parent.display())
                })?;
            }
            std::fs::write(&path, Config::sample())
                .with_context(|| format!("Failed to write config: {}", path.display()))?;
            println!("Wrote starter config to {}", path.display());
            Ok(())
        }
    }
}
