//! # tidysweep
//!
//! A config-driven directory sweeper.
//!
//! tidysweep executes an ordered list of cleanup directives against the
//! filesystem. Each directive either removes files by name suffix from a
//! single directory, or sweeps a whole tree bottom-up, deleting files and
//! pruning directories left empty (the tree root is always kept). File
//! deletion can be gated by age: only files whose last-modified calendar
//! date is more than one day old qualify.
//!
//! - **Config as contract**: directives come from a TOML file, executed in order
//! - **Fail-fast**: the first filesystem error aborts the run, so a failed
//!   directive is never reported as a success
//! - **Dry-run**: preview every removal without touching the disk
//! - **CLI as Unix citizen**: JSON output, pipe-friendly, cron-schedulable

pub mod cli;
pub mod common;
pub mod sweeper;
