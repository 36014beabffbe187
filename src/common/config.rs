use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::common::errors::SweepError;
use crate::sweeper::Directive;

/// Run configuration, loaded from a TOML file.
///
/// The `directives` table array is required; a config without it is
/// rejected at parse time rather than silently treated as a no-op run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Optional log destination. When set, the file is truncated at the
    /// start of each run and all engine output goes there.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,

    /// Cleanup directives, executed in order
    pub directives: Vec<Directive>,
}

impl Config {
    /// Get the tidysweep data directory (~/.tidysweep)
    pub fn data_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp"))
            .join(".tidysweep")
    }

    /// Default config file path
    pub fn default_path() -> PathBuf {
        Self::data_dir().join("config.toml")
    }

    /// Load config from the given file, expanding `~` in all paths
    pub fn load(path: &Path) -> Result<Self, SweepError> {
        if !path.exists() {
            return Err(SweepError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = std::fs::read_to_string(path).map_err(|e| SweepError::ConfigInvalid {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let mut config: Config =
            toml::from_str(&contents).map_err(|e| SweepError::ConfigInvalid {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        for directive in &mut config.directives {
            directive.path = expand_home(&directive.path);
        }
        if let Some(log_file) = config.log_file.take() {
            config.log_file = Some(expand_home(&log_file));
        }

        Ok(config)
    }

    /// Starter config written by `tidysweep config init`
    pub fn sample() -> &'static str {
        r#"# tidysweep configuration
#
# log_file: optional; when set, run output is written there instead of stderr.
# The file is recreated on every run.
# log_file = "~/.tidysweep/sweep.log"

# Each [[directives]] entry is executed in order.
#
# With `extension`, only direct children of `path` whose name ends with the
# given suffix are removed. Without it, the whole tree under `path` is swept
# and directories left empty are pruned (the root itself is kept).
#
# `remove_by_age = true` only deletes files whose last-modified calendar date
# is more than one day before today.

[[directives]]
path = "~/Downloads/temp"
extension = ".log"
remove_by_age = true

[[directives]]
path = "~/.cache/scratch"
remove_by_age = false
"#
    }
}

/// Expand a leading `~` component to the user's home directory.
/// Joining goes through `Path::join`, never a literal separator.
pub fn expand_home(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_config_parses() {
        let config: Config = toml::from_str(Config::sample()).unwrap();
        assert_eq!(config.directives.len(), 2);
        assert_eq!(config.directives[0].extension.as_deref(), Some(".log"));
        assert!(config.directives[0].remove_by_age);
        assert!(config.directives[1].extension.is_none());
        assert!(!config.directives[1].remove_by_age);
    }

    #[test]
    fn test_missing_directives_rejected() {
        let result: Result<Config, _> = toml::from_str("log_file = \"/tmp/x.log\"\n");
        assert!(result.is_err(), "config without directives must not parse");
    }

    #[test]
    fn test_missing_remove_by_age_rejected() {
        let result: Result<Config, _> =
            toml::from_str("[[directives]]\npath = \"/tmp/x\"\n");
        assert!(result.is_err(), "remove_by_age is a required field");
    }

    #[test]
    fn test_expand_home_leaves_absolute_paths() {
        let p = Path::new("/var/tmp/cache");
        assert_eq!(expand_home(p), PathBuf::from("/var/tmp/cache"));
    }

    #[test]
    fn test_expand_home_tilde() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home(Path::new("~/x/y")), home.join("x/y"));
        }
    }
}
