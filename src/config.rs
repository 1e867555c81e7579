//! Run configuration
//!
//! Settings are resolved from (in priority order):
//! - command-line flags
//! - depmerge.toml (`--config <PATH>` or `<dir>/depmerge.toml`)
//! - built-in defaults
//!
//! Relative paths, wherever they come from, resolve against the base directory.

use crate::cli::CliArgs;
use crate::error::ConfigError;
use crate::output::ReportMode;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file looked up in the base directory
pub const CONFIG_FILENAME: &str = "depmerge.toml";

/// Report file written when no output is configured
pub const DEFAULT_OUTPUT: &str = "output.csv";

/// Manifests read when none are configured
pub fn default_manifests() -> Vec<PathBuf> {
    (1..=5)
        .map(|n| PathBuf::from("package").join(format!("package-{}.json", n)))
        .collect()
}

/// Contents of depmerge.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Manifest paths, in merge order
    pub manifests: Option<Vec<PathBuf>>,
    /// Report path
    pub output: Option<PathBuf>,
    /// Report columns
    pub mode: Option<ReportMode>,
    /// Reject malformed version specs
    pub strict: Option<bool>,
}

impl FileConfig {
    /// Parse config content read from `path`
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::parse_error(path, e.to_string()))
    }

    /// Read and parse a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_error(path, e))?;
        Self::parse(&content, path)
    }

    /// Load an explicit config file, or `<dir>/depmerge.toml` if it exists
    pub fn discover(dir: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(&resolve(dir, path));
        }

        let default_path = dir.join(CONFIG_FILENAME);
        if default_path.is_file() {
            tracing::debug!("using config file {}", default_path.display());
            Self::load(&default_path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Base directory for relative paths
    pub base_dir: PathBuf,
    /// Manifest paths, in merge order
    pub manifests: Vec<PathBuf>,
    /// Report path
    pub output: PathBuf,
    /// Report columns
    pub mode: ReportMode,
    /// Reject malformed version specs
    pub strict: bool,
    /// Print the report instead of writing it
    pub dry_run: bool,
}

impl Settings {
    /// Resolve settings from CLI arguments and the config file
    pub fn from_cli(args: &CliArgs) -> Result<Self, ConfigError> {
        let file = FileConfig::discover(&args.dir, args.config.as_deref())?;
        Self::merge(args, file)
    }

    /// Combine CLI arguments with an already loaded config file
    pub fn merge(args: &CliArgs, file: FileConfig) -> Result<Self, ConfigError> {
        let base_dir = args.dir.clone();

        let manifests = if !args.manifests.is_empty() {
            args.manifests.clone()
        } else {
            file.manifests.unwrap_or_else(default_manifests)
        };
        let manifests: Vec<PathBuf> = manifests.iter().map(|p| resolve(&base_dir, p)).collect();

        let output = args
            .output
            .clone()
            .or(file.output)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
        let output = resolve(&base_dir, &output);
        if output.is_dir() {
            return Err(ConfigError::InvalidPath {
                path: output,
                message: "output is a directory".to_string(),
            });
        }

        Ok(Self {
            manifests,
            output,
            mode: args.requested_mode().or(file.mode).unwrap_or_default(),
            strict: args.strict || file.strict.unwrap_or(false),
            dry_run: args.dry_run,
            base_dir,
        })
    }
}

/// Join `path` onto `base` unless it is already absolute
fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn args_in(dir: &Path, extra: &[&str]) -> CliArgs {
        let dir_str = dir.to_str().unwrap();
        let mut argv = vec!["depmerge", "-C", dir_str];
        argv.extend(extra);
        CliArgs::parse_from(argv)
    }

    #[test]
    fn test_default_manifests() {
        let defaults = default_manifests();
        assert_eq!(defaults.len(), 5);
        assert_eq!(defaults[0], PathBuf::from("package/package-1.json"));
        assert_eq!(defaults[4], PathBuf::from("package/package-5.json"));
    }

    #[test]
    fn test_defaults_without_config_file() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::from_cli(&args_in(dir.path(), &[])).unwrap();

        assert_eq!(settings.base_dir, dir.path());
        assert_eq!(settings.manifests.len(), 5);
        assert_eq!(
            settings.manifests[0],
            dir.path().join("package/package-1.json")
        );
        assert_eq!(settings.output, dir.path().join("output.csv"));
        assert_eq!(settings.mode, ReportMode::Author);
        assert!(!settings.strict);
        assert!(!settings.dry_run);
    }

    #[test]
    fn test_config_file_is_discovered() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            "manifests = [\"a.json\", \"b.json\"]\noutput = \"deps.csv\"\nmode = \"plain\"\nstrict = true\n",
        )
        .unwrap();

        let settings = Settings::from_cli(&args_in(dir.path(), &[])).unwrap();
        assert_eq!(
            settings.manifests,
            vec![dir.path().join("a.json"), dir.path().join("b.json")]
        );
        assert_eq!(settings.output, dir.path().join("deps.csv"));
        assert_eq!(settings.mode, ReportMode::Plain);
        assert!(settings.strict);
    }

    #[test]
    fn test_cli_overrides_config_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            "manifests = [\"a.json\"]\noutput = \"deps.csv\"\nmode = \"plain\"\n",
        )
        .unwrap();

        let settings = Settings::from_cli(&args_in(
            dir.path(),
            &["x.json", "-o", "other.csv", "--mode", "author"],
        ))
        .unwrap();
        assert_eq!(settings.manifests, vec![dir.path().join("x.json")]);
        assert_eq!(settings.output, dir.path().join("other.csv"));
        assert_eq!(settings.mode, ReportMode::Author);
    }

    #[test]
    fn test_absolute_paths_are_kept() {
        let dir = TempDir::new().unwrap();
        let elsewhere = TempDir::new().unwrap();
        let manifest = elsewhere.path().join("m.json");
        let output = elsewhere.path().join("o.csv");

        let settings = Settings::from_cli(&args_in(
            dir.path(),
            &[manifest.to_str().unwrap(), "-o", output.to_str().unwrap()],
        ))
        .unwrap();
        assert_eq!(settings.manifests, vec![manifest]);
        assert_eq!(settings.output, output);
    }

    #[test]
    fn test_explicit_config_missing_is_error() {
        let dir = TempDir::new().unwrap();
        let err = Settings::from_cli(&args_in(dir.path(), &["--config", "missing.toml"]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }

    #[test]
    fn test_unknown_config_key_is_error() {
        let err = FileConfig::parse("colour = true\n", Path::new(CONFIG_FILENAME)).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_invalid_mode_in_config_is_error() {
        let err = FileConfig::parse("mode = \"fancy\"\n", Path::new(CONFIG_FILENAME)).unwrap_err();
        assert!(err.to_string().contains("depmerge.toml"));
    }

    #[test]
    fn test_output_directory_is_rejected() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("reports")).unwrap();
        let err = Settings::from_cli(&args_in(dir.path(), &["-o", "reports"])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPath { .. }));
    }

    #[test]
    fn test_strict_from_cli() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::from_cli(&args_in(dir.path(), &["--strict", "-n"])).unwrap();
        assert!(settings.strict);
        assert!(settings.dry_run);
    }
}
