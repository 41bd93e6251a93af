//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use crate::error::{MenuError, MenuResult};

/// Default tracing filter when `NAVMENU_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Menu definition file to load at startup (NAVMENU_FILE).
    pub definitions_path: Option<PathBuf>,

    /// Tracing filter directive (NAVMENU_LOG, default: "warn").
    pub log_filter: String,

    /// Treat validation warnings as failures (NAVMENU_STRICT, default: false).
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            definitions_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            strict: false,
        }
    }
}

/// Values given on the command line, which take precedence over the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub definitions_path: Option<PathBuf>,
    /// `--strict`; when set, NAVMENU_STRICT is not consulted.
    pub strict: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> MenuResult<Self> {
        Self::from_env_with(&Overrides::default())
    }

    /// Load configuration from environment variables, command-line values first.
    pub fn from_env_with(overrides: &Overrides) -> MenuResult<Self> {
        Self::from_lookup_with(|key| env::var(key).ok(), overrides)
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> MenuResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_lookup_with(lookup, &Overrides::default())
    }

    /// Load configuration from an arbitrary key lookup, command-line values first.
    pub fn from_lookup_with<F>(lookup: F, overrides: &Overrides) -> MenuResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let definitions_path = match &overrides.definitions_path {
            Some(path) => Some(path.clone()),
            None => lookup("NAVMENU_FILE")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        };

        let log_filter = lookup("NAVMENU_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let strict = match lookup("NAVMENU_STRICT") {
            _ if overrides.strict => true,
            Some(v) => parse_bool(&v).ok_or_else(|| MenuError::Config {
                var: "NAVMENU_STRICT",
                details: format!("must be true/false/1/0, got '{v}'"),
            })?,
            None => false,
        };

        Ok(Self {
            definitions_path,
            log_filter,
            strict,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> MenuResult<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config_from(&[]).unwrap(), Config::default());
    }

    #[test]
    fn reads_all_variables() {
        let config = config_from(&[
            ("NAVMENU_FILE", "menus.toml"),
            ("NAVMENU_LOG", "debug"),
            ("NAVMENU_STRICT", "YES"),
        ])
        .unwrap();

        assert_eq!(config.definitions_path, Some(PathBuf::from("menus.toml")));
        assert_eq!(config.log_filter, "debug");
        assert!(config.strict);
    }

    #[test]
    fn blank_file_is_none() {
        let config = config_from(&[("NAVMENU_FILE", "  ")]).unwrap();
        assert!(config.definitions_path.is_none());
    }

    #[test]
    fn overrides_take_precedence() {
        let vars: HashMap<&str, &str> =
            HashMap::from([("NAVMENU_FILE", "env.toml"), ("NAVMENU_STRICT", "maybe")]);
        let overrides = Overrides {
            definitions_path: Some(PathBuf::from("cli.toml")),
            strict: true,
        };

        let config =
            Config::from_lookup_with(|key| vars.get(key).map(|v| v.to_string()), &overrides)
                .unwrap();
        assert_eq!(config.definitions_path, Some(PathBuf::from("cli.toml")));
        assert!(config.strict);
    }

    #[test]
    fn invalid_strict_is_rejected() {
        let err = config_from(&[("NAVMENU_STRICT", "maybe")]).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("NAVMENU_STRICT"));
        assert!(msg.contains("maybe"));
    }
}
