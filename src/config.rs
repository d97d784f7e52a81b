//! Configuration file support for shelfwise.
//!
//! Provides YAML-based configuration through `shelfwise.config.yml` files
//! and resolves the effective settings from CLI flags, environment
//! variables, the config file and built-in defaults, in that order.

use anyhow::Context;
use reqwest::Url;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::application::use_cases::SearchMode;
use crate::shared::error::ShelfError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "shelfwise.config.yml";
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const API_URL_ENV: &str = "SHELFWISE_API_URL";
pub const TOKEN_FILE_ENV: &str = "SHELFWISE_TOKEN_FILE";

const MAX_TIMEOUT_SECS: u64 = 300;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub api_url: Option<String>,
    pub token_file: Option<PathBuf>,
    pub search_mode: Option<String>,
    pub request_timeout_secs: Option<u64>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(api_url) = &config.api_url {
        validate_api_url(api_url)?;
    }
    if let Some(mode) = &config.search_mode {
        parse_search_mode(mode)?;
    }
    if let Some(secs) = config.request_timeout_secs {
        validate_timeout(secs)?;
    }
    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

fn validate_api_url(api_url: &str) -> Result<()> {
    let parsed = Url::parse(api_url.trim()).ok();
    let is_http = parsed.is_some_and(|url| {
        matches!(url.scheme(), "http" | "https") && url.host_str().is_some_and(|h| !h.is_empty())
    });
    if !is_http {
        return Err(ShelfError::InvalidConfig {
            reason: format!("api_url '{}' is not an http(s) URL", api_url),
            hint: "Use a full base URL such as \"http://localhost:8000\"".to_string(),
        }
        .into());
    }
    Ok(())
}

fn parse_search_mode(mode: &str) -> Result<SearchMode> {
    mode.parse::<SearchMode>().map_err(|reason| {
        ShelfError::InvalidConfig {
            reason,
            hint: "search_mode accepts \"combined\" (default) or \"independent\"".to_string(),
        }
        .into()
    })
}

fn validate_timeout(secs: u64) -> Result<()> {
    if secs == 0 || secs > MAX_TIMEOUT_SECS {
        return Err(ShelfError::InvalidConfig {
            reason: format!("request_timeout_secs must be between 1 and {}", MAX_TIMEOUT_SECS),
            hint: format!("The default is {} seconds", DEFAULT_TIMEOUT_SECS),
        }
        .into());
    }
    Ok(())
}

/// Values given explicitly on the command line
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub api_url: Option<String>,
    pub token_file: Option<PathBuf>,
    pub search_mode: Option<SearchMode>,
}

/// Effective settings after merging every source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_url: String,
    pub token_file: PathBuf,
    pub search_mode: SearchMode,
    pub request_timeout: Duration,
}

impl Settings {
    /// Merges CLI flags > environment > config file > defaults
    ///
    /// `env` looks up an environment variable; taking it as a function
    /// keeps resolution testable without touching the process environment.
    pub fn resolve(
        cli: CliOverrides,
        file: Option<ConfigFile>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let file = file.unwrap_or_default();
        let env_value = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        let api_url = cli
            .api_url
            .or_else(|| env_value(API_URL_ENV))
            .or(file.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        validate_api_url(&api_url)?;

        let token_file = cli
            .token_file
            .or_else(|| env_value(TOKEN_FILE_ENV).map(PathBuf::from))
            .or(file.token_file)
            .unwrap_or_else(|| default_token_file(env_value("HOME")));

        let search_mode = match cli.search_mode {
            Some(mode) => mode,
            None => match file.search_mode.as_deref() {
                Some(mode) => parse_search_mode(mode)?,
                None => SearchMode::default(),
            },
        };

        let timeout_secs = file.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        validate_timeout(timeout_secs)?;

        Ok(Self {
            api_url: api_url.trim().trim_end_matches('/').to_string(),
            token_file,
            search_mode,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn default_token_file(home: Option<String>) -> PathBuf {
    let base = home.map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
    base.join(".shelfwise").join("token")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn no_env(_key: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
api_url: https://books.example.com
token_file: /tmp/shelfwise-token
search_mode: independent
request_timeout_secs: 30
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.api_url.as_deref(), Some("https://books.example.com"));
        assert_eq!(
            config.token_file.as_deref(),
            Some(Path::new("/tmp/shelfwise-token"))
        );
        assert_eq!(config.search_mode.as_deref(), Some("independent"));
        assert_eq!(config.request_timeout_secs, Some(30));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "search_mode: combined\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.search_mode.as_deref(), Some("combined"));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config_from_path(Path::new("/nonexistent/config.yml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_values_are_rejected_with_hints() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");

        for yaml in [
            "search_mode: sometimes\n",
            "api_url: localhost:8000\n",
            "request_timeout_secs: 0\n",
        ] {
            fs::write(&config_path, yaml).unwrap();
            let err = load_config_from_path(&config_path).unwrap_err();
            let message = err.to_string();
            assert!(message.contains("Invalid config"), "{}", message);
            assert!(message.contains("💡 Hint"), "{}", message);
        }
    }

    #[test]
    fn test_unknown_fields_warning() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "api_url: http://h\nformat: json\ncheck_cve: true\n").unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("format"));
    }

    #[test]
    fn test_defaults() {
        let env = |key: &str| (key == "HOME").then(|| "/home/ana".to_string());
        let settings = Settings::resolve(CliOverrides::default(), None, env).unwrap();

        assert_eq!(settings.api_url, DEFAULT_API_URL);
        assert_eq!(settings.token_file, PathBuf::from("/home/ana/.shelfwise/token"));
        assert_eq!(settings.search_mode, SearchMode::Combined);
        assert_eq!(settings.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_precedence_cli_then_env_then_file() {
        let file = || ConfigFile {
            api_url: Some("http://from-file".to_string()),
            token_file: Some(PathBuf::from("/file/token")),
            search_mode: Some("independent".to_string()),
            request_timeout_secs: Some(3),
            unknown_fields: HashMap::new(),
        };
        let env = |key: &str| match key {
            API_URL_ENV => Some("http://from-env/".to_string()),
            TOKEN_FILE_ENV => Some("/env/token".to_string()),
            _ => None,
        };

        let from_env = Settings::resolve(CliOverrides::default(), Some(file()), env).unwrap();
        assert_eq!(from_env.api_url, "http://from-env");
        assert_eq!(from_env.token_file, PathBuf::from("/env/token"));
        assert_eq!(from_env.search_mode, SearchMode::Independent);
        assert_eq!(from_env.request_timeout, Duration::from_secs(3));

        let cli = CliOverrides {
            api_url: Some("http://from-cli".to_string()),
            token_file: Some(PathBuf::from("/cli/token")),
            search_mode: Some(SearchMode::Combined),
        };
        let from_cli = Settings::resolve(cli, Some(file()), env).unwrap();
        assert_eq!(from_cli.api_url, "http://from-cli");
        assert_eq!(from_cli.token_file, PathBuf::from("/cli/token"));
        assert_eq!(from_cli.search_mode, SearchMode::Combined);

        let from_file = Settings::resolve(CliOverrides::default(), Some(file()), no_env).unwrap();
        assert_eq!(from_file.api_url, "http://from-file");
        assert_eq!(from_file.token_file, PathBuf::from("/file/token"));
    }

    #[test]
    fn test_blank_env_value_is_ignored() {
        let env = |key: &str| (key == API_URL_ENV).then(|| "  ".to_string());
        let settings = Settings::resolve(CliOverrides::default(), None, env).unwrap();
        assert_eq!(settings.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_invalid_cli_url_is_rejected() {
        let cli = CliOverrides {
            api_url: Some("ftp://books".to_string()),
            ..Default::default()
        };
        assert!(Settings::resolve(cli, None, no_env).is_err());
    }

    #[test]
    fn test_malformed_http_urls_are_rejected() {
        for url in ["http://exa mple", "http://:::", "http://", "https:///books"] {
            assert!(validate_api_url(url).is_err(), "{} should be rejected", url);
        }
        assert!(validate_api_url("http://localhost:8000").is_ok());
        assert!(validate_api_url(" https://books.example.com/api/ ").is_ok());
    }
}
