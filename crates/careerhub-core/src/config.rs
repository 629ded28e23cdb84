//! careerhub configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::store::DEFAULT_STORAGE_KEY;

/// Name of the config file looked up in the current directory.
pub const CONFIG_FILE: &str = "careerhub.toml";

/// Top-level careerhub configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerhubConfig {
    /// Directory holding the persisted document.
    #[serde(default = "default_store_dir")]
    pub store_dir: PathBuf,
    /// Key the document is stored under.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Default destination of `careerhub export`.
    #[serde(default = "default_export_file")]
    pub export_file: PathBuf,
}

fn default_store_dir() -> PathBuf {
    PathBuf::from("./careerhub-data")
}
fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}
fn default_export_file() -> PathBuf {
    PathBuf::from("career-skills-data.json")
}

impl Default for CareerhubConfig {
    fn default() -> Self {
        Self {
            store_dir: default_store_dir(),
            storage_key: default_storage_key(),
            export_file: default_export_file(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    let mut search_from = 0;
    while let Some(offset) = result[search_from..].find("${") {
        let start = search_from + offset;
        let Some(end) = result[start..].find('}') else {
            break;
        };
        let var_name = &result[start + 2..start + end];
        let value = std::env::var(var_name).unwrap_or_default();
        result = format!("{}{}{}", &result[..start], value, &result[start + end + 1..]);
        search_from = start + value.len();
    }
    result
}

fn resolve_path(p: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&p.to_string_lossy()))
}

/// Load config from an explicit path, or search the well-known locations.
///
/// Search order:
/// 1. `careerhub.toml` in the current directory
/// 2. `~/.config/careerhub/config.toml`
///
/// `CAREERHUB_STORE_DIR` overrides `store_dir`.
pub fn load_config_from(path: Option<&Path>) -> Result<CareerhubConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => {
            let local = PathBuf::from(CONFIG_FILE);
            if local.exists() {
                Some(local)
            } else {
                dirs_path()
                    .map(|home| home.join("config.toml"))
                    .filter(|global| global.exists())
            }
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            tracing::debug!("using config {}", path.display());
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => CareerhubConfig::default(),
    };

    if let Ok(dir) = std::env::var("CAREERHUB_STORE_DIR") {
        if !dir.is_empty() {
            config.store_dir = PathBuf::from(dir);
        }
    }

    config.store_dir = resolve_path(&config.store_dir);
    config.export_file = resolve_path(&config.export_file);

    anyhow::ensure!(
        !config.storage_key.trim().is_empty(),
        "storage_key must not be empty"
    );

    Ok(config)
}

/// Parse a config document.
pub fn parse_config(content: &str) -> Result<CareerhubConfig> {
    Ok(toml::from_str(content)?)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("careerhub"))
}

/// Starter config written by `careerhub init`.
pub const SAMPLE_CONFIG: &str = r#"# careerhub configuration

# Directory holding the marketplace document. ${VAR} references are expanded.
store_dir = "./careerhub-data"

# Key the document is stored under.
storage_key = "career-skills-marketplace-v1"

# Default file written by `careerhub export`.
export_file = "career-skills-data.json"
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_env_vars_basic() {
        std::env::set_var("_CAREERHUB_TEST_VAR", "hello");
        assert_eq!(resolve_env_vars("${_CAREERHUB_TEST_VAR}"), "hello");
        assert_eq!(
            resolve_env_vars("prefix_${_CAREERHUB_TEST_VAR}_suffix"),
            "prefix_hello_suffix"
        );
        assert_eq!(resolve_env_vars("${unterminated"), "${unterminated");
        std::env::remove_var("_CAREERHUB_TEST_VAR");
    }

    #[test]
    fn default_config() {
        let config = CareerhubConfig::default();
        assert_eq!(config.storage_key, "career-skills-marketplace-v1");
        assert_eq!(config.store_dir, PathBuf::from("./careerhub-data"));
    }

    #[test]
    fn sample_config_parses_to_defaults() {
        let config = parse_config(SAMPLE_CONFIG).unwrap();
        assert_eq!(config, CareerhubConfig::default());
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config = parse_config(r#"store_dir = "/var/lib/careerhub""#).unwrap();
        assert_eq!(config.store_dir, PathBuf::from("/var/lib/careerhub"));
        assert_eq!(config.export_file, PathBuf::from("career-skills-data.json"));
    }

    #[test]
    fn explicit_config_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "storage_key = \"other-key\"\n").unwrap();
        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.storage_key, "other-key");
    }

    #[test]
    fn missing_explicit_config_errors() {
        let err = load_config_from(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn empty_storage_key_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "storage_key = \"  \"\n").unwrap();
        assert!(load_config_from(Some(&path)).is_err());
    }
}
