use std::path::PathBuf;

use addonstore_core::CatalogApiVersion;
use jiff::SignedDuration;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "addonstore.toml";

/// Tool configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Catalog JSON file (default: "./catalog.json")
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,
    /// JSON list of installed add-on manifests
    #[serde(default)]
    pub installed_path: Option<PathBuf>,
    /// Host API version the catalog targets, or "latest"
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Age after which a catalog snapshot is reported as stale
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("./catalog.json")
}

fn default_api_version() -> String {
    CatalogApiVersion::LATEST.to_string()
}

fn default_cache_ttl_secs() -> u64 {
    6 * 60 * 60
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            installed_path: None,
            api_version: default_api_version(),
            cache_ttl_secs: default_cache_ttl_secs(),
        }
    }
}

impl Config {
    /// Load configuration from file, environment, and CLI arguments
    pub fn load(
        config_path: Option<&PathBuf>,
        cli_catalog_path: Option<&PathBuf>,
        cli_installed_path: Option<&PathBuf>,
        cli_api_version: Option<&str>,
    ) -> anyhow::Result<Self> {
        // Start with default config
        let mut config = if let Some(path) = config_path {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content)?
        } else if let Ok(content) = std::fs::read_to_string(DEFAULT_CONFIG_FILE) {
            toml::from_str(&content)?
        } else {
            Config::default()
        };

        config.apply_env(|key| std::env::var(key).ok());

        // Override with CLI arguments
        if let Some(path) = cli_catalog_path {
            config.catalog_path = path.clone();
        }
        if let Some(path) = cli_installed_path {
            config.installed_path = Some(path.clone());
        }
        if let Some(version) = cli_api_version {
            config.api_version = version.to_string();
        }

        // Fail early on a bad API version rather than at first use
        config.catalog_api_version()?;
        Ok(config)
    }

    /// Override fields from `ADDONSTORE_*` variables
    pub fn apply_env<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = var("ADDONSTORE_CATALOG_PATH") {
            self.catalog_path = PathBuf::from(path);
        }
        if let Some(path) = var("ADDONSTORE_INSTALLED_PATH") {
            self.installed_path = Some(PathBuf::from(path));
        }
        if let Some(version) = var("ADDONSTORE_API_VERSION") {
            self.api_version = version;
        }
        if let Some(ttl) = var("ADDONSTORE_CACHE_TTL_SECS") {
            if let Ok(ttl) = ttl.parse() {
                self.cache_ttl_secs = ttl;
            }
        }
    }

    pub fn catalog_api_version(&self) -> Result<CatalogApiVersion> {
        self.api_version
            .parse()
            .map_err(|e| Error::Config(format!("api_version {:?}: {}", self.api_version, e)))
    }

    pub fn cache_ttl(&self) -> SignedDuration {
        SignedDuration::from_secs(i64::try_from(self.cache_ttl_secs).unwrap_or(i64::MAX))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use addonstore_core::MajorMinorPatch;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_partial_toml() {
        let config: Config = toml::from_str(
            r#"
catalog_path = "/var/cache/addons/catalog.json"
api_version = "2023.1"
"#,
        )
        .unwrap();

        assert_eq!(config.catalog_path, PathBuf::from("/var/cache/addons/catalog.json"));
        assert_eq!(config.installed_path, None);
        assert_eq!(config.cache_ttl_secs, 21600);
        assert_eq!(
            config.catalog_api_version().unwrap(),
            CatalogApiVersion::Version(MajorMinorPatch::new(2023, 1, 0))
        );
    }

    #[test]
    fn env_overrides_file_values() {
        let env = HashMap::from([
            ("ADDONSTORE_INSTALLED_PATH", "/tmp/installed.json"),
            ("ADDONSTORE_CACHE_TTL_SECS", "60"),
            ("ADDONSTORE_API_VERSION", "2024.1.2"),
        ]);
        let mut config = Config::default();
        config.apply_env(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.catalog_path, PathBuf::from("./catalog.json"));
        assert_eq!(config.installed_path, Some(PathBuf::from("/tmp/installed.json")));
        assert_eq!(config.cache_ttl(), SignedDuration::from_secs(60));
        assert_eq!(config.api_version, "2024.1.2");
    }

    #[test]
    fn bad_ttl_is_ignored() {
        let mut config = Config::default();
        config.apply_env(|key| (key == "ADDONSTORE_CACHE_TTL_SECS").then(|| "soon".to_string()));
        assert_eq!(config.cache_ttl_secs, 21600);
    }

    #[test]
    fn bad_api_version_is_config_error() {
        let config = Config {
            api_version: "newest".to_string(),
            ..Config::default()
        };
        assert!(matches!(config.catalog_api_version(), Err(Error::Config(_))));
    }

    #[test]
    fn load_reads_explicit_file_and_cli_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("addonstore.toml");
        std::fs::write(&path, "catalog_path = \"from-file.json\"\napi_version = \"2022.4\"\n").unwrap();

        let cli_catalog = PathBuf::from("from-cli.json");
        let config = Config::load(Some(&path), Some(&cli_catalog), None, Some("latest")).unwrap();
        assert_eq!(config.catalog_path, cli_catalog);
        assert_eq!(config.api_version, "latest");
    }
}
