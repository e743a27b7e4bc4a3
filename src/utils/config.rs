use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "repogen.toml";

/// main configuration for repogen
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepogenConfig {
    /// fixture generator settings
    #[serde(default)]
    pub fixtures: FixtureConfig,

    /// tree mutator settings
    #[serde(default)]
    pub mutator: MutatorConfig,
}

/// settings for the structured fixture generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureConfig {
    /// number of fixture files to write
    pub count: usize,
    /// value of `orgIdentifier`, also part of the output directory
    pub org_identifier: String,
    /// value of `serviceDefinition.type`
    pub service_type: String,
    /// length of the random file name stem
    pub stem_length: usize,
    /// length of the random `name` / `identifier`
    pub name_length: usize,
    /// file extension without the dot
    pub extension: String,
    /// log progress every this many files, 0 disables it
    pub progress_interval: usize,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            count: 520,
            org_identifier: "AutoCreate_tests".to_string(),
            service_type: "Kubernetes".to_string(),
            stem_length: 6,
            name_length: 8,
            extension: "yaml".to_string(),
            progress_interval: 50,
        }
    }
}

impl FixtureConfig {
    /// `.harness/orgs/<org>/services` below `root`
    pub fn services_dir(&self, root: &Path) -> PathBuf {
        root.join(".harness")
            .join("orgs")
            .join(&self.org_identifier)
            .join("services")
    }

    /// reject settings the fixture generator cannot honour
    pub fn validate(&self) -> Result<()> {
        if self.stem_length == 0 || self.name_length == 0 {
            return invalid("fixture stem and name lengths must be positive");
        }
        if self.org_identifier.is_empty() {
            return invalid("fixture org_identifier must not be empty");
        }
        Ok(())
    }
}

/// settings for the tree mutator pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MutatorConfig {
    pub file_count: usize,
    pub dir_count: usize,
    /// directories are named `<dir_prefix><n>` for n in 1..=dir_count
    pub dir_prefix: String,
    /// extensions including the leading dot
    pub extensions: Vec<String>,
    pub content_length_min: usize,
    pub content_length_max: usize,
    pub modify_count: usize,
    pub delete_count: usize,
    pub rename_count: usize,
    pub remote: String,
    pub branch: String,
}

impl Default for MutatorConfig {
    fn default() -> Self {
        Self {
            file_count: 2345,
            dir_count: 20,
            dir_prefix: "dir_new1_1".to_string(),
            extensions: [".txt", ".md", ".json", ".yaml", ".yml"]
                .iter()
                .map(|e| e.to_string())
                .collect(),
            content_length_min: 10,
            content_length_max: 100,
            modify_count: 500,
            delete_count: 200,
            rename_count: 150,
            remote: "origin".to_string(),
            branch: "main".to_string(),
        }
    }
}

impl MutatorConfig {
    pub fn content_length(&self) -> RangeInclusive<usize> {
        self.content_length_min..=self.content_length_max
    }

    /// reject settings the tree mutator cannot honour
    pub fn validate(&self) -> Result<()> {
        if self.extensions.is_empty() {
            return invalid("mutator extensions must not be empty");
        }
        if self.dir_count == 0 && self.file_count > 0 {
            return invalid("mutator needs at least one directory to place files in");
        }
        if self.content_length_min > self.content_length_max {
            return invalid("content_length_min is greater than content_length_max");
        }
        Ok(())
    }
}

impl RepogenConfig {
    /// load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| Error::FileReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: RepogenConfig = toml::from_str(&contents).map_err(|e| Error::TomlParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(config)
    }

    /// find and load configuration file in the target root
    ///
    /// looks for `repogen.toml` in the root directory
    /// returns default config if file is not found or cannot be parsed
    pub fn load_or_default<P: AsRef<Path>>(root: P) -> Self {
        match Self::find_config_file(&root) {
            Some(config_path) => match Self::load_from_file(&config_path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("ignoring unreadable config: {}", e);
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }

    /// find configuration file in the target root
    pub fn find_config_file<P: AsRef<Path>>(root: P) -> Option<PathBuf> {
        let config_path = root.as_ref().join(CONFIG_FILE_NAME);

        if config_path.exists() && config_path.is_file() {
            Some(config_path)
        } else {
            None
        }
    }

    /// reject settings either generator cannot honour
    pub fn validate(&self) -> Result<()> {
        self.fixtures.validate()?;
        self.mutator.validate()
    }
}

fn invalid(reason: &str) -> Result<()> {
    Err(Error::InvalidConfig {
        reason: reason.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_script_constants() {
        let config = RepogenConfig::default();

        assert_eq!(config.fixtures.count, 520);
        assert_eq!(config.fixtures.org_identifier, "AutoCreate_tests");
        assert_eq!(config.mutator.file_count, 2345);
        assert_eq!(config.mutator.dir_count, 20);
        assert_eq!(config.mutator.content_length(), 10..=100);
        assert_eq!(config.mutator.extensions.len(), 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[fixtures]\ncount = 5\n\n[mutator]\ndir_count = 3\nremote = \"upstream\"\n",
        )
        .unwrap();

        let config = RepogenConfig::load_or_default(temp_dir.path());
        assert_eq!(config.fixtures.count, 5);
        assert_eq!(config.fixtures.stem_length, 6);
        assert_eq!(config.mutator.dir_count, 3);
        assert_eq!(config.mutator.remote, "upstream");
        assert_eq!(config.mutator.branch, "main");
    }

    #[test]
    fn test_missing_config_uses_default() {
        let temp_dir = TempDir::new().unwrap();

        assert!(RepogenConfig::find_config_file(temp_dir.path()).is_none());
        assert_eq!(
            RepogenConfig::load_or_default(temp_dir.path()),
            RepogenConfig::default()
        );
    }

    #[test]
    fn test_load_from_file_reports_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[fixtures\ncount = ").unwrap();

        let result = RepogenConfig::load_from_file(&path);
        assert!(matches!(result, Err(Error::TomlParseError { .. })));
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let mut config = RepogenConfig::default();
        config.mutator.content_length_min = 50;
        config.mutator.content_length_max = 5;

        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_empty_extensions() {
        let mut config = RepogenConfig::default();
        config.mutator.extensions.clear();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_sections_validate_independently() {
        let mut config = RepogenConfig::default();
        config.mutator.extensions.clear();
        config.mutator.dir_count = 0;

        assert!(config.fixtures.validate().is_ok());
        assert!(config.mutator.validate().is_err());
        assert!(config.validate().is_err());

        let mut config = RepogenConfig::default();
        config.fixtures.stem_length = 0;

        assert!(config.mutator.validate().is_ok());
        assert!(config.fixtures.validate().is_err());
    }

    #[test]
    fn test_services_dir_layout() {
        let config = FixtureConfig::default();
        let dir = config.services_dir(Path::new("/root"));

        assert_eq!(
            dir,
            PathBuf::from("/root/.harness/orgs/AutoCreate_tests/services")
        );
    }
}
