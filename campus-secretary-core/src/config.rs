//! Global Campus Secretary configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{SecretaryError, SecretaryResult};
use crate::event::{Color, DEFAULT_COLOR, PALETTE};
use crate::invitation::DEFAULT_DEPARTMENTS;

/// Offices listed in the calendar sidebar.
pub const DEFAULT_OFFICES: [&str; 7] = ["OVCAA", "OC", "NRK", "HR", "ICTO", "BUDJET", "SSC"];

fn default_departments() -> Vec<String> {
    DEFAULT_DEPARTMENTS.iter().map(|d| d.to_string()).collect()
}

fn default_offices() -> Vec<String> {
    DEFAULT_OFFICES.iter().map(|o| o.to_string()).collect()
}

fn default_palette() -> Vec<Color> {
    PALETTE.iter().filter_map(|c| c.parse().ok()).collect()
}

/// Configuration at ~/.config/campus-secretary/config.toml
///
/// Every key is optional; a missing file means all defaults.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SecretaryConfig {
    #[serde(default = "default_departments")]
    pub departments: Vec<String>,

    #[serde(default = "default_offices")]
    pub offices: Vec<String>,

    #[serde(default)]
    pub default_color: Color,

    #[serde(default = "default_palette")]
    pub palette: Vec<Color>,
}

impl Default for SecretaryConfig {
    fn default() -> Self {
        SecretaryConfig {
            departments: default_departments(),
            offices: default_offices(),
            default_color: Color::default(),
            palette: default_palette(),
        }
    }
}

impl SecretaryConfig {
    pub fn config_path() -> SecretaryResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| SecretaryError::Config("Could not determine config directory".into()))?
            .join("campus-secretary");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, falling back to defaults if absent.
    pub fn load() -> SecretaryResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> SecretaryResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: SecretaryConfig = toml::from_str(&content)
            .map_err(|e| SecretaryError::Config(format!("{}: {e}", path.display())))?;

        if config.departments.is_empty() {
            return Err(SecretaryError::Config(
                "departments must list at least one department".into(),
            ));
        }

        Ok(config)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> SecretaryResult<()> {
        let contents = format!(
            "\
# Campus Secretary configuration

# Departments invited to meetings:
# departments = [{}]

# Offices listed in the sidebar:
# offices = [{}]

# Color for new meetings on the calendar screen:
# default_color = \"{}\"

# Swatches on the add-schedule screen:
# palette = [{}]
",
            quoted(&DEFAULT_DEPARTMENTS),
            quoted(&DEFAULT_OFFICES),
            DEFAULT_COLOR,
            quoted(&PALETTE),
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                SecretaryError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| SecretaryError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

fn quoted(items: &[&str]) -> String {
    items
        .iter()
        .map(|i| format!("\"{i}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_means_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SecretaryConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, SecretaryConfig::default());
        assert_eq!(config.offices.len(), 7);
        assert_eq!(config.default_color.as_str(), "#3b82f6");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "departments = [\"CAS\", \"CCS\"]\ndefault_color = \"#F00\"\n").unwrap();

        let config = SecretaryConfig::load_from(&path).unwrap();
        assert_eq!(config.departments, vec!["CAS", "CCS"]);
        assert_eq!(config.default_color.as_str(), "#ff0000");
        assert_eq!(config.palette, default_palette());
    }

    #[test]
    fn invalid_color_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "default_color = \"blue\"\n").unwrap();

        assert!(matches!(
            SecretaryConfig::load_from(&path),
            Err(SecretaryError::Config(_))
        ));
    }

    #[test]
    fn empty_department_list_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "departments = []\n").unwrap();

        assert!(SecretaryConfig::load_from(&path).is_err());
    }

    #[test]
    fn default_config_file_parses_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        SecretaryConfig::create_default_config(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("# departments = [\"CAS\""));

        let config = SecretaryConfig::load_from(&path).unwrap();
        assert_eq!(config, SecretaryConfig::default());
    }
}
