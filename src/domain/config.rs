use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Deployment config invalid: {0}")]
    ConfigInvalid(String),

    #[error("TOML format error: {0}")]
    Toml(String),
}

fn default_import_extension() -> String {
    ".impex".to_string()
}

/// Settings for one extensions root, read from `deployment.toml`.
///
/// The scripts-subfolder name has no built-in default: the host platform owns
/// that value and must supply it here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DeploymentConfig {
    /// Name of the scripts subfolder under `<extension>/resources/`.
    pub scripts_folder: String,

    /// Filename suffix identifying import files, matched case-insensitively.
    #[serde(default = "default_import_extension")]
    pub import_extension: String,

    /// External command applying one import file; the file path is appended
    /// as the last argument.
    #[serde(default)]
    pub import_command: Option<String>,

    /// Maximum rendered length of a failure's cause chain. Unset or zero
    /// means unlimited.
    #[serde(default)]
    pub stacktrace_max_length: Option<usize>,
}

impl DeploymentConfig {
    pub fn parse_toml(content: &str) -> Result<Self, ConfigError> {
        let config: DeploymentConfig =
            toml::from_str(content).map_err(|e| ConfigError::Toml(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scripts_folder.trim().is_empty() {
            return Err(ConfigError::ConfigInvalid(
                "scripts_folder must not be empty".to_string(),
            ));
        }
        if self.import_extension.trim().is_empty() {
            return Err(ConfigError::ConfigInvalid(
                "import_extension must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_config() {
        let content = r#"
scripts_folder = "update-scripts"
import_command = "impex-import --quiet"
stacktrace_max_length = 4000
"#;
        let config = DeploymentConfig::parse_toml(content).unwrap();
        assert_eq!(config.scripts_folder, "update-scripts");
        assert_eq!(config.import_extension, ".impex");
        assert_eq!(config.import_command.as_deref(), Some("impex-import --quiet"));
        assert_eq!(config.stacktrace_max_length, Some(4000));
    }

    #[test]
    fn optional_fields_use_defaults() {
        let content = r#"
scripts_folder = "release-scripts"
"#;
        let config = DeploymentConfig::parse_toml(content).unwrap();
        assert_eq!(config.import_extension, ".impex");
        assert!(config.import_command.is_none());
        assert!(config.stacktrace_max_length.is_none());
    }

    #[test]
    fn empty_scripts_folder_fails() {
        let content = r#"
scripts_folder = "  "
"#;
        let err = DeploymentConfig::parse_toml(content).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigInvalid(_)));
    }

    #[test]
    fn missing_scripts_folder_fails() {
        let err = DeploymentConfig::parse_toml("").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let content = r#"
scripts_folder = "update-scripts"
scriptsfolder = "typo"
"#;
        let err = DeploymentConfig::parse_toml(content).unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }
}
