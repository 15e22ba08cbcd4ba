//! Configuration management for Quill.
//!
//! Parses `quill.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! `output.dir` supports environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

mod expand;

use std::path::{Path, PathBuf};

use quill_directive::{ConvertOptions, OutputFormat, SerializeOptions, UnresolvedPolicy};
use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "quill.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override output formats.
    pub formats: Option<Vec<OutputFormat>>,
    /// Override output directory.
    pub output_dir: Option<PathBuf>,
}

/// Application configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Output configuration (raw, as parsed from TOML).
    output: OutputConfigRaw,
    /// Conversion configuration.
    pub convert: ConvertConfig,

    /// Resolved output configuration (set after loading).
    #[serde(skip)]
    pub output_resolved: OutputConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Raw output configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct OutputConfigRaw {
    formats: Option<Vec<OutputFormat>>,
    dir: Option<String>,
    xml_declaration: Option<bool>,
}

/// Resolved output configuration.
#[derive(Debug, PartialEq, Eq)]
pub struct OutputConfig {
    /// Formats to generate, in order.
    pub formats: Vec<OutputFormat>,
    /// Directory for generated files. `None` writes to stdout.
    pub dir: Option<PathBuf>,
    /// Whether `DocBook` output starts with an XML declaration.
    pub xml_declaration: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            formats: OutputFormat::ALL.to_vec(),
            dir: None,
            xml_declaration: true,
        }
    }
}

impl OutputConfig {
    /// Serialization options for `format`.
    #[must_use]
    pub fn serialize_options(&self, format: OutputFormat) -> SerializeOptions {
        let options = SerializeOptions::for_format(format);
        match format {
            OutputFormat::Docbook => options.with_xml_declaration(self.xml_declaration),
            OutputFormat::Xhtml => options,
        }
    }
}

/// Conversion configuration.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ConvertConfig {
    /// Handling of nodes no directive is registered for.
    pub on_unresolved: UnresolvedPolicy,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`output.dir`").
        field: String,
        /// Error message (e.g., "${`QUILL_OUT`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `quill.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// CLI settings are applied after loading and path resolution.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails, or
    /// the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Conversion options derived from the configuration.
    #[must_use]
    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions::default()
            .with_formats(self.output_resolved.formats.clone())
            .with_on_unresolved(self.convert.on_unresolved)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let formats = &self.output_resolved.formats;
        if formats.is_empty() {
            return Err(ConfigError::Validation(
                "output.formats cannot be empty".to_owned(),
            ));
        }
        for (idx, format) in formats.iter().enumerate() {
            if formats[..idx].contains(format) {
                return Err(ConfigError::Validation(format!(
                    "output.formats lists {format} more than once"
                )));
            }
        }
        Ok(())
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve(config_dir)?;
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(formats) = &settings.formats {
            self.output_resolved.formats.clone_from(formats);
        }
        if let Some(dir) = &settings.output_dir {
            self.output_resolved.dir = Some(dir.clone());
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Expand environment variables and resolve relative paths against the
    /// config directory.
    fn resolve(&mut self, config_dir: &Path) -> Result<(), ConfigError> {
        let defaults = OutputConfig::default();

        let dir = match &self.output.dir {
            Some(raw) => Some(config_dir.join(expand::expand_env(raw, "output.dir")?)),
            None => None,
        };

        self.output_resolved = OutputConfig {
            formats: self.output.formats.clone().unwrap_or(defaults.formats),
            dir,
            xml_declaration: self
                .output
                .xml_declaration
                .unwrap_or(defaults.xml_declaration),
        };

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn load_str(toml: &str) -> Result<Config, ConfigError> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, toml).unwrap();
        Config::load(Some(&path), None)
    }

    fn assert_validation_error(result: Result<Config, ConfigError>, expected: &str) {
        match result {
            Err(ConfigError::Validation(msg)) => assert!(
                msg.contains(expected),
                "expected '{expected}' in '{msg}'"
            ),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output_resolved, OutputConfig::default());
        assert_eq!(config.convert.on_unresolved, UnresolvedPolicy::Skip);
        assert_eq!(config.output_resolved.formats, OutputFormat::ALL.to_vec());
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config = load_str("").unwrap();
        assert_eq!(config.output_resolved, OutputConfig::default());
        assert!(config.config_path.is_some());
    }

    #[test]
    fn test_parse_full_config() {
        let config = load_str(
            r#"
[output]
formats = ["docbook"]
dir = "build"
xml_declaration = false

[convert]
on_unresolved = "error"
"#,
        )
        .unwrap();

        assert_eq!(config.output_resolved.formats, vec![OutputFormat::Docbook]);
        assert!(config.output_resolved.dir.unwrap().ends_with("build"));
        assert!(!config.output_resolved.xml_declaration);
        assert_eq!(config.convert.on_unresolved, UnresolvedPolicy::Error);
    }

    #[test]
    fn test_dir_resolved_against_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[output]\ndir = \"out\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.output_resolved.dir, Some(dir.path().join("out")));
    }

    #[test]
    fn test_dir_env_expansion_with_default() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("QUILL_TEST_CONFIG_OUT");
        }
        let config = load_str("[output]\ndir = \"${QUILL_TEST_CONFIG_OUT:-generated}\"\n").unwrap();
        assert!(config.output_resolved.dir.unwrap().ends_with("generated"));
    }

    #[test]
    fn test_dir_env_expansion_missing_var() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("QUILL_TEST_CONFIG_MISSING");
        }
        let result = load_str("[output]\ndir = \"${QUILL_TEST_CONFIG_MISSING}\"\n");
        assert!(matches!(result, Err(ConfigError::EnvVar { field, .. }) if field == "output.dir"));
    }

    #[test]
    fn test_dir_literal_dollar_kept() {
        let config = load_str("[output]\ndir = \"build/$1\"\n").unwrap();
        assert!(config.output_resolved.dir.unwrap().ends_with("build/$1"));
    }

    #[test]
    fn test_unknown_format_is_parse_error() {
        let result = load_str("[output]\nformats = [\"pdf\"]\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_unknown_policy_is_parse_error() {
        let result = load_str("[convert]\non_unresolved = \"ignore\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_empty_formats_rejected() {
        assert_validation_error(load_str("[output]\nformats = []\n"), "cannot be empty");
    }

    #[test]
    fn test_duplicate_formats_rejected() {
        assert_validation_error(
            load_str("[output]\nformats = [\"xhtml\", \"docbook\", \"xhtml\"]\n"),
            "xhtml more than once",
        );
    }

    #[test]
    fn test_missing_explicit_config() {
        let result = Config::load(Some(Path::new("/nonexistent/quill.toml")), None);
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_apply_cli_settings_formats() {
        let mut config = Config::default();
        config.apply_cli_settings(&CliSettings {
            formats: Some(vec![OutputFormat::Xhtml]),
            output_dir: None,
        });
        assert_eq!(config.output_resolved.formats, vec![OutputFormat::Xhtml]);
        assert_eq!(config.output_resolved.dir, None);
    }

    #[test]
    fn test_apply_cli_settings_output_dir() {
        let mut config = Config::default();
        config.apply_cli_settings(&CliSettings {
            formats: None,
            output_dir: Some(PathBuf::from("/tmp/quill")),
        });
        assert_eq!(config.output_resolved.dir, Some(PathBuf::from("/tmp/quill")));
        assert_eq!(config.output_resolved.formats, OutputFormat::ALL.to_vec());
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default();
        config.apply_cli_settings(&CliSettings::default());
        assert_eq!(config.output_resolved, OutputConfig::default());
    }

    #[test]
    fn test_cli_settings_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[output]\nformats = [\"docbook\"]\n").unwrap();

        let settings = CliSettings {
            formats: Some(vec![OutputFormat::Xhtml]),
            output_dir: None,
        };
        let config = Config::load(Some(&path), Some(&settings)).unwrap();
        assert_eq!(config.output_resolved.formats, vec![OutputFormat::Xhtml]);
    }

    #[test]
    fn test_convert_options() {
        let config = load_str(
            "[output]\nformats = [\"docbook\", \"xhtml\"]\n[convert]\non_unresolved = \"error\"\n",
        )
        .unwrap();
        let options = config.convert_options();
        assert_eq!(
            options.formats,
            vec![OutputFormat::Docbook, OutputFormat::Xhtml]
        );
        assert_eq!(options.on_unresolved, UnresolvedPolicy::Error);
    }

    #[test]
    fn test_serialize_options_respect_xml_declaration() {
        let output = OutputConfig {
            xml_declaration: false,
            ..OutputConfig::default()
        };
        assert!(!output.serialize_options(OutputFormat::Docbook).xml_declaration);
        assert!(output.serialize_options(OutputFormat::Docbook).self_closing_empty);
        assert!(!output.serialize_options(OutputFormat::Xhtml).xml_declaration);
    }
}
