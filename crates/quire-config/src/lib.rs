//! Configuration management for Quire.
//!
//! Parses `quire.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.title`
//! - `site.stylesheet`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override content source directory.
    pub source_dir: Option<PathBuf>,
    /// Override output directory.
    pub output_dir: Option<PathBuf>,
    /// Override stylesheet path.
    pub stylesheet: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "quire.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteConfig,
    /// Content configuration (paths are relative strings from TOML).
    content: ContentConfigRaw,
    /// Output configuration (paths are relative strings from TOML).
    output: OutputConfigRaw,

    /// Resolved content configuration (set after loading).
    #[serde(skip)]
    pub content_resolved: ContentConfig,
    /// Resolved output configuration (set after loading).
    #[serde(skip)]
    pub output_resolved: OutputConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site-wide settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Title of the index page.
    pub title: String,
    /// Stylesheet path referenced from every page, passed through unvalidated.
    pub stylesheet: String,
    /// Whether to generate the index page.
    pub index: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Index".to_owned(),
            stylesheet: "style.css".to_owned(),
            index: true,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ContentConfigRaw {
    source_dir: Option<String>,
}

/// Resolved content configuration with absolute paths.
#[derive(Debug, Default)]
pub struct ContentConfig {
    /// Directory holding one TOML file per document.
    pub source_dir: PathBuf,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct OutputConfigRaw {
    dir: Option<String>,
}

/// Resolved output configuration with absolute paths.
#[derive(Debug, Default)]
pub struct OutputConfig {
    /// Directory rendered pages are written to.
    pub dir: PathBuf,
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
        /// Config field path (e.g., "`site.stylesheet`").
        field: String,
        /// Error message (e.g., "${`STYLESHEET`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `quire.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
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
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.content_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(output_dir) = &settings.output_dir {
            self.output_resolved.dir.clone_from(output_dir);
        }
        if let Some(stylesheet) = &settings.stylesheet {
            self.site.stylesheet.clone_from(stylesheet);
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

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfig::default(),
            content: ContentConfigRaw::default(),
            output: OutputConfigRaw::default(),
            content_resolved: ContentConfig {
                source_dir: base.join("content"),
            },
            output_resolved: OutputConfig {
                dir: base.join("public"),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before validation
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file and after applying CLI
    /// settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.title, "site.title")?;
        require_non_empty(&self.site.stylesheet, "site.stylesheet")?;
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.title = expand::expand_env(&self.site.title, "site.title")?;
        self.site.stylesheet = expand::expand_env(&self.site.stylesheet, "site.stylesheet")?;
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.content_resolved = ContentConfig {
            source_dir: resolve(self.content.source_dir.as_deref(), "content"),
        };
        self.output_resolved = OutputConfig {
            dir: resolve(self.output.dir.as_deref(), "public"),
        };
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILENAME);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));

        assert_eq!(config.site.title, "Index");
        assert_eq!(config.site.stylesheet, "style.css");
        assert!(config.site.index);
        assert_eq!(
            config.content_resolved.source_dir,
            PathBuf::from("/test/content")
        );
        assert_eq!(config.output_resolved.dir, PathBuf::from("/test/public"));
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config.site.title, "Index");
        assert_eq!(config.site.stylesheet, "style.css");
        assert!(config.site.index);
    }

    #[test]
    fn test_parse_site_config() {
        let toml = r#"
[site]
title = "Notes on C#"
stylesheet = "../assets/site.css"
index = false
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.site.title, "Notes on C#");
        assert_eq!(config.site.stylesheet, "../assets/site.css");
        assert!(!config.site.index);
    }

    #[test]
    fn test_load_resolves_paths_relative_to_config() {
        let temp = tempfile::tempdir().unwrap();
        let path = write_config(
            temp.path(),
            r#"
[content]
source_dir = "articles"

[output]
dir = "dist/blog"
"#,
        );

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(
            config.content_resolved.source_dir,
            temp.path().join("articles")
        );
        assert_eq!(config.output_resolved.dir, temp.path().join("dist/blog"));
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_defaults_paths_relative_to_config() {
        let temp = tempfile::tempdir().unwrap();
        let path = write_config(temp.path(), "");

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(
            config.content_resolved.source_dir,
            temp.path().join("content")
        );
        assert_eq!(config.output_resolved.dir, temp.path().join("public"));
    }

    #[test]
    fn test_load_missing_explicit_config() {
        let temp = tempfile::tempdir().unwrap();
        let missing = temp.path().join("missing.toml");

        let err = Config::load(Some(&missing), None).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound(path) if path == missing));
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp = tempfile::tempdir().unwrap();
        let path = write_config(temp.path(), "[site\ntitle = ");

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_rejects_empty_stylesheet() {
        let temp = tempfile::tempdir().unwrap();
        let path = write_config(temp.path(), "[site]\nstylesheet = \"\"\n");

        let err = Config::load(Some(&path), None).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Configuration error: site.stylesheet cannot be empty"
        );
    }

    #[test]
    fn test_load_expands_env_default() {
        let temp = tempfile::tempdir().unwrap();
        let path = write_config(
            temp.path(),
            "[site]\nstylesheet = \"${QUIRE_TEST_SURELY_UNSET_STYLESHEET:-theme.css}\"\n",
        );

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.site.stylesheet, "theme.css");
    }

    #[test]
    fn test_load_unset_env_var() {
        let temp = tempfile::tempdir().unwrap();
        let path = write_config(
            temp.path(),
            "[site]\ntitle = \"${QUIRE_TEST_SURELY_UNSET_TITLE}\"\n",
        );

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { field, .. } if field == "site.title"));
    }

    #[test]
    fn test_cli_settings_override_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = write_config(
            temp.path(),
            r#"
[site]
stylesheet = "file.css"

[content]
source_dir = "articles"
"#,
        );
        let settings = CliSettings {
            source_dir: Some(PathBuf::from("/override/content")),
            output_dir: Some(PathBuf::from("/override/out")),
            stylesheet: Some("cli.css".to_owned()),
        };

        let config = Config::load(Some(&path), Some(&settings)).unwrap();

        assert_eq!(
            config.content_resolved.source_dir,
            PathBuf::from("/override/content")
        );
        assert_eq!(config.output_resolved.dir, PathBuf::from("/override/out"));
        assert_eq!(config.site.stylesheet, "cli.css");
    }

    #[test]
    fn test_cli_settings_partial_override() {
        let temp = tempfile::tempdir().unwrap();
        let path = write_config(temp.path(), "[output]\ndir = \"site\"\n");
        let settings = CliSettings {
            stylesheet: Some("cli.css".to_owned()),
            ..CliSettings::default()
        };

        let config = Config::load(Some(&path), Some(&settings)).unwrap();

        assert_eq!(config.output_resolved.dir, temp.path().join("site"));
        assert_eq!(config.site.stylesheet, "cli.css");
    }

    #[test]
    fn test_cli_empty_stylesheet_rejected() {
        let temp = tempfile::tempdir().unwrap();
        let path = write_config(temp.path(), "");
        let settings = CliSettings {
            stylesheet: Some(String::new()),
            ..CliSettings::default()
        };

        let err = Config::load(Some(&path), Some(&settings)).unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_bundled_site_config() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../site/quire.toml");

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.site.title, "Notes on C#");
        assert!(config.content_resolved.source_dir.ends_with("content"));
    }
}
