//! Configuration management for mdsite.
//!
//! Parses `mdsite.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. All keys are
//! optional; defaults produce the conventional project layout (`content/`,
//! `template.html`, `static/`, `public/`).
//!
//! CLI settings can be applied during load via [`CliSettings`].

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "mdsite.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override content source directory.
    pub content_dir: Option<PathBuf>,
    /// Override page template path.
    pub template: Option<PathBuf>,
    /// Override static assets directory.
    pub static_dir: Option<PathBuf>,
    /// Override output directory.
    pub output_dir: Option<PathBuf>,
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site configuration (paths are relative strings from TOML).
    site: SiteConfigRaw,

    /// Resolved site configuration (set after loading).
    #[serde(skip)]
    pub site_resolved: SiteConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw site configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SiteConfigRaw {
    content_dir: Option<String>,
    template: Option<String>,
    static_dir: Option<String>,
    output_dir: Option<String>,
}

/// Resolved site configuration with all paths anchored to a base directory.
#[derive(Debug, Default, Clone)]
pub struct SiteConfig {
    /// Source directory for markdown content.
    pub content_dir: PathBuf,
    /// Page template file with `{{ Title }}` and `{{ Content }}` placeholders.
    pub template: PathBuf,
    /// Static assets directory, copied verbatim into the output.
    pub static_dir: PathBuf,
    /// Output directory for the generated site.
    pub output_dir: PathBuf,
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
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise,
    /// searches for `mdsite.toml` in the current directory and parents,
    /// falling back to defaults anchored to the current directory.
    ///
    /// CLI settings are applied after loading and path resolution, so CLI
    /// arguments take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `config_path` doesn't exist or
    /// parsing fails.
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
        }

        Ok(config)
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Resolve raw relative paths against the config file's directory.
    fn resolve_paths(&mut self, base: &Path) {
        let defaults = Self::default_with_base(base).site_resolved;
        self.site_resolved = SiteConfig {
            content_dir: self
                .site
                .content_dir
                .as_ref()
                .map_or(defaults.content_dir, |dir| base.join(dir)),
            template: self
                .site
                .template
                .as_ref()
                .map_or(defaults.template, |file| base.join(file)),
            static_dir: self
                .site
                .static_dir
                .as_ref()
                .map_or(defaults.static_dir, |dir| base.join(dir)),
            output_dir: self
                .site
                .output_dir
                .as_ref()
                .map_or(defaults.output_dir, |dir| base.join(dir)),
        };
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(content_dir) = &settings.content_dir {
            self.site_resolved.content_dir.clone_from(content_dir);
        }
        if let Some(template) = &settings.template {
            self.site_resolved.template.clone_from(template);
        }
        if let Some(static_dir) = &settings.static_dir {
            self.site_resolved.static_dir.clone_from(static_dir);
        }
        if let Some(output_dir) = &settings.output_dir {
            self.site_resolved.output_dir.clone_from(output_dir);
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
            site: SiteConfigRaw::default(),
            site_resolved: SiteConfig {
                content_dir: base.join("content"),
                template: base.join("template.html"),
                static_dir: base.join("static"),
                output_dir: base.join("public"),
            },
            config_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default_with_base(Path::new("/project"));
        assert_eq!(config.site_resolved.content_dir, Path::new("/project/content"));
        assert_eq!(
            config.site_resolved.template,
            Path::new("/project/template.html")
        );
        assert_eq!(config.site_resolved.static_dir, Path::new("/project/static"));
        assert_eq!(config.site_resolved.output_dir, Path::new("/project/public"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let config_file = dir.path().join("mdsite.toml");
        fs::write(
            &config_file,
            "[site]\ncontent_dir = \"docs\"\noutput_dir = \"out\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&config_file), None).unwrap();
        assert_eq!(config.site_resolved.content_dir, dir.path().join("docs"));
        assert_eq!(config.site_resolved.output_dir, dir.path().join("out"));
        // Unset keys fall back to defaults relative to the config dir.
        assert_eq!(
            config.site_resolved.template,
            dir.path().join("template.html")
        );
        assert_eq!(config.config_path.as_deref(), Some(config_file.as_path()));
    }

    #[test]
    fn test_explicit_path_not_found() {
        let result = Config::load(Some(Path::new("/nonexistent/mdsite.toml")), None);
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_file = dir.path().join("mdsite.toml");
        fs::write(&config_file, "not [valid toml").unwrap();

        let result = Config::load(Some(&config_file), None);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_cli_settings_override() {
        let dir = TempDir::new().unwrap();
        let config_file = dir.path().join("mdsite.toml");
        fs::write(&config_file, "[site]\ncontent_dir = \"docs\"\n").unwrap();

        let settings = CliSettings {
            content_dir: Some(PathBuf::from("/override/content")),
            output_dir: Some(PathBuf::from("/override/out")),
            ..CliSettings::default()
        };
        let config = Config::load(Some(&config_file), Some(&settings)).unwrap();
        assert_eq!(
            config.site_resolved.content_dir,
            Path::new("/override/content")
        );
        assert_eq!(config.site_resolved.output_dir, Path::new("/override/out"));
        // Untouched settings keep file/default values.
        assert_eq!(config.site_resolved.static_dir, dir.path().join("static"));
    }

    #[test]
    fn test_empty_config_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config_file = dir.path().join("mdsite.toml");
        fs::write(&config_file, "").unwrap();

        let config = Config::load(Some(&config_file), None).unwrap();
        assert_eq!(config.site_resolved.content_dir, dir.path().join("content"));
    }
}
