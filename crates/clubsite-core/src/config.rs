//! Site configuration management.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    error::{CoreError, Result},
    records::RecordKind,
};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteConfig,

    /// Fixture locations.
    #[serde(default)]
    pub data: DataConfig,

    /// Static file server settings.
    #[serde(default)]
    pub server: ServerConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,

    /// Base URL for the site (e.g., "https://gamejam.example.edu").
    pub base_url: String,

    /// Site description for meta tags.
    #[serde(default)]
    pub description: Option<String>,
}

/// Where the JSON fixtures live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory holding the fixture files.
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,

    /// News fixture file name, relative to `dir`.
    #[serde(default = "default_news_file")]
    pub news: String,

    /// Publications fixture file name, relative to `dir`.
    #[serde(default = "default_publications_file")]
    pub publications: String,

    /// Projects fixture file name, relative to `dir`.
    #[serde(default = "default_projects_file")]
    pub projects: String,

    /// People fixture file name, relative to `dir`.
    #[serde(default = "default_people_file")]
    pub people: String,
}

/// Static file server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory containing the built site.
    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,
}

// Default value functions
fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_news_file() -> String {
    "news.json".to_string()
}

fn default_publications_file() -> String {
    "publications.json".to_string()
}

fn default_projects_file() -> String {
    "projects.json".to_string()
}

fn default_people_file() -> String {
    "people.json".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_dist_dir() -> PathBuf {
    PathBuf::from("dist")
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
            news: default_news_file(),
            publications: default_publications_file(),
            projects: default_projects_file(),
            people: default_people_file(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            dist_dir: default_dist_dir(),
        }
    }
}

impl DataConfig {
    /// Full path of the fixture file for a record kind.
    pub fn path_for(&self, kind: RecordKind) -> PathBuf {
        let file = match kind {
            RecordKind::News => &self.news,
            RecordKind::Publications => &self.publications,
            RecordKind::Projects => &self.projects,
            RecordKind::People => &self.people,
        };
        self.dir.join(file)
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration, letting `CLUBSITE__SECTION__KEY` variables override the file.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("CLUBSITE").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.site.title.is_empty() {
            return Err(CoreError::config("site.title cannot be empty"));
        }

        if self.site.base_url.is_empty() {
            return Err(CoreError::config("site.base_url cannot be empty"));
        }

        if self.site.base_url.ends_with('/') {
            tracing::warn!("site.base_url should not have a trailing slash");
        }

        Ok(())
    }

    /// Get the full URL for a path.
    pub fn url_for(&self, path: &str) -> String {
        let base = self.site.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}
