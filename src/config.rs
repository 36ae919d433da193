use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the optional config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".solution-check.toml";

const DEFAULT_API_BASE: &str = "https://api.github.com";
const DEFAULT_EMAIL_DOMAIN: &str = "student.spbu.ru";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration loaded from .solution-check.toml.
/// All fields are optional — the tool works with zero config.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// GitHub-specific settings
    #[serde(default)]
    pub github: GitHubConfig,

    /// Static student roster used by the `roster` command
    #[serde(default)]
    pub roster: RosterConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GitHubConfig {
    /// GitHub API token. If None, Config::load() fills it from GITHUB_TOKEN.
    pub token: Option<String>,

    /// REST API root, overridable for GitHub Enterprise or a local stub.
    pub api_base: Option<String>,
}

impl GitHubConfig {
    pub fn api_base(&self) -> &str {
        self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RosterConfig {
    /// Domain appended to a student's account name to form the email.
    pub email_domain: Option<String>,

    /// Program name -> raw group titles, as listed on the timetable.
    /// A title may hold several comma-separated groups.
    #[serde(default)]
    pub programs: BTreeMap<String, Vec<String>>,

    /// Directory entries for students.
    #[serde(default)]
    pub students: Vec<StudentEntryConfig>,
}

impl RosterConfig {
    pub fn email_domain(&self) -> &str {
        self.email_domain.as_deref().unwrap_or(DEFAULT_EMAIL_DOMAIN)
    }
}

/// One student record as the directory service reports it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentEntryConfig {
    /// Academic group the student belongs to
    pub group: String,
    /// Account name, e.g. "st012345"
    pub cn: Option<String>,
    /// Full name, space separated
    pub display_name: Option<String>,
}

impl Config {
    /// Load configuration from .solution-check.toml in the current directory.
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Config, ConfigError> {
        let path = Path::new(CONFIG_FILE_NAME);
        let mut config = if path.exists() {
            Self::load_from(path)?
        } else {
            Config::default()
        };

        if config.github.token.is_none() {
            if let Ok(token) = std::env::var("GITHUB_TOKEN") {
                config.github.token = Some(token);
            }
        }

        Ok(config)
    }

    /// Load from a specific path (useful for testing).
    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// GitHub token resolved at load time: config file value first,
    /// GITHUB_TOKEN env var otherwise. Does not read the environment itself.
    pub fn github_token(&self) -> Option<String> {
        self.github.token.clone()
    }
}
