use config::{Config, Environment, File, Map};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{fs, io};

use crate::core::history::{DEFAULT_TIME_FORMAT, is_valid_time_format};
use crate::core::lookup::{DEFAULT_BASE_URL, LookupConfig};

pub const ENV_PREFIX: &str = "COUNTRY_SEARCH";
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

pub fn get_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME")
            .map(PathBuf::from)
            .map(|h| h.join("Library/Application Support/country-search"))
    }

    #[cfg(target_os = "linux")]
    {
        std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))
            .map(|c| c.join("country-search"))
    }

    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA")
            .map(PathBuf::from)
            .map(|a| a.join("country-search"))
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        std::env::var_os("HOME")
            .map(PathBuf::from)
            .map(|h| h.join(".config/country-search"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub debounce_ms: u64,
    pub leading_edge: bool,
    pub time_format: String,
    pub request_timeout_secs: Option<u64>,
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            leading_edge: false,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            request_timeout_secs: None,
            log_file: None,
        }
    }
}

impl AppConfig {
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(Self::get_config_path().as_deref())
    }

    /// Defaults, then `path` if it exists, then `COUNTRY_SEARCH_*` variables.
    /// Falls back to defaults with a warning when the sources don't parse.
    #[must_use]
    pub fn load_from(path: Option<&Path>) -> Self {
        Self::load_layered(path, None)
    }

    /// Like [`load_from`](Self::load_from), but reads `COUNTRY_SEARCH_*` keys
    /// from `env` instead of the process environment when given.
    fn load_layered(path: Option<&Path>, env: Option<Map<String, String>>) -> Self {
        let mut builder = Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(false));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .source(env),
        );

        let mut config: Self = builder
            .build()
            .and_then(Config::try_deserialize)
            .unwrap_or_else(|e| {
                eprintln!("Warning: Failed to load config: {e}");
                Self::default()
            });

        if !is_valid_time_format(&config.time_format) {
            eprintln!(
                "Warning: Invalid time_format '{}', using '{DEFAULT_TIME_FORMAT}'",
                config.time_format
            );
            config.time_format = DEFAULT_TIME_FORMAT.to_string();
        }

        config
    }

    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        get_config_dir().map(|dir| dir.join("config.toml"))
    }

    pub fn init_default() -> Result<PathBuf, io::Error> {
        let path = Self::get_config_path().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine config directory",
            )
        })?;
        Self::write_template(&path)?;
        Ok(path)
    }

    /// Writes the commented template to `path`, refusing to overwrite.
    pub fn write_template(path: &Path) -> Result<(), io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Config file already exists at {}", path.display()),
            ));
        }

        fs::write(path, include_str!("config.template.toml"))
    }

    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    #[must_use]
    pub fn lookup_config(&self) -> LookupConfig {
        LookupConfig::new(self.base_url.clone())
            .with_timeout(self.request_timeout_secs.map(Duration::from_secs))
    }
}
