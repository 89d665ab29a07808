//! # cicsrs Profile Configuration
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! Connection profiles let a user keep host, credentials and default
//! region/plex for each CICS environment in a TOML file instead of repeating
//! them as flags:
//!
//! ```toml
//! default_profile = "dev"
//!
//! [profiles.dev]
//! host = "cics.example.com"
//! port = 1490
//! user = "IBMUSER"
//! password = "secret"
//! protocol = "https"
//! reject_unauthorized = false
//! region_name = "CICSRGN1"
//! cics_plex = "PLEX1"
//! ```
//!
//! ## Sources
//!
//! 1. `CICSRS_CONFIG=<path>`: only that file is read, and it must exist.
//! 2. Otherwise the user file (`<config dir>/cicsrs/config.toml`) merged with
//!    the nearest project `.cicsrs.toml`, searched from the current directory
//!    upwards and stopping at a `.git` directory. Project profiles replace user
//!    profiles of the same name.
//!
//! Values from flags and `CICS_*` environment variables always win over the
//! selected profile; that merge happens in `common::connection`.
//!
use crate::core::error::{CicsrsError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Environment variable pointing at an explicit profile file.
pub const CONFIG_ENV: &str = "CICSRS_CONFIG";
const PROJECT_CONFIG_FILENAME: &str = ".cicsrs.toml";
const USER_CONFIG_FILENAME: &str = "config.toml";

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Profile used when `--cics-profile` is not given.
    pub default_profile: Option<String>,
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
}

/// One named set of connection settings. Every field is optional.
#[derive(Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub protocol: Option<String>,
    pub reject_unauthorized: Option<bool>,
    pub region_name: Option<String>,
    pub cics_plex: Option<String>,
}

// Profiles are logged at debug level; never print the password.
impl fmt::Debug for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Profile")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("protocol", &self.protocol)
            .field("reject_unauthorized", &self.reject_unauthorized)
            .field("region_name", &self.region_name)
            .field("cics_plex", &self.cics_plex)
            .finish()
    }
}

impl Config {
    /// Picks the profile to use: the requested one (which must exist), else
    /// `default_profile`, else the only profile when exactly one is defined.
    pub fn select_profile(&self, requested: Option<&str>) -> Result<Option<&Profile>> {
        if let Some(name) = requested {
            return match self.profiles.get(name) {
                Some(profile) => Ok(Some(profile)),
                None => Err(anyhow!(CicsrsError::ProfileNotFound {
                    name: name.to_string(),
                    available: self.profile_names(),
                })),
            };
        }
        if let Some(name) = &self.default_profile {
            debug!("Using default profile '{}'", name);
            return Ok(self.profiles.get(name));
        }
        if self.profiles.len() == 1 {
            return Ok(self.profiles.values().next());
        }
        Ok(None)
    }

    fn profile_names(&self) -> String {
        if self.profiles.is_empty() {
            "(none)".to_string()
        } else {
            self.profiles.keys().cloned().collect::<Vec<_>>().join(", ")
        }
    }
}

pub fn load_config() -> Result<Config> {
    let config = match std::env::var(CONFIG_ENV) {
        Ok(path) if !path.trim().is_empty() => load_explicit_config(&path)?,
        _ => {
            let user_config = load_user_config()?;
            let project_config = load_project_config()?;
            merge_configs(user_config.unwrap_or_default(), project_config)
        }
    };
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_explicit_config(path: &str) -> Result<Config> {
    let path = PathBuf::from(shellexpand::tilde(path).into_owned());
    if !path.is_file() {
        return Err(anyhow!(CicsrsError::Config(format!(
            "{} points to '{}', which is not a file.",
            CONFIG_ENV,
            path.display()
        ))));
    }
    info!("Loading configuration from {}: {}", CONFIG_ENV, path.display());
    load_config_from_path(&path)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "cicsrs", "cicsrs") {
        let config_path = proj_dirs.config_dir().join(USER_CONFIG_FILENAME);
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(path) = find_project_config_path(&current_dir) {
        info!("Loading project configuration from: {}", path.display());
        load_config_from_path(&path).map(Some)
    } else {
        debug!("No {} found in current directory or ancestors.", PROJECT_CONFIG_FILENAME);
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project = match project {
        Some(p) => p,
        None => return user,
    };
    let mut profiles = user.profiles;
    profiles.extend(project.profiles);
    Config {
        default_profile: project.default_profile.or(user.default_profile),
        profiles,
    }
}

fn validate_config(config: &Config) -> Result<()> {
    for (name, profile) in &config.profiles {
        if let Some(protocol) = &profile.protocol {
            if protocol.parse::<cicsrs_cmci::Protocol>().is_err() {
                return Err(anyhow!(CicsrsError::Config(format!(
                    "Profile '{}' has protocol '{}'. Expected http or https.",
                    name, protocol
                ))));
            }
        }
        if profile.port == Some(0) {
            return Err(anyhow!(CicsrsError::Config(format!(
                "Profile '{}' has port 0.",
                name
            ))));
        }
    }
    if let Some(default) = &config.default_profile {
        if !config.profiles.contains_key(default) {
            return Err(anyhow!(CicsrsError::Config(format!(
                "default_profile '{}' does not name a defined profile.",
                default
            ))));
        }
    }
    Ok(())
}
