//! # Connection Resolution
//!
//! File: cli/src/common/connection.rs
//!
//! ## Overview
//!
//! Turns the global connection flags into a live [`Session`] plus the default
//! region and CICSplex for the command. Each setting is taken from the first
//! source that has it:
//!
//! 1. the command-line flag,
//! 2. its `CICS_*` environment variable (handled by clap),
//! 3. the selected profile,
//! 4. the built-in default (`https`, certificates verified).
//!
//! Only the host is mandatory here. A missing region is left for the library
//! to report, so the error names the field the way every other required
//! parameter does.
//!
use crate::core::config::{self, Profile};
use crate::core::error::{CicsrsError, Result};
use anyhow::anyhow;
use cicsrs_cmci::{AuthType, Protocol, Session, SessionConfig};
use clap::Args;
use tracing::debug;

/// Connection flags accepted by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// Named profile from the cicsrs configuration file.
    #[arg(long = "cics-profile", global = true, value_name = "NAME")]
    pub cics_profile: Option<String>,

    /// CMCI host name.
    #[arg(long, global = true, env = "CICS_HOST")]
    pub host: Option<String>,

    /// CMCI port.
    #[arg(long, global = true, env = "CICS_PORT")]
    pub port: Option<u16>,

    #[arg(long, global = true, env = "CICS_USER")]
    pub user: Option<String>,

    #[arg(long, global = true, env = "CICS_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// http or https.
    #[arg(long, global = true, env = "CICS_PROTOCOL")]
    pub protocol: Option<String>,

    /// Reject self-signed or otherwise untrusted server certificates.
    #[arg(long = "reject-unauthorized", global = true, value_name = "BOOL")]
    pub reject_unauthorized: Option<bool>,

    /// CICS region targeted by the command.
    #[arg(long = "region-name", global = true, env = "CICS_REGION_NAME")]
    pub region_name: Option<String>,

    /// CICSplex containing the region.
    #[arg(long = "cics-plex", global = true, env = "CICS_PLEX")]
    pub cics_plex: Option<String>,
}

/// Session settings plus the region/plex the command applies to.
#[derive(Debug, Clone)]
pub struct Resolved {
    pub session: SessionConfig,
    pub region_name: Option<String>,
    pub cics_plex: Option<String>,
}

/// A ready-to-use session and its default scope.
#[derive(Debug)]
pub struct Target {
    pub session: Session,
    pub region_name: Option<String>,
    pub cics_plex: Option<String>,
}

/// Loads the profile file, merges it with the flags and opens a session.
pub fn connect(args: &ConnectionArgs) -> Result<Target> {
    let config = config::load_config()?;
    let profile = config.select_profile(args.cics_profile.as_deref())?;
    let resolved = resolve(args, profile)?;
    debug!("Resolved connection: {:?}", resolved);
    let session = Session::new(resolved.session)?;
    Ok(Target {
        session,
        region_name: resolved.region_name,
        cics_plex: resolved.cics_plex,
    })
}

/// Merges flags (already including env values) over an optional profile.
pub fn resolve(args: &ConnectionArgs, profile: Option<&Profile>) -> Result<Resolved> {
    let empty = Profile::default();
    let profile = profile.unwrap_or(&empty);

    let host = pick(&args.host, &profile.host).ok_or_else(|| {
        anyhow!(CicsrsError::MissingConnectionSetting {
            setting: "host",
            env: "CICS_HOST",
        })
    })?;

    let protocol = match pick(&args.protocol, &profile.protocol) {
        Some(value) => value.parse::<Protocol>().map_err(|e| {
            anyhow!(CicsrsError::InvalidSetting {
                setting: "protocol",
                message: e.to_string(),
            })
        })?,
        None => Protocol::default(),
    };

    let port = args.port.or(profile.port);
    if port == Some(0) {
        return Err(anyhow!(CicsrsError::InvalidSetting {
            setting: "port",
            message: "port must be between 1 and 65535".to_string(),
        }));
    }

    let user = pick(&args.user, &profile.user);
    let mut session = SessionConfig::new(&host);
    session.port = port;
    session.protocol = protocol;
    session.auth_type = if user.is_some() {
        AuthType::Basic
    } else {
        AuthType::None
    };
    session.user = user;
    session.password = pick(&args.password, &profile.password);
    session.reject_unauthorized = args
        .reject_unauthorized
        .or(profile.reject_unauthorized)
        .unwrap_or(true);

    Ok(Resolved {
        session,
        region_name: pick(&args.region_name, &profile.region_name),
        cics_plex: pick(&args.cics_plex, &profile.cics_plex),
    })
}

// Blank flag values fall through to the profile.
fn pick(flag: &Option<String>, profile: &Option<String>) -> Option<String> {
    flag.as_ref()
        .filter(|v| !v.trim().is_empty())
        .or(profile.as_ref().filter(|v| !v.trim().is_empty()))
        .cloned()
}
