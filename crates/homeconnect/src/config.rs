//! Profile selection and flag overrides on top of `homeconnect-config`.

use std::sync::Arc;

use secrecy::SecretString;

use homeconnect_api::{Client, Language, StaticToken};
use homeconnect_config::{
    ClientSettings, Config, Profile, client_settings_with_token, profile_to_client_settings,
};

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// A ready client plus the per-request settings commands need.
pub struct Session {
    pub client: Client,
    pub language: Option<Language>,
    pub read_timeout_secs: u64,
}

/// Determine the active profile name: flag/env, then config default, then "default".
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Pick the active profile and apply command-line overrides to it.
///
/// A profile that is named explicitly must exist. The implicit default may
/// be absent, in which case flags and environment variables stand alone.
pub fn effective_profile(global: &GlobalOpts, config: &Config) -> Result<(String, Profile), CliError> {
    let name = active_profile_name(global, config);

    let mut profile = match config.profiles.get(&name) {
        Some(profile) => profile.clone(),
        None if global.profile.is_some() => {
            let mut available: Vec<&str> = config.profiles.keys().map(String::as_str).collect();
            available.sort_unstable();
            return Err(CliError::ProfileNotFound {
                name,
                available: if available.is_empty() {
                    "(none)".into()
                } else {
                    available.join(", ")
                },
            });
        }
        None => Profile::default(),
    };

    if let Some(ref host) = global.host {
        profile.host.clone_from(host);
    }
    if let Some(ref language) = global.language {
        profile.language = Some(language.clone());
    }
    if let Some(timeout) = global.timeout {
        profile.timeout = Some(timeout);
    }

    Ok((name, profile))
}

/// Build an API client from the config file, profile and CLI overrides.
pub fn connect(
    global: &GlobalOpts,
    config: &Config,
    read_timeout: Option<u64>,
) -> Result<Session, CliError> {
    let (name, mut profile) = effective_profile(global, config)?;
    if let Some(secs) = read_timeout {
        profile.read_timeout = Some(secs);
    }

    let settings: ClientSettings = match global.token {
        Some(ref token) => client_settings_with_token(
            &profile,
            &config.defaults,
            SecretString::from(token.clone()),
        )?,
        None => profile_to_client_settings(&profile, &name, &config.defaults)?,
    };
    tracing::debug!(profile = %name, host = %settings.host, "resolved client settings");

    let read_timeout_secs = settings.transport.read_timeout.as_secs();
    let client = Client::new(
        settings.host,
        Arc::new(StaticToken::new(settings.access_token)),
        &settings.transport,
    )?;

    Ok(Session {
        client,
        language: settings.language,
        read_timeout_secs,
    })
}
