//! CLI error types with miette diagnostics.
//!
//! Maps `homeconnect_api::Error` and `ConfigError` into user-facing errors
//! with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use homeconnect_api::Error as ApiError;
use homeconnect_config::ConfigError;

pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const PERMISSION: i32 = 5;
    pub const CONFLICT: i32 = 6;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
    pub const RATE_LIMITED: i32 = 9;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not connect to {url}")]
    #[diagnostic(
        code(homeconnect::connection_failed),
        help("Check your network connection and the configured host.\nHost: {url}")
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Event stream lost: {message}")]
    #[diagnostic(
        code(homeconnect::stream),
        help("Run with --reconnect to resume automatically.")
    )]
    StreamFailed { message: String },

    // ── Authentication ───────────────────────────────────────────────

    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(homeconnect::auth_failed),
        help(
            "The access token is missing, expired or revoked.\n\
             Store a fresh one with: homeconnect config set-token"
        )
    )]
    AuthFailed { message: String },

    #[error("No access token configured for profile '{profile}'")]
    #[diagnostic(
        code(homeconnect::no_credentials),
        help(
            "Store one with: homeconnect config set-token --profile {profile}\n\
             Or set the HOMECONNECT_TOKEN environment variable."
        )
    )]
    NoCredentials { profile: String },

    #[error("Permission denied: {message}")]
    #[diagnostic(
        code(homeconnect::forbidden),
        help("The access token was granted without the scope this request needs.")
    )]
    Forbidden { message: String },

    // ── Resources ────────────────────────────────────────────────────

    #[error("{message}")]
    #[diagnostic(
        code(homeconnect::not_found),
        help("Run: homeconnect appliances to see available appliance ids")
    )]
    NotFound { message: String },

    #[error("{message}")]
    #[diagnostic(
        code(homeconnect::conflict),
        help("The appliance is not in a state that allows this operation.")
    )]
    Conflict { message: String },

    #[error("Rate limited by the API")]
    #[diagnostic(code(homeconnect::rate_limited), help("{advice}"))]
    RateLimited { advice: String },

    // ── API ──────────────────────────────────────────────────────────

    #[error(transparent)]
    #[diagnostic(code(homeconnect::api_error))]
    Api(ApiError),

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(homeconnect::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(homeconnect::profile_not_found),
        help("Available profiles: {available}")
    )]
    ProfileNotFound { name: String, available: String },

    #[error(transparent)]
    #[diagnostic(code(homeconnect::config))]
    Config(ConfigError),

    // ── Timeout ──────────────────────────────────────────────────────

    #[error("No data received for {seconds}s")]
    #[diagnostic(
        code(homeconnect::timeout),
        help("Increase --read-timeout or check the appliance's connectivity.")
    )]
    Timeout { seconds: u64 },

    // ── IO / Serialization ────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } | Self::StreamFailed { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::Forbidden { .. } => exit_code::PERMISSION,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Conflict { .. } => exit_code::CONFLICT,
            Self::RateLimited { .. } => exit_code::RATE_LIMITED,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::Validation { .. } | Self::ProfileNotFound { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── Library error → CliError mapping ─────────────────────────────────

impl From<ApiError> for CliError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Unauthorized(e) => CliError::AuthFailed {
                message: e.to_string(),
            },
            ApiError::Token { message } => CliError::AuthFailed { message },

            ApiError::Forbidden(e) => CliError::Forbidden {
                message: e.to_string(),
            },

            ref not_found @ (ApiError::NotFound(_)
            | ApiError::NoProgramSelected(_)
            | ApiError::NoProgramActive(_)) => CliError::NotFound {
                message: not_found.to_string(),
            },

            ref conflict @ (ApiError::Conflict(_)
            | ApiError::SelectedProgramNotSet(_)
            | ApiError::ActiveProgramNotSet(_)
            | ApiError::WrongOperationState(_)
            | ApiError::ProgramNotAvailable(_)) => CliError::Conflict {
                message: conflict.to_string(),
            },

            ApiError::TooManyRequests {
                error,
                retry_after_secs,
            } => CliError::RateLimited {
                advice: match retry_after_secs {
                    Some(secs) => format!("{error}\nRetry in {secs}s."),
                    None => error.to_string(),
                },
            },

            ApiError::Transport(e) if e.is_connect() => CliError::ConnectionFailed {
                url: e
                    .url()
                    .map_or_else(|| "(unknown)".into(), |u| u.origin().ascii_serialization()),
                source: Box::new(e),
            },

            ApiError::Stream(message) => CliError::StreamFailed { message },

            other => CliError::Api(other),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NoCredentials { profile } => CliError::NoCredentials { profile },
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            other => CliError::Config(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use homeconnect_api::ApiError as ErrorPair;

    use super::*;

    #[test]
    fn api_statuses_map_to_exit_codes() {
        let pair = || ErrorPair::new("SDK.Error.Test", None);

        let cases = [
            (ApiError::Unauthorized(pair()), exit_code::AUTH),
            (ApiError::Forbidden(pair()), exit_code::PERMISSION),
            (ApiError::NoProgramActive(pair()), exit_code::NOT_FOUND),
            (ApiError::WrongOperationState(pair()), exit_code::CONFLICT),
            (
                ApiError::TooManyRequests {
                    error: pair(),
                    retry_after_secs: Some(5),
                },
                exit_code::RATE_LIMITED,
            ),
            (ApiError::Stream("eof".into()), exit_code::CONNECTION),
            (ApiError::InternalServerError(pair()), exit_code::GENERAL),
        ];

        for (err, code) in cases {
            let label = err.to_string();
            assert_eq!(CliError::from(err).exit_code(), code, "{label}");
        }
    }

    #[test]
    fn missing_token_points_at_set_token() {
        let err = CliError::from(ConfigError::NoCredentials {
            profile: "home".into(),
        });
        assert_eq!(err.exit_code(), exit_code::AUTH);
        let help = err.help().map(|h| h.to_string()).unwrap_or_default();
        assert!(help.contains("config set-token --profile home"), "{help}");
    }
}
