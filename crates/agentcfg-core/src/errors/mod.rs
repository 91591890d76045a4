use std::error::Error;

/// Base trait for all application errors
pub trait AgentcfgError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Common result type for the application
pub type AgentcfgResult<T> = Result<T, Box<dyn AgentcfgError>>;

/// Failures that must surface to the caller.
///
/// `InvalidEnvVar` is raised while building the base configuration and aborts
/// startup. `InvalidOverride` is raised by the typed accessors when an admin
/// override cannot be coerced to the field's type.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for environment variable {name}: expected {expected}")]
    InvalidEnvVar {
        name: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("Invalid admin override for '{key}': expected {expected}, got {value}")]
    InvalidOverride {
        key: String,
        expected: &'static str,
        value: serde_json::Value,
    },
}

impl AgentcfgError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::InvalidEnvVar { .. } => "CONFIG_INVALID_ENV_VAR",
            ConfigError::InvalidOverride { .. } => "CONFIG_INVALID_OVERRIDE",
        }
    }

    fn is_user_error(&self) -> bool {
        // Both come from operator-supplied values, not from a bug in this crate.
        match self {
            ConfigError::InvalidEnvVar { .. } | ConfigError::InvalidOverride { .. } => true,
        }
    }
}

/// Reasons the admin override document could not be used.
///
/// Absence is not an error; see [`crate::overrides::AdminOverrides::read_document`].
#[derive(Debug, thiserror::Error)]
pub enum OverrideError {
    #[error("Failed to read admin config '{path}': {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Admin config '{path}' is not valid JSON: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Admin config '{path}' must contain a JSON object at the top level")]
    NotAnObject { path: String },
}

impl AgentcfgError for OverrideError {
    fn error_code(&self) -> &'static str {
        match self {
            OverrideError::Unreadable { .. } => "OVERRIDE_UNREADABLE",
            OverrideError::Malformed { .. } => "OVERRIDE_MALFORMED",
            OverrideError::NotAnObject { .. } => "OVERRIDE_NOT_AN_OBJECT",
        }
    }
}
