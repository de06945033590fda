use thiserror::Error;

/// Configuration error during startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid configuration value for {name}: {message}")]
    InvalidValue { name: String, message: String },
}
