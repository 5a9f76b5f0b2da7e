// error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid {setting} value")]
    InvalidValue { setting: &'static str },
    #[error("Invalid choice")]
    InvalidChoice,
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    #[error("Invalid settings: {0}")]
    Validation(#[from] validator::ValidationErrors),
}
