use thiserror::Error;

use crate::digitalocean::AccountError;
use crate::flow::FlowError;

#[derive(Error, Debug)]
pub enum DoCreateError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("DigitalOcean API error: {0}")]
    Account(#[from] AccountError),

    #[error("{0}")]
    Flow(#[from] FlowError),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] inquire::InquireError),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("No DigitalOcean access token - pass --token or set DIGITALOCEAN_TOKEN")]
    MissingToken,

    #[error("No region selected")]
    NoSelection,

    #[error("Failed to serialize output: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration file {path}: {message}")]
    ParsingFailed { path: String, message: String },

    #[error("Invalid messages file: {0}")]
    InvalidMessages(String),

    #[error("Failed to write configuration: {0}")]
    WriteFailed(String),
}

pub type Result<T> = std::result::Result<T, DoCreateError>;
