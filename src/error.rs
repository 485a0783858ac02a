use std::io;

/// Errors that can occur when configuring or attaching a bolt
#[derive(thiserror::Error, Debug)]
pub enum BoltError {
    #[error("failed to read config file: {0}")]
    ConfigRead(#[from] io::Error),

    #[error("failed to parse config file: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("draw target has no path elements")]
    MissingPathElements,
}
