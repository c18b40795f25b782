use thiserror::Error;

/// Error enum to provide feedback on simulation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("unknown configuration: {0}")]
    UnknownConfiguration(String),
    #[error("network must contain at least one node")]
    EmptyNetwork,
}
