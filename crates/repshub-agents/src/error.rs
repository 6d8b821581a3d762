use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AgentError {
    #[error("unknown purchasing agent: {0}")]
    UnknownAgent(String),

    #[error("unknown marketplace platform token: {0}")]
    UnknownPlatform(String),
}
