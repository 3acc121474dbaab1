use thiserror::Error;

/// Whole-call failures of a fetch cycle. Per-token metadata problems never
/// surface here; they degrade to a missing metadata field instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("ALCHEMY_API_KEY is not configured")]
    MissingApiKey,

    #[error("request to provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// An `error` object in a JSON-RPC response body.
    #[error("{0}")]
    Rpc(String),

    #[error("provider returned HTTP {0}")]
    UnexpectedStatus(reqwest::StatusCode),

    #[error("unexpected provider response: {0}")]
    InvalidResponse(String),
}

pub type Result<T> = std::result::Result<T, Error>;
