use std::env;

use crate::constants::ALCHEMY_BASE_URL;
use crate::error::{Error, Result};

/// Provider key, read from the environment at first use so a missing key
/// shows up as a fetch error rather than a startup crash. Binaries call
/// `dotenv().ok()` before anything touches the chain.
pub fn alchemy_api_key() -> Result<String> {
    env::var("ALCHEMY_API_KEY").map_err(|_| Error::MissingApiKey)
}

/// Full endpoint URL, `{base}/{key}`.
pub fn alchemy_url() -> Result<String> {
    Ok(format!("{}/{}", ALCHEMY_BASE_URL, alchemy_api_key()?))
}
