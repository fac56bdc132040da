//! Blocking HTTP GET of one archive into memory.
//!
//! Uses the curl crate (libcurl). Archives are a few MiB each, so the body is
//! collected in memory and handed straight to extraction; nothing is staged
//! on disk before the unpack step.

use std::fmt;
use std::time::Duration;

/// Error from downloading a single archive (curl failure or HTTP error).
#[derive(Debug)]
pub enum FetchError {
    /// Curl reported an error (DNS, connection, timeout, etc.).
    Curl(curl::Error),
    /// Response had a non-2xx status.
    Http(u32),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Curl(e) => write!(f, "{}", e),
            FetchError::Http(code) => write!(f, "HTTP {}", code),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Curl(e) => Some(e),
            FetchError::Http(_) => None,
        }
    }
}

impl From<curl::Error> for FetchError {
    fn from(e: curl::Error) -> Self {
        FetchError::Curl(e)
    }
}

/// Downloads `url` with a single GET and returns the response body.
///
/// Follows redirects. No retries and no content validation; a bad body shows
/// up as an extraction failure downstream.
pub fn fetch_archive(url: &str) -> Result<Vec<u8>, FetchError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(Duration::from_secs(30))?;
    easy.timeout(Duration::from_secs(600))?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Http(code));
    }

    tracing::debug!(%url, bytes = body.len(), "archive downloaded");
    Ok(body)
}
