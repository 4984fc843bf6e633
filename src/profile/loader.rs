//! Profile document loading with a built-in fallback.
//!
//! ERROR HANDLING
//! ==============
//! `load` never fails. Any read, fetch, parse or shape error is logged and
//! replaced by the embedded default document, so callers never observe a
//! load error. `try_load` exposes the underlying result for tests.

use std::fmt;
use std::path::PathBuf;

use serde::Deserialize;
use serde_json::Value;
use tracing::{error, info, warn};

use super::ProfileDocument;

const DEFAULT_PROFILE_JSON: &str = include_str!("default_profile.json");

// =============================================================================
// SOURCE
// =============================================================================

/// Where the profile document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileSource {
    File(PathBuf),
    Url(String),
}

impl ProfileSource {
    /// `http://` and `https://` locations are fetched; anything else is a path.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Self::Url(trimmed.to_string())
        } else {
            Self::File(PathBuf::from(trimmed))
        }
    }
}

impl fmt::Display for ProfileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ProfileLoadError {
    #[error("read failed: {0}")]
    Read(#[from] std::io::Error),
    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("parse failed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("document root is not an object")]
    Shape,
}

// =============================================================================
// LOADING
// =============================================================================

/// Load the profile document, substituting the built-in default on failure.
pub async fn load(source: &ProfileSource) -> ProfileDocument {
    match try_load(source).await {
        Ok(doc) => {
            info!(%source, nicknames = doc.nicknames.len(), "profile document loaded");
            doc
        }
        Err(e) => {
            warn!(error = %e, %source, "profile document unavailable; using built-in default");
            default_document()
        }
    }
}

/// Load the profile document, surfacing the failure.
pub async fn try_load(source: &ProfileSource) -> Result<ProfileDocument, ProfileLoadError> {
    let bytes = match source {
        ProfileSource::File(path) => tokio::fs::read(path).await?,
        ProfileSource::Url(url) => reqwest::get(url.as_str())
            .await?
            .error_for_status()?
            .bytes()
            .await?
            .to_vec(),
    };
    parse_document(&bytes)
}

/// Parse raw JSON bytes into a document. The root must be an object.
pub fn parse_document(bytes: &[u8]) -> Result<ProfileDocument, ProfileLoadError> {
    let value: Value = serde_json::from_slice(bytes)?;
    if !value.is_object() {
        return Err(ProfileLoadError::Shape);
    }
    Ok(ProfileDocument::deserialize(value)?)
}

/// The fixed document used whenever the external one cannot be loaded.
#[must_use]
pub fn default_document() -> ProfileDocument {
    parse_document(DEFAULT_PROFILE_JSON.as_bytes()).unwrap_or_else(|e| {
        error!(error = %e, "built-in profile document is invalid");
        ProfileDocument::default()
    })
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod tests;
