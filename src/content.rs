use crate::error::{Error, Result};
use crate::utils;
use serde_json::json;
use std::path::PathBuf;

/// Content type used for raw image uploads
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Where the image bytes for a face operation come from.
///
/// Exactly one of the three fields must be set. An image can be referenced
/// by a remote URL (no local IO), read from a local file at call time, or
/// supplied as an in-memory buffer.
#[derive(Debug, Clone, Default)]
pub struct ImageOptions {
    /// Remote URL of the image, passed through to the service
    pub url: Option<String>,

    /// Path to a local image file, read when the call is made
    pub path: Option<PathBuf>,

    /// Raw image bytes already held in memory
    pub stream: Option<Vec<u8>>,
}

impl ImageOptions {
    /// Reference an image by its remote URL
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Read the image from a local file
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Default::default()
        }
    }

    /// Use image bytes already held in memory
    pub fn from_stream(stream: Vec<u8>) -> Self {
        Self {
            stream: Some(stream),
            ..Default::default()
        }
    }

    /// Resolve the options into the payload sent to the service.
    ///
    /// A `url` source becomes a JSON `{"url": ...}` body; `path` and `stream`
    /// sources become a raw `application/octet-stream` body. Resolution is
    /// performed fresh on every call and the bytes are discarded afterwards.
    pub(crate) async fn resolve(self) -> Result<ImagePayload> {
        match (self.url, self.path, self.stream) {
            (Some(url), None, None) => {
                utils::is_valid_url(&url)?;
                Ok(ImagePayload::Json(json!({ "url": url })))
            }
            (None, Some(path), None) => {
                let bytes = tokio::fs::read(&path).await?;
                Ok(ImagePayload::Binary(bytes))
            }
            (None, None, Some(stream)) => Ok(ImagePayload::Binary(stream)),
            _ => Err(Error::InvalidRequest(
                "exactly one of url, path or stream must be provided".to_string(),
            )),
        }
    }
}

/// Resolved image content, ready to be attached to a request
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ImagePayload {
    /// JSON body referencing a remote image
    Json(serde_json::Value),
    /// Raw image bytes sent as `application/octet-stream`
    Binary(Vec<u8>),
}
