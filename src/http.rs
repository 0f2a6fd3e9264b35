use crate::config::Config;
use crate::content::{ImagePayload, OCTET_STREAM};
use crate::error::{Error, Result};
use reqwest::{Client as ReqwestClient, ClientBuilder, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

/// Constants for API paths
pub mod api_paths {
    /// Path for the face list endpoint family
    pub const FACE_LISTS: &str = "/facelists";
}

/// Header carrying the API key on every request
pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Successful response body, after classification.
///
/// Several acknowledgement operations (delete, update) answer with an empty
/// body; that outcome is kept distinct from a decoded JSON `null`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ResponseBody {
    /// 2xx response with an empty body
    NoContent,
    /// 2xx response decoded as JSON
    Json(Value),
}

impl ResponseBody {
    /// Decode the body into the operation's typed shape
    pub(crate) fn into_json<T: DeserializeOwned>(self) -> Result<T> {
        match self {
            ResponseBody::Json(value) => Ok(serde_json::from_value(value)?),
            ResponseBody::NoContent => Err(Error::InvalidData(
                "expected a JSON payload but the response body was empty".to_string(),
            )),
        }
    }
}

/// HTTP client for making API requests
pub struct HttpClient {
    client: ReqwestClient,
    config: Config,
}

impl HttpClient {
    /// Create a new HTTP client with the given configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let client = ClientBuilder::new()
            .user_agent(concat!("oxfordface-rust-sdk/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.get_timeout_seconds()))
            .build()?;

        Ok(Self { client, config })
    }

    /// Build and send one request, then classify the outcome.
    ///
    /// At most one of `json_body` and `binary_body` may be set. Query pairs
    /// are appended in the order given.
    pub(crate) async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        json_body: Option<&Value>,
        binary_body: Option<Vec<u8>>,
    ) -> Result<ResponseBody> {
        if json_body.is_some() && binary_body.is_some() {
            return Err(Error::InvalidRequest(
                "a request may carry a JSON body or a binary body, not both".to_string(),
            ));
        }

        let url = format!("{}{}", self.config.get_base_url(), path);
        log::debug!("{method} {url}");

        let mut request = self
            .client
            .request(method, &url)
            .header(SUBSCRIPTION_KEY_HEADER, &self.config.api_key)
            .header("Accept", "application/json");

        if !query.is_empty() {
            request = request.query(query);
        }

        if let Some(body) = json_body {
            request = request
                .header("Content-Type", "application/json")
                .json(body);
        }

        if let Some(bytes) = binary_body {
            request = request.header("Content-Type", OCTET_STREAM).body(bytes);
        }

        let response = self.client.execute(request.build()?).await?;
        self.handle_response(response).await
    }

    /// Make a GET request and decode the JSON response
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(Method::GET, path, &[], None, None)
            .await?
            .into_json()
    }

    /// Make a PUT request with a JSON body, expecting an acknowledgement
    pub async fn put_json(&self, path: &str, body: &Value) -> Result<()> {
        self.send(Method::PUT, path, &[], Some(body), None).await?;
        Ok(())
    }

    /// Make a PATCH request with a JSON body, expecting an acknowledgement
    pub async fn patch_json(&self, path: &str, body: &Value) -> Result<()> {
        self.send(Method::PATCH, path, &[], Some(body), None).await?;
        Ok(())
    }

    /// Make a DELETE request, expecting an acknowledgement
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.send(Method::DELETE, path, &[], None, None).await?;
        Ok(())
    }

    /// POST resolved image content, decoding the JSON response
    pub(crate) async fn post_content<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
        payload: ImagePayload,
    ) -> Result<T> {
        let body = match payload {
            ImagePayload::Json(value) => {
                self.send(Method::POST, path, query, Some(&value), None)
                    .await?
            }
            ImagePayload::Binary(bytes) => {
                self.send(Method::POST, path, query, None, Some(bytes))
                    .await?
            }
        };
        body.into_json()
    }

    /// Handle API responses and parse JSON
    async fn handle_response(&self, response: Response) -> Result<ResponseBody> {
        let status = response.status();
        let body = response.bytes().await?;
        log::trace!("response status {status} ({} bytes)", body.len());

        if status.is_success() {
            if body.is_empty() {
                return Ok(ResponseBody::NoContent);
            }
            return Ok(ResponseBody::Json(serde_json::from_slice(&body)?));
        }

        Err(classify_service_error(status, &body))
    }
}

/// Turn a non-2xx response into a typed service error.
fn classify_service_error(status: StatusCode, body: &[u8]) -> Error {
    let raw_message = || {
        let text = String::from_utf8_lossy(body);
        let text = text.trim();
        if text.is_empty() {
            format!("HTTP {status}")
        } else {
            text.to_string()
        }
    };

    if let Ok(value) = serde_json::from_slice::<Value>(body) {
        // Most endpoints wrap the detail as {"error": {"code", "message"}};
        // a few return the pair at the top level.
        let detail = value.get("error").unwrap_or(&value);
        let code = detail
            .get("code")
            .and_then(|c| c.as_str())
            .map(str::to_string);
        let message = detail
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string);

        if code.is_some() || message.is_some() {
            return Error::Service {
                status: status.as_u16(),
                code,
                message: message.unwrap_or_else(raw_message),
            };
        }
    }

    Error::Service {
        status: status.as_u16(),
        code: None,
        message: raw_message(),
    }
}
