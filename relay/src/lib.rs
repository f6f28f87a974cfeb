//! Contact-form relay client.
//!
//! The site has no backend of its own: the contact form is posted as
//! `multipart/form-data` to a third-party relay (Web3Forms by default), which
//! forwards the message by email and answers with a small JSON document:
//!
//! ```json
//! { "success": true, "message": "Email sent successfully!" }
//! ```
//!
//! Only HTTP 200 counts as delivered. Every other outcome is a [`RelayError`];
//! the relay's own `message` is kept for logging.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::multipart::Form;
use serde::Deserialize;
use thiserror::Error;

/// Canonical Web3Forms submission endpoint.
pub const WEB3FORMS_SUBMIT_URL: &str = "https://api.web3forms.com/submit";

/// Form field carrying the relay access key.
pub const ACCESS_KEY_FIELD: &str = "access_key";

const CONNECT_TIMEOUT_SECS: u64 = 10;

// Relay replies are a handful of bytes; anything larger is not a relay reply.
const MAX_RESPONSE_BYTES: usize = 64 * 1024;

/// Decoded relay reply.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct RelayResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to form relay failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("form relay returned an unreadable response (HTTP {status}): {reason}")]
    Decode { status: u16, reason: String },
    #[error("form relay rejected the submission (HTTP {status}): {}", reason(message.as_deref()))]
    Rejected {
        status: u16,
        message: Option<String>,
    },
}

fn reason(message: Option<&str>) -> &str {
    message.unwrap_or("Failed to send message")
}

impl RelayError {
    /// Message reported by the relay itself, if it sent one.
    #[must_use]
    pub fn relay_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// Posts contact-form submissions to the relay.
#[derive(Clone)]
pub struct RelayClient {
    http: reqwest::Client,
    endpoint: String,
    access_key: Option<String>,
}

// Manual Debug impl to prevent leaking the access key in logs.
impl std::fmt::Debug for RelayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayClient")
            .field("endpoint", &self.endpoint)
            .field(
                "access_key",
                &self.access_key.as_ref().map(|_| "[REDACTED]"),
            )
            .finish_non_exhaustive()
    }
}

impl RelayClient {
    pub fn new(
        endpoint: impl Into<String>,
        access_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, RelayError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(timeout)
            .build()
            .map_err(RelayError::Client)?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
            access_key,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Post the given fields. The configured access key is added unless the
    /// form already carries one.
    pub async fn submit<'a, I>(&self, fields: I) -> Result<RelayResponse, RelayError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let form = self.build_form(fields);

        tracing::debug!(endpoint = %self.endpoint, "Submitting contact form");
        let response = self
            .http
            .post(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .multipart(form)
            .send()
            .await
            .map_err(RelayError::Transport)?;

        let status = response.status();
        let body = response.bytes().await.map_err(RelayError::Transport)?;
        let reply = decode_reply(status, &body)?;

        if status == StatusCode::OK {
            tracing::info!(status = status.as_u16(), "Contact form delivered");
            Ok(reply)
        } else {
            Err(RelayError::Rejected {
                status: status.as_u16(),
                message: reply.message,
            })
        }
    }

    fn build_form<'a, I>(&self, fields: I) -> Form
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut form = Form::new();
        let mut has_key = false;

        for (name, value) in fields {
            has_key |= name == ACCESS_KEY_FIELD;
            form = form.text(name.to_string(), value.to_string());
        }

        if !has_key && let Some(key) = &self.access_key {
            form = form.text(ACCESS_KEY_FIELD, key.clone());
        }
        form
    }
}

fn decode_reply(status: StatusCode, body: &[u8]) -> Result<RelayResponse, RelayError> {
    if body.len() > MAX_RESPONSE_BYTES {
        return Err(RelayError::Decode {
            status: status.as_u16(),
            reason: format!("body exceeds {MAX_RESPONSE_BYTES} bytes"),
        });
    }
    serde_json::from_slice(body).map_err(|e| RelayError::Decode {
        status: status.as_u16(),
        reason: e.to_string(),
    })
}
