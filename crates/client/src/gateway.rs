//! Remote data gateway: timeout-bounded JSON requests with uniform,
//! typed failure results.
//!
//! Every consumer of the backend implements "live data, else fallback",
//! so the gateway never panics and never lets a transport error escape as
//! anything other than a [`GatewayError`] value. An unconfigured backend
//! is itself a designed outcome ([`GatewayError::NotConfigured`]), returned
//! before any network I/O happens.

use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::config::AppConfig;

/// Outcome of a gateway request that did not produce usable data.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// No backend base URL is configured. The designed fallback trigger;
    /// callers switch to local data without logging an error.
    #[error("no API base URL configured")]
    NotConfigured,

    /// The request exceeded the configured deadline and was aborted.
    #[error("request timeout")]
    Timeout,

    /// Transport-level failure (DNS, refused connection, malformed body).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a failure status. `message` is the JSON
    /// body's `message` field when present, else a generic line.
    #[error("{message}")]
    Api { status: u16, message: String },
}

impl GatewayError {
    fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Network(err)
        }
    }
}

/// HTTP gateway to the optional ordering backend.
///
/// Wraps a single [`reqwest::Client`] with the configured timeout applied
/// to every request. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiGateway {
    http: reqwest::Client,
    base: Option<String>,
}

impl ApiGateway {
    /// Build a gateway from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Network`] if the HTTP client fails to build.
    pub fn new(config: &AppConfig) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            http,
            base: config.api_base.clone(),
        })
    }

    /// True when requests can actually reach a backend.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.base.is_some()
    }

    /// `GET` a JSON document from `path` (leading slash included).
    ///
    /// # Errors
    ///
    /// Every failure mode is a [`GatewayError`]; see the variants.
    #[instrument(skip(self))]
    pub async fn get(&self, path: &str) -> Result<Value, GatewayError> {
        let url = self.url_for(path)?;
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(GatewayError::from_transport)?;
        Self::unpack(response).await
    }

    /// `POST` a JSON body to `path` and return the response document.
    ///
    /// # Errors
    ///
    /// Every failure mode is a [`GatewayError`]; see the variants.
    #[instrument(skip(self, body))]
    pub async fn post_json<B>(&self, path: &str, body: &B) -> Result<Value, GatewayError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url_for(path)?;
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(GatewayError::from_transport)?;
        Self::unpack(response).await
    }

    fn url_for(&self, path: &str) -> Result<String, GatewayError> {
        let base = self.base.as_deref().ok_or(GatewayError::NotConfigured)?;
        Ok(format!("{base}{path}"))
    }

    /// Turn a response into the uniform result: JSON bodies parse as-is,
    /// anything else is wrapped as `{"message": text}` (or null when
    /// empty) so failure statuses can still surface a message.
    async fn unpack(response: reqwest::Response) -> Result<Value, GatewayError> {
        let status = response.status();
        let is_json = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.contains("application/json"));

        let payload = if is_json {
            response
                .json::<Value>()
                .await
                .map_err(GatewayError::from_transport)?
        } else {
            let text = response
                .text()
                .await
                .map_err(GatewayError::from_transport)?;
            if text.is_empty() {
                Value::Null
            } else {
                json!({ "message": text })
            }
        };

        if !status.is_success() {
            let message = payload
                .get("message")
                .and_then(Value::as_str)
                .map_or_else(
                    || format!("Request failed ({})", status.as_u16()),
                    str::to_owned,
                );
            debug!(status = status.as_u16(), "backend returned failure status");
            return Err(GatewayError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconfigured_gateway_reports_itself() {
        let gateway = ApiGateway::new(&AppConfig::default());
        assert!(gateway.is_ok_and(|g| !g.is_configured()));
    }

    #[test]
    fn test_error_display() {
        let err = GatewayError::Api {
            status: 503,
            message: "Request failed (503)".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed (503)");
        assert_eq!(GatewayError::Timeout.to_string(), "request timeout");
        assert_eq!(
            GatewayError::NotConfigured.to_string(),
            "no API base URL configured"
        );
    }
}
