//! API Gateway.
//!
//! Issues GET requests against the MediaWiki action API and the Wikimedia
//! core REST API, and folds every failure mode (transport, non-200 status,
//! malformed JSON, API-reported error) into an absent result. Callers decide
//! whether a missing result means "skip this unit" or "halt this article".

use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::Value;

use crate::error_handling::GatewayError;
use crate::status::StatusSink;

/// Shared gateway to the Wikipedia APIs.
///
/// Holds the HTTP client and the status channel; both collectors and the
/// title resolver borrow the same gateway.
#[derive(Clone)]
pub struct ApiGateway {
    client: reqwest::Client,
    status: Arc<dyn StatusSink>,
}

impl ApiGateway {
    /// Creates a gateway from a configured HTTP client and a status sink.
    pub fn new(client: reqwest::Client, status: Arc<dyn StatusSink>) -> Self {
        Self { client, status }
    }

    /// The status channel this gateway reports to.
    pub fn status(&self) -> &dyn StatusSink {
        self.status.as_ref()
    }

    /// Sends a GET request and returns the parsed JSON body.
    ///
    /// A bearer `Authorization` header is attached only when `token` is
    /// non-empty. Returns `None` on any failure, after reporting it to the
    /// status channel; this function never returns an error.
    pub async fn request(
        &self,
        token: Option<&str>,
        url: &str,
        params: &[(&str, &str)],
    ) -> Option<Value> {
        match self.try_request(token, url, params).await {
            Ok(value) => Some(value),
            Err(e) => {
                log::debug!("Request to {} failed: {:?}", url, e);
                self.status.update_status(
                    &format!("Encountered an error interfacing with the Wikipedia API ({e})"),
                    false,
                );
                None
            }
        }
    }

    async fn try_request(
        &self,
        token: Option<&str>,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<Value, GatewayError> {
        let mut builder = self.client.get(url);
        if !params.is_empty() {
            builder = builder.query(params);
        }
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(GatewayError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let value: Value = serde_json::from_str(&body)?;

        if let Some(error) = value.get("error") {
            return Err(GatewayError::Api(api_error_message(error)));
        }

        Ok(value)
    }
}

/// Extracts a readable message from an API error payload.
///
/// The action API reports `{"code": ..., "info": ...}`; anything else is
/// rendered verbatim.
fn api_error_message(error: &Value) -> String {
    match error {
        Value::String(message) => message.clone(),
        other => other
            .get("info")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| other.to_string()),
    }
}
