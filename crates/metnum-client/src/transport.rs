//! JSON-over-HTTP transport.

use std::time::Duration;

use serde_json::Value;

use metnum_core::RemoteError;

/// HTTP verb of a request. Every computation endpoint uses POST.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HttpMethod {
    #[default]
    Post,
    Get,
}

/// Sends one JSON request and returns the decoded JSON body.
///
/// One attempt per call: implementations must not retry.
pub trait Transport: Send + Sync {
    fn send(&self, endpoint: &str, payload: &Value, method: HttpMethod)
        -> Result<Value, RemoteError>;
}

/// Blocking reqwest transport rooted at a base URL.
pub struct HttpTransport {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Build a transport. `timeout` of `None` waits indefinitely.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, RemoteError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RemoteError::Transport(e.to_string()))?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }
}

impl Transport for HttpTransport {
    fn send(
        &self,
        endpoint: &str,
        payload: &Value,
        method: HttpMethod,
    ) -> Result<Value, RemoteError> {
        let url = self.url(endpoint);
        tracing::debug!(%url, ?method, "sending request");

        let request = match method {
            HttpMethod::Post => self.client.post(&url).json(payload),
            HttpMethod::Get => self.client.get(&url),
        };
        let response = request.send().map_err(|e| {
            tracing::warn!(%url, error = %e, "request failed");
            RemoteError::Transport(e.to_string())
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| RemoteError::Transport(e.to_string()))?;
        tracing::debug!(%url, status, bytes = body.len(), "response received");
        decode_response(status, &body)
    }
}

/// Turn a status code and raw body into a JSON value or an error.
///
/// Non-2xx responses use the body's `error` field as the message when the
/// body is JSON and has one.
pub fn decode_response(status: u16, body: &str) -> Result<Value, RemoteError> {
    let parsed = serde_json::from_str::<Value>(body);
    if (200..300).contains(&status) {
        return parsed.map_err(|e| RemoteError::Decode(e.to_string()));
    }

    let message = parsed
        .ok()
        .as_ref()
        .and_then(|v| v.get("error"))
        .and_then(Value::as_str)
        .map_or_else(|| RemoteError::status_fallback(status), str::to_string);
    Err(RemoteError::Status { status, message })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_body_decodes() {
        let v = decode_response(200, r#"{"success": true, "result": 1.5}"#).unwrap();
        assert_eq!(v["result"], 1.5);
    }

    #[test]
    fn ok_body_not_json() {
        let err = decode_response(200, "<html>").unwrap_err();
        assert!(matches!(err, RemoteError::Decode(_)));
    }

    #[test]
    fn error_field_becomes_message() {
        let err = decode_response(400, r#"{"error": "a debe ser menor que b"}"#).unwrap_err();
        assert_eq!(
            err,
            RemoteError::Status {
                status: 400,
                message: "a debe ser menor que b".into()
            }
        );
    }

    #[test]
    fn missing_error_field_uses_status() {
        let err = decode_response(500, "Internal Server Error").unwrap_err();
        assert_eq!(err.to_string(), "Error HTTP 500");
        let err = decode_response(404, r#"{"detail": "x"}"#).unwrap_err();
        assert_eq!(err.to_string(), "Error HTTP 404");
    }

    #[test]
    fn url_joining() {
        let t = HttpTransport::new("http://localhost:5000/", None).unwrap();
        assert_eq!(t.url("/api/derive"), "http://localhost:5000/api/derive");
        assert_eq!(t.base_url(), "http://localhost:5000/");
    }

    #[test]
    fn default_method_is_post() {
        assert_eq!(HttpMethod::default(), HttpMethod::Post);
    }
}
