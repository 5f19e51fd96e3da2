//! Typed calls to the computation endpoints.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use metnum_core::constants::{
    ENDPOINT_DERIVE, ENDPOINT_INTEGRATE, ENDPOINT_INTERPOLATE, ENDPOINT_VALIDATE,
};
use metnum_core::{
    DifferentiationRequest, IntegrationRequest, InterpolationRequest, RemoteError, ResultEnvelope,
};

use crate::transport::{HttpMethod, HttpTransport, Transport};

/// Answer of the server's validate endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerStatus {
    pub valid: bool,
    pub message: String,
}

/// Typed client over any [`Transport`].
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Client backed by an [`HttpTransport`].
    pub fn http(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, RemoteError> {
        Ok(Self::new(Arc::new(HttpTransport::new(base_url, timeout)?)))
    }

    pub fn interpolate(&self, request: &InterpolationRequest) -> Result<ResultEnvelope, RemoteError> {
        self.call(ENDPOINT_INTERPOLATE, request)
    }

    pub fn integrate(&self, request: &IntegrationRequest) -> Result<ResultEnvelope, RemoteError> {
        self.call(ENDPOINT_INTEGRATE, request)
    }

    pub fn derive(&self, request: &DifferentiationRequest) -> Result<ResultEnvelope, RemoteError> {
        self.call(ENDPOINT_DERIVE, request)
    }

    /// Ask the server whether it is up and accepting requests.
    pub fn check(&self) -> Result<ServerStatus, RemoteError> {
        let body = self.transport.send(
            ENDPOINT_VALIDATE,
            &Value::Object(serde_json::Map::new()),
            HttpMethod::Post,
        )?;
        serde_json::from_value(body).map_err(|e| RemoteError::Decode(e.to_string()))
    }

    fn call<T: Serialize>(&self, endpoint: &str, request: &T) -> Result<ResultEnvelope, RemoteError> {
        let payload =
            serde_json::to_value(request).map_err(|e| RemoteError::Transport(e.to_string()))?;
        let body = self.transport.send(endpoint, &payload, HttpMethod::Post)?;
        serde_json::from_value(body).map_err(|e| RemoteError::Decode(e.to_string()))
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").finish_non_exhaustive()
    }
}
