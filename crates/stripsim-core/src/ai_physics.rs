//! AI physics correction client
//!
//! Forwards a [`PhysicsSnapshot`] to the remote scoring endpoint and returns
//! correction multipliers for the local simulation. One POST per call, no
//! retries, no timeout: the endpoint either answers or the caller gets
//! neutral factors. Nothing in here ever surfaces an error to the caller —
//! the simulation loop applies whatever comes back and keeps running.

use crate::correction::{CorrectionFactors, CorrectionSource};
use crate::telemetry::PhysicsSnapshot;
use thiserror::Error;

/// Endpoint path, appended to the configured base URL
pub const AI_PHYSICS_PATH: &str = "/api/ai-physics";

/// Errors from a single correction request
///
/// Internal to the request helper; [`AiPhysicsClient::fetch_corrections`]
/// collapses every variant into [`CorrectionSource::Fallback`].
#[derive(Error, Debug)]
pub enum AiPhysicsError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned status {0}")]
    Status(u16),
}

/// Client for the AI physics correction endpoint
pub struct AiPhysicsClient {
    /// HTTP client for endpoint requests
    client: reqwest::Client,
    /// Origin hosting the endpoint, e.g. `http://localhost:8080`
    base_url: String,
}

impl AiPhysicsClient {
    /// Create a client for the given endpoint origin
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("StripSim/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        AiPhysicsClient {
            client,
            base_url: base_url.into(),
        }
    }

    /// Create a client reusing a caller-supplied `reqwest::Client`
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        AiPhysicsClient {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetch correction factors for a physics snapshot
    ///
    /// Never fails: transport errors, non-2xx statuses, and unparseable
    /// bodies all resolve to [`CorrectionSource::Fallback`] with neutral
    /// factors. Takes `&self`, so any number of calls may be in flight
    /// concurrently.
    pub async fn fetch_corrections(&self, snapshot: &PhysicsSnapshot) -> CorrectionSource {
        match self.request_corrections(snapshot).await {
            Ok(factors) => CorrectionSource::Remote(factors),
            Err(e) => {
                tracing::warn!("AI physics request failed, using neutral corrections: {e}");
                CorrectionSource::Fallback(CorrectionFactors::NEUTRAL)
            }
        }
    }

    /// Single request/response round trip
    ///
    /// A non-2xx status is rejected without reading the body. A 2xx body
    /// that fails to deserialize as [`CorrectionFactors`] is a transport
    /// error; the endpoint's numeric values are otherwise trusted as-is,
    /// with no range checks on the multipliers.
    async fn request_corrections(
        &self,
        snapshot: &PhysicsSnapshot,
    ) -> Result<CorrectionFactors, AiPhysicsError> {
        let url = self.endpoint_url();
        tracing::debug!("posting physics snapshot to {url}");

        let response = self.client.post(&url).json(snapshot).send().await?;

        if !response.status().is_success() {
            return Err(AiPhysicsError::Status(response.status().as_u16()));
        }

        Ok(response.json().await?)
    }

    /// Check whether the endpoint origin is reachable
    ///
    /// Cheap HEAD probe with a short timeout, for surfacing connectivity in
    /// a UI before a run starts. The correction fetch itself never times out.
    pub async fn is_reachable(&self) -> bool {
        match self
            .client
            .head(&self.base_url)
            .timeout(std::time::Duration::from_secs(5))
            .send()
            .await
        {
            // 405 = origin up but HEAD not routed
            Ok(resp) => resp.status().is_success() || resp.status().as_u16() == 405,
            Err(_) => false,
        }
    }

    fn endpoint_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), AI_PHYSICS_PATH)
    }
}
