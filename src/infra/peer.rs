//! HTTP client for peer existence checks.
//!
//! The roster service owns professors, classes and students; the other
//! services confirm foreign keys against it with a single GET per id.
//! Timeouts and transport failures read as "does not exist" so a peer
//! outage rejects the write instead of letting an unchecked reference
//! through.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument, warn};

use crate::domain::{AppError, EntityId, PeerKind, ReferenceChecker};

/// Configuration for the peer client.
#[derive(Debug, Clone)]
pub struct PeerClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl PeerClientConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
        }
    }
}

/// Reference checker backed by the peer service's HTTP API.
pub struct HttpReferenceChecker {
    http_client: Client,
    base_url: String,
}

impl HttpReferenceChecker {
    /// Builds the client with the configured timeout baked in; every
    /// lookup inherits it.
    pub fn new(config: &PeerClientConfig) -> Result<Self, AppError> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("failed to build http client: {e}")))?;
        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ReferenceChecker for HttpReferenceChecker {
    #[instrument(skip(self))]
    async fn exists(&self, kind: PeerKind, id: EntityId) -> bool {
        let url = format!("{}/{}/{}", self.base_url, kind.resource(), id);
        match self.http_client.get(&url).send().await {
            Ok(response) => {
                let found = response.status() == StatusCode::OK;
                debug!(%url, status = %response.status(), found, "peer lookup");
                found
            }
            Err(error) => {
                warn!(%url, %error, "peer lookup failed, treating reference as invalid");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let config = PeerClientConfig::new("http://gerenciamento:5000/", Duration::from_secs(3));
        let checker = HttpReferenceChecker::new(&config).unwrap();
        assert_eq!(checker.base_url, "http://gerenciamento:5000");
    }

    #[tokio::test]
    async fn test_unreachable_peer_reads_as_nonexistent() {
        // nothing listens on this port
        let config = PeerClientConfig::new("http://127.0.0.1:1", Duration::from_millis(200));
        let checker = HttpReferenceChecker::new(&config).unwrap();
        assert!(!checker.exists(PeerKind::Turma, 1).await);
    }
}
