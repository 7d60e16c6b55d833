//! Health probing of a single server.
//!
//! # Responsibilities
//! - Build the probe URL from an address
//! - Issue one GET per server, no retries
//! - Classify the outcome: record, or failure with its cause

use std::future::Future;
use std::time::Duration;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use url::Url;

use crate::config::ProbeConfig;
use crate::health::record::{ProbeRecord, ServerAddress};

/// Why a probe produced no record.
#[derive(Debug, Error)]
pub enum ProbeErrorKind {
    /// Address and probe path do not form a valid URL.
    #[error("invalid probe URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The configured request timeout elapsed.
    #[error("request timed out")]
    Timeout,

    /// Connection, DNS or body transfer failed.
    #[error("request failed: {0}")]
    Transport(reqwest::Error),

    /// The server answered with something other than 200.
    #[error("non-200 response: {0}")]
    Status(u16),

    /// The body is not a well-formed health record.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ProbeErrorKind {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ProbeErrorKind::Timeout
        } else {
            ProbeErrorKind::Transport(e)
        }
    }
}

/// A failed probe, tagged with the server it targeted.
#[derive(Debug, Error)]
#[error("probe of {address} failed: {kind}")]
pub struct ProbeFailure {
    pub address: ServerAddress,
    pub kind: ProbeErrorKind,
}

impl ProbeFailure {
    pub fn new(address: impl Into<ServerAddress>, kind: impl Into<ProbeErrorKind>) -> Self {
        Self {
            address: address.into(),
            kind: kind.into(),
        }
    }
}

/// Performs one health request against one server.
///
/// Implementations hold no per-call mutable state, so a single instance is
/// shared by every worker in the pool.
pub trait HealthProbe: Send + Sync + 'static {
    fn probe(
        &self,
        address: &str,
    ) -> impl Future<Output = Result<ProbeRecord, ProbeFailure>> + Send;
}

/// HTTP implementation backed by a shared reqwest client.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: Client,
    config: ProbeConfig,
}

impl HttpProbe {
    /// Build a probe from configuration.
    pub fn new(config: ProbeConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if !config.system_proxy {
            builder = builder.no_proxy();
        }

        Ok(Self {
            client: builder.build()?,
            config,
        })
    }

    /// URL probed for `address`, e.g. `http://10.0.0.1:8080/healthz`.
    pub fn url_for(&self, address: &str) -> Result<Url, url::ParseError> {
        Url::parse(&format!("{}://{}{}", self.config.scheme, address, self.config.path))
    }

    async fn fetch(&self, address: &str) -> Result<ProbeRecord, ProbeErrorKind> {
        let url = self.url_for(address)?;
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ProbeErrorKind::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl HealthProbe for HttpProbe {
    async fn probe(&self, address: &str) -> Result<ProbeRecord, ProbeFailure> {
        self.fetch(address)
            .await
            .map_err(|kind| ProbeFailure::new(address, kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probe() -> HttpProbe {
        HttpProbe::new(ProbeConfig::default()).unwrap()
    }

    #[test]
    fn test_url_for_host_and_port() {
        let url = probe().url_for("10.0.0.7:8080").unwrap();
        assert_eq!(url.as_str(), "http://10.0.0.7:8080/healthz");
    }

    #[test]
    fn test_url_uses_configured_scheme_and_path() {
        let config = ProbeConfig {
            scheme: "https".into(),
            path: "/status".into(),
            ..ProbeConfig::default()
        };
        let url = HttpProbe::new(config).unwrap().url_for("svc.internal").unwrap();
        assert_eq!(url.as_str(), "https://svc.internal/status");
    }

    #[test]
    fn test_invalid_address_rejected() {
        assert!(probe().url_for("bad host").is_err());
        assert!(probe().url_for("host:notaport").is_err());
    }

    #[tokio::test]
    async fn test_invalid_address_is_probe_failure() {
        let err = probe().probe("bad host").await.unwrap_err();
        assert_eq!(err.address, "bad host");
        assert!(matches!(err.kind, ProbeErrorKind::InvalidUrl(_)));
    }

    #[test]
    fn test_failure_display() {
        let err = ProbeFailure::new("10.0.0.1:80", ProbeErrorKind::Status(503));
        assert_eq!(err.to_string(), "probe of 10.0.0.1:80 failed: non-200 response: 503");
    }
}
