//! Reqwest-backed GitLab API adapter

use crate::api::{ApiClient, Method, Request};
use crate::error::{Error, Result};
use crate::types::ServiceVersion;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tokio::sync::OnceCell;
use tracing::debug;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Body of `GET /version`
#[derive(Deserialize)]
struct VersionResponse {
    version: String,
}

/// GitLab API client using reqwest
///
/// Authenticates with a PRIVATE-TOKEN header; impersonation uses the `Sudo`
/// header, which requires an admin token. The instance version is fetched
/// once and cached for the lifetime of the client.
pub struct HttpApi {
    client: Client,
    token: String,
    host: String,
    version: OnceCell<ServiceVersion>,
}

impl HttpApi {
    /// Create a new client for the given host (e.g. `gitlab.com`)
    pub fn new(host: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::GitLabApi(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            token: token.into(),
            host: host.into(),
            version: OnceCell::new(),
        })
    }

    fn api_url(&self, path: &str) -> String {
        // A bare host gets https; an explicit scheme is kept as given.
        if self.host.starts_with("http://") || self.host.starts_with("https://") {
            format!("{}/api/v4{}", self.host, path)
        } else {
            format!("https://{}/api/v4{}", self.host, path)
        }
    }

    async fn fetch_version(&self) -> Result<ServiceVersion> {
        let response: VersionResponse = self
            .client
            .get(self.api_url("/version"))
            .header("PRIVATE-TOKEN", &self.token)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::GitLabApi(e.to_string()))?
            .json()
            .await?;

        let version: ServiceVersion = response.version.parse()?;
        debug!(%version, "fetched GitLab version");
        Ok(version)
    }
}

#[async_trait]
impl ApiClient for HttpApi {
    async fn call(&self, request: &Request) -> Result<Value> {
        debug!(
            method = %request.method,
            path = %request.path,
            sudo = ?request.sudo,
            "calling GitLab API"
        );
        let url = self.api_url(&request.path);

        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
        };
        builder = builder.header("PRIVATE-TOKEN", &self.token);
        if let Some(uid) = request.sudo {
            builder = builder.header("Sudo", uid.to_string());
        }

        let body: Value = builder
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::GitLabApi(e.to_string()))?
            .json()
            .await?;

        Ok(body)
    }

    async fn version(&self) -> Result<ServiceVersion> {
        self.version
            .get_or_try_init(|| self.fetch_version())
            .await
            .copied()
    }
}
