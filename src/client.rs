use crate::core::config::SweepConfig;
use crate::core::types::{DisableRequest, Overview};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Credential header expected by the tunneling service.
pub const HEADER_TOKEN: &str = "X-TOKEN";
/// Vendor media type required on mutation calls.
pub const CONTENT_TYPE_DISABLE: &str = "application/zrok.v1+json";

#[derive(Debug, Error)]
pub enum SweepError {
    #[error("usage: tunnel-sweep <token>")]
    MissingToken,
    #[error("failed to construct HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),
    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),
}

/// HTTP client for the overview/disable API.
///
/// One instance is built at startup from [`SweepConfig`] plus the credential,
/// and threaded through the sweep — the token and API root live nowhere else.
#[derive(Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    api_base: String,
    token: String,
    headers: Vec<(String, String)>,
}

impl ApiClient {
    pub fn new(config: SweepConfig, token: &str) -> Result<Self, SweepError> {
        if token.is_empty() {
            return Err(SweepError::MissingToken);
        }
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;
        Ok(Self {
            http,
            api_base: config.api_base,
            token: token.to_string(),
            headers: config.headers,
        })
    }

    /// `GET /overview` — returns every environment zId on the account, in
    /// response order.
    ///
    /// Any failure (transport, non-2xx, unparsable body) degrades to an empty
    /// list with a warning rather than an error: the sweep then runs as a
    /// no-op instead of aborting.
    pub async fn list_environments(&self) -> Vec<String> {
        let url = format!("{}/overview", self.api_base);
        info!("Fetching account overview from {}", url);

        let response = match self.with_common_headers(self.http.get(&url)).send().await {
            Ok(r) => r,
            Err(e) => {
                warn!("overview request failed: {} — treating as zero environments", e);
                return Vec::new();
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(
                "overview returned HTTP {} — treating as zero environments",
                status
            );
            return Vec::new();
        }

        match response.json::<Overview>().await {
            Ok(overview) => {
                let ids = overview.environment_ids();
                debug!("overview yielded {} environment id(s)", ids.len());
                ids
            }
            Err(e) => {
                warn!("overview body unparsable: {} — treating as zero environments", e);
                Vec::new()
            }
        }
    }

    /// `POST /disable` for one environment.
    ///
    /// The response body is never consumed and the status never changes
    /// control flow: the outcome is logged and the sweep moves on. No retry.
    pub async fn disable_environment(&self, z_id: &str) -> Result<(), SweepError> {
        let url = format!("{}/disable", self.api_base);
        let body = serde_json::to_vec(&DisableRequest { identity: z_id })?;

        let result = self
            .with_common_headers(self.http.post(&url))
            .header("Content-Type", CONTENT_TYPE_DISABLE)
            .body(body)
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => {
                debug!("disable for {} returned HTTP {}", z_id, response.status());
            }
            Ok(response) => {
                warn!("disable for {} returned HTTP {}", z_id, response.status());
            }
            Err(e) => {
                warn!("disable request for {} failed: {}", z_id, e);
            }
        }
        Ok(())
    }

    /// Credential header plus the browser-emulation set, on every request.
    fn with_common_headers(&self, mut request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request = request.header(HEADER_TOKEN, &self.token);
        for (name, value) in &self.headers {
            request = request.header(name, value);
        }
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_token_rejected() {
        let err = ApiClient::new(SweepConfig::default(), "").unwrap_err();
        assert!(matches!(err, SweepError::MissingToken));
        assert_eq!(err.to_string(), "usage: tunnel-sweep <token>");
    }

    #[test]
    fn test_token_stored_verbatim() {
        let token = "zrok-TOKEN+abc/123==";
        let client = ApiClient::new(SweepConfig::default(), token).unwrap();
        assert_eq!(client.token, token);
    }
}
