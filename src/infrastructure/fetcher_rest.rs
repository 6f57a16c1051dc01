use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};

use crate::{HarvestError, RawRepoRecord, RepositoryFetcher, StdResult};

/// The media type pinning the GitHub REST API version.
pub const GITHUB_API_ACCEPT_HEADER: &str = "application/vnd.github.v3+json";

/// Builds the organization-repos endpoint for the given organization.
///
/// The endpoint returns a single page of repositories; pagination is not
/// requested.
pub fn github_organization_repos_endpoint(organization_name: &str) -> String {
    format!("https://api.github.com/orgs/{organization_name}/repos")
}

/// Fetches raw repository records from the GitHub REST API.
pub struct RestApiFetcher {
    client: reqwest::Client,
    endpoint: String,
}

impl RestApiFetcher {
    /// Creates a new `RestApiFetcher` instance with a bounded request timeout.
    pub fn try_new(endpoint: &str, timeout: Duration) -> StdResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_API_ACCEPT_HEADER));
        headers.insert(USER_AGENT, HeaderValue::from_static("github-harvester"));
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl RepositoryFetcher for RestApiFetcher {
    async fn fetch(&self) -> StdResult<Vec<RawRepoRecord>> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| HarvestError::Transport(e.to_string()))?;
        if !response.status().is_success() {
            return Err(HarvestError::Transport(format!(
                "Unexpected status {} from {}",
                response.status(),
                self.endpoint
            ))
            .into());
        }
        let body = response
            .text()
            .await
            .map_err(|e| HarvestError::Transport(e.to_string()))?;
        let records = serde_json::from_str::<Vec<RawRepoRecord>>(&body)
            .map_err(|e| HarvestError::Format(e.to_string()))?;

        Ok(records)
    }
}
