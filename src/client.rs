//! HTTP client for the NWOpen Projects API.

use std::time::Duration;

use url::Url;

use crate::{
    types::{Project, QueryResult},
    Error,
};

/// Production endpoint of the NWO Open Projects API.
const DEFAULT_BASE_URL: &str = "https://nwopen-api.nwo.nl/NWOpen-API/api/Projects";

const USER_AGENT: &str = concat!("nwopen_api/", env!("CARGO_PKG_VERSION"));

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the NWOpen Projects API.
///
/// The API is read-only and unauthenticated; every operation is a single GET
/// request. The underlying connection pool is shared across requests and
/// lives as long as this value.
pub struct Client {
    /// Base URL for the API. Defaults to the production NWOpen endpoint.
    base_api_url: String,
    http: reqwest::Client,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the production NWOpen API.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Performs a single GET request for one rendered query string and
    /// decodes the response page.
    ///
    /// The query string must already be percent-encoded; it is appended to
    /// the base URL verbatim. A JSON `null` body decodes to `None`. Transport
    /// and decode failures are logged and propagate as [`Error::Transport`]
    /// and [`Error::Decode`].
    pub async fn perform_query(&self, query: &str) -> Result<Option<QueryResult>, Error> {
        let url = Url::parse(format!("{}?{}", self.base_api_url, query).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed for query={}: {}", query, e);
            Error::Transport(e.to_string())
        })?;

        let resp = self
            .http
            .get(url)
            .header("user-agent", USER_AGENT)
            .header("accept", "application/json")
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("HTTP error while querying NWOpen API with query={}: {}", query, e);
                Error::Transport(e.to_string())
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read NWOpen API response body: {}", e);
            Error::Transport(e.to_string())
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("NWOpen API request failed with status {}: {}", status, snippet);
            return Err(Error::Transport(format!("status {}: {}", status, snippet)));
        }

        serde_json::from_str::<Option<QueryResult>>(&body).map_err(|e| {
            tracing::error!(
                "JSON error while deserializing NWOpen API response for query={}: {}",
                query,
                e
            );
            Error::Decode(e.to_string())
        })
    }

    /// Fetches a single project by its file number, or `None` when the API
    /// knows no such project.
    pub async fn get_project(&self, project_id: &str) -> Result<Option<Project>, Error> {
        let query = format!("project_id={}", urlencoding::encode(project_id));
        let result = self.perform_query(&query).await?;
        Ok(result.and_then(|result| result.projects.into_iter().next()))
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}
