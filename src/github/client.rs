use async_trait::async_trait;
use bytes::Bytes;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use reqwest::{Client, StatusCode};

use crate::error::FetchError;

pub const GITHUB_API: &str = "https://api.github.com";
const USER_AGENT: &str = concat!("github-activity/", env!("CARGO_PKG_VERSION"));

/// Bytes escaped when a value is placed in a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[async_trait]
pub trait GithubClient: Send + Sync {
    /// Raw body of `GET /users/{username}/events`. Only a 200 counts as
    /// success.
    async fn fetch_user_events(&self, username: &str) -> Result<Bytes, FetchError>;
}

pub struct HttpGithubClient {
    client: Client,
    api_url: String,
}

impl HttpGithubClient {
    pub fn new(client: Client, api_url: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
        }
    }
}

/// No auth, no timeouts, no extra headers. GitHub refuses requests without a
/// user agent, so the client carries one.
pub fn build_http_client() -> reqwest::Result<Client> {
    Client::builder().user_agent(USER_AGENT).build()
}

pub fn user_events_url(api_url: &str, username: &str) -> String {
    let username = utf8_percent_encode(username, PATH_SEGMENT);
    format!("{}/users/{username}/events", api_url.trim_end_matches('/'))
}

#[async_trait]
impl GithubClient for HttpGithubClient {
    #[tracing::instrument(skip(self))]
    async fn fetch_user_events(&self, username: &str) -> Result<Bytes, FetchError> {
        let url = user_events_url(&self.api_url, username);
        tracing::debug!(%url, "fetching events");

        let resp = self.client.get(&url).send().await?;

        let status = resp.status();
        if status != StatusCode::OK {
            tracing::debug!(%status, "events request rejected");
            return Err(FetchError::Status { status });
        }

        let body = resp.bytes().await?;
        tracing::debug!(%status, bytes = body.len(), "events fetched");
        Ok(body)
    }
}
