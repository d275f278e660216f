use crate::github::client::GITHUB_API;

/// Settings for a single invocation, resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub username: String,
}

impl Config {
    /// Build a Config from raw argument values. An empty API URL falls back to
    /// the public GitHub API; a trailing `/` is dropped.
    pub fn from_raw_values(api_url: Option<&str>, username: &str) -> Self {
        let api_url = api_url
            .map(str::trim)
            .map(|s| s.trim_end_matches('/'))
            .filter(|s| !s.is_empty())
            .unwrap_or(GITHUB_API)
            .to_string();

        Config {
            api_url,
            username: username.to_string(),
        }
    }
}

/// Argument check for the username. Empty names are refused, and so are `.`
/// and `..`, which URL parsing would resolve out of `/users/`.
pub fn parse_username(raw: &str) -> Result<String, String> {
    if raw.trim().is_empty() {
        return Err("username must not be empty".to_string());
    }
    if raw == "." || raw == ".." {
        return Err(format!("`{raw}` is not a valid username"));
    }
    Ok(raw.to_string())
}
