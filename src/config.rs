//! Client configuration and well-known endpoints

/// Production Files API endpoint
pub const API_BASE_LIVE: &str = "https://api.smartling.com/v1";

/// Sandbox Files API endpoint
pub const API_BASE_SANDBOX: &str = "https://sandbox-api.smartling.com/v1";

/// Connection settings for one project.
///
/// All three fields are required at construction and never change afterwards.
/// Callers pick the production or sandbox base URL explicitly; there is no
/// environment-variable fallback.
#[derive(Clone, Debug)]
pub struct Config {
    /// API base URL, usually [`API_BASE_LIVE`] or [`API_BASE_SANDBOX`]
    pub base_url: String,
    /// Project API key
    pub api_key: String,
    /// Project identifier
    pub project_id: String,
}

impl Config {
    /// Create a config against an explicit base URL
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        project_id: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            project_id: project_id.into(),
        }
    }

    /// Create a config against the production endpoint
    pub fn live(api_key: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self::new(API_BASE_LIVE, api_key, project_id)
    }

    /// Create a config against the sandbox endpoint
    pub fn sandbox(api_key: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self::new(API_BASE_SANDBOX, api_key, project_id)
    }
}
