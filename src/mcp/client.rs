use reqwest::{Client, Method, RequestBuilder};
use std::env;

/// Environment variable consulted when no explicit API URL is given.
pub const API_URL_ENV: &str = "TODO_API_URL";

/// Base URL used when neither the flag nor the environment names one.
pub const DEFAULT_API_URL: &str = "http://localhost:5083";

/// HTTP client for the todo lists REST API
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// Priority for base URL:
    /// 1. Explicit `api_url` parameter
    /// 2. TODO_API_URL environment variable
    /// 3. Default: http://localhost:5083
    ///
    /// Trailing slashes are trimmed so paths can always start with `/`.
    pub fn new(api_url: Option<String>) -> Self {
        // reqwest is built without a default crypto provider
        let _ = rustls::crypto::ring::default_provider().install_default();

        let base_url = api_url
            .or_else(|| env::var(API_URL_ENV).ok())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Get the base URL being used
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder for an API-relative path
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Create a GET request builder
    pub fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }
}
