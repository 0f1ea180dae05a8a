//! HTTP client for making requests to collaborator APIs

use anyhow::Result;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// HTTP client wrapper shared by the collaborator clients
///
/// Cheap to clone; each collaborator client holds its own copy so nothing is
/// shared between pipeline stages.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    user_agent: String,
}

impl HttpClient {
    /// Create a new HTTP client with the default request timeout
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(crate::DEFAULT_TIMEOUT))
    }

    /// Create a new HTTP client with a custom request timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).gzip(true).build()?;

        Ok(Self {
            client,
            user_agent: format!("research-rs/{}", crate::VERSION),
        })
    }

    /// POST a JSON body, optionally with a bearer token
    ///
    /// Transport-level failures come back as `reqwest::Error`; HTTP-level
    /// failures are captured in the returned [`ApiResponse`] so callers can
    /// classify them.
    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        url: &str,
        bearer: Option<&str>,
        body: &T,
    ) -> std::result::Result<ApiResponse, reqwest::Error> {
        let mut req_builder = self
            .client
            .post(url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json")
            .json(body);

        if let Some(token) = bearer {
            req_builder = req_builder.bearer_auth(token);
        }

        let response = req_builder.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        Ok(ApiResponse { status, text })
    }

    /// Get current user agent
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

/// Captured HTTP response from a collaborator API
#[derive(Debug)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
}

impl ApiResponse {
    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Check if response indicates rejected credentials
    pub fn is_auth_error(&self) -> bool {
        self.status == 401 || self.status == 403
    }

    /// Parse response body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = HttpClient::new();
        assert!(client.is_ok());
        assert!(client.unwrap().user_agent().starts_with("research-rs/"));
    }

    #[test]
    fn test_response_classification() {
        let ok = ApiResponse {
            status: 200,
            text: String::new(),
        };
        assert!(ok.is_success());
        assert!(!ok.is_auth_error());

        let unauthorized = ApiResponse {
            status: 401,
            text: String::new(),
        };
        assert!(!unauthorized.is_success());
        assert!(unauthorized.is_auth_error());

        let forbidden = ApiResponse {
            status: 403,
            text: String::new(),
        };
        assert!(forbidden.is_auth_error());

        let server_error = ApiResponse {
            status: 502,
            text: String::new(),
        };
        assert!(!server_error.is_success());
        assert!(!server_error.is_auth_error());
    }

    #[test]
    fn test_response_json_parsing() {
        let response = ApiResponse {
            status: 200,
            text: r#"{"answer": 42}"#.to_string(),
        };
        let value: serde_json::Value = response.json().unwrap();
        assert_eq!(value["answer"], 42);

        let garbage = ApiResponse {
            status: 200,
            text: "<html>not json</html>".to_string(),
        };
        assert!(garbage.json::<serde_json::Value>().is_err());
    }
}
