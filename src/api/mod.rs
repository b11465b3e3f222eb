use serde::{Deserialize, Serialize};

/// Backend endpoint used to check that the API is reachable.
pub(crate) const TEST_PATH: &str = "/api/test";

/// Used when there is no browser window to read the origin from.
const FALLBACK_API_URL: &str = "http://localhost:5000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ApiErrorKind {
    Network,
    Http,
    Parse,
}

#[derive(Clone, Debug)]
pub(crate) struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ApiError {
    /// The backend could not be reached at all (not started, CORS, offline).
    pub fn is_unreachable(&self) -> bool {
        self.kind == ApiErrorKind::Network
    }

    fn network(e: reqwest::Error) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            message: e.to_string(),
        }
    }

    fn parse(e: impl std::fmt::Display) -> Self {
        Self {
            kind: ApiErrorKind::Parse,
            message: e.to_string(),
        }
    }

    fn http(status: reqwest::StatusCode, body: String, ctx: &str) -> Self {
        Self {
            kind: ApiErrorKind::Http,
            message: format!("{ctx} ({status}): {body}"),
        }
    }
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct EnvConfig {
    pub api_url: String,
}

impl EnvConfig {
    /// Resolves the API base URL.
    ///
    /// Order: `window.ENV.API_URL`, `window.ENV.api_url`, the page origin
    /// (the dev server proxies `/api`), then a localhost fallback.
    pub fn new() -> Self {
        let Some(window) = web_sys::window() else {
            return Self {
                api_url: FALLBACK_API_URL.to_string(),
            };
        };

        if let Some(env) = window.get("ENV") {
            if !env.is_undefined() && env.is_object() {
                for key in ["API_URL", "api_url"] {
                    if let Ok(api_url) = js_sys::Reflect::get(&env, &key.into()) {
                        if let Some(url_str) = api_url.as_string() {
                            return Self { api_url: url_str };
                        }
                    }
                }
            }
        }

        let api_url = window
            .location()
            .origin()
            .ok()
            .filter(|o| !o.is_empty() && o != "null")
            .unwrap_or_else(|| FALLBACK_API_URL.to_string());

        Self { api_url }
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[derive(Clone)]
pub(crate) struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    pub fn from_env() -> Self {
        Self::new(EnvConfig::new().api_url)
    }

    async fn get_json(&self, path: &str) -> ApiResult<serde_json::Value> {
        let client = reqwest::Client::new();
        let res = client
            .get(join_url(&self.base_url, path))
            .send()
            .await
            .map_err(ApiError::network)?;

        if res.status().is_success() {
            res.json().await.map_err(ApiError::parse)
        } else {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            Err(ApiError::http(status, body, "Request failed"))
        }
    }

    /// Connectivity check against the backend. Returns whatever JSON it answers with.
    pub async fn check_backend(&self) -> ApiResult<serde_json::Value> {
        self.get_json(TEST_PATH).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url_handles_slashes() {
        assert_eq!(
            join_url("http://localhost:5000", "/api/test"),
            "http://localhost:5000/api/test"
        );
        assert_eq!(
            join_url("http://localhost:5000/", "/api/test"),
            "http://localhost:5000/api/test"
        );
        assert_eq!(
            join_url("http://localhost:5000", "api/test"),
            "http://localhost:5000/api/test"
        );
    }

    #[test]
    fn test_env_config_serde_contract() {
        let cfg: EnvConfig =
            serde_json::from_str(r#"{"api_url":"https://ent.example.org"}"#).expect("should parse");
        assert_eq!(cfg.api_url, "https://ent.example.org");
    }

    #[test]
    fn test_api_client_new() {
        let client = ApiClient::new("http://localhost:5000".to_string());
        assert_eq!(client.base_url, "http://localhost:5000");
    }

    #[test]
    fn test_api_error_display_is_message() {
        let err = ApiError::parse("expected value at line 1 column 1");
        assert_eq!(err.kind, ApiErrorKind::Parse);
        assert_eq!(err.to_string(), "expected value at line 1 column 1");
    }

    #[test]
    fn test_only_network_errors_are_unreachable() {
        let parse = ApiError::parse("bad json");
        assert!(!parse.is_unreachable());
        let http = ApiError::http(reqwest::StatusCode::NOT_FOUND, String::new(), "Request failed");
        assert!(!http.is_unreachable());
        let network = ApiError {
            kind: ApiErrorKind::Network,
            message: "error sending request".to_string(),
        };
        assert!(network.is_unreachable());
    }

    #[test]
    fn test_api_error_http_includes_status_and_body() {
        let err = ApiError::http(
            reqwest::StatusCode::SERVICE_UNAVAILABLE,
            "down".to_string(),
            "Request failed",
        );
        assert_eq!(err.kind, ApiErrorKind::Http);
        assert_eq!(err.message, "Request failed (503 Service Unavailable): down");
    }
}
