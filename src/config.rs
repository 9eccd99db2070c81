/// Client endpoints, resolved from the environment with localhost defaults.
/// The binary auto-loads `.env` in debug builds before calling `from_env`.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the board API (no trailing slash).
    pub api_base: String,
    /// Origin prefix for stored image fragments (trailing slash guaranteed).
    pub upload_base: String,
}

const DEFAULT_API_BASE: &str = "http://localhost:8080/api";
const DEFAULT_UPLOAD_BASE: &str = "http://localhost:8080/upload/";

impl ClientConfig {
    pub fn from_env() -> Self {
        let api_base = std::env::var("PAWBOARD_API_BASE")
            .unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let upload_base = std::env::var("PAWBOARD_UPLOAD_BASE")
            .unwrap_or_else(|_| DEFAULT_UPLOAD_BASE.to_string());
        Self::new(api_base, upload_base)
    }

    pub fn new(api_base: impl Into<String>, upload_base: impl Into<String>) -> Self {
        let api_base = api_base.into().trim_end_matches('/').to_string();
        let mut upload_base = upload_base.into();
        if !upload_base.ends_with('/') {
            upload_base.push('/');
        }
        Self { api_base, upload_base }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE, DEFAULT_UPLOAD_BASE)
    }
}
