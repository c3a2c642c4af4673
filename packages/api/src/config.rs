//! Backend location.
//!
//! The base URL comes from `BASEURL`: read at runtime on native targets (the
//! desktop launcher loads `.env` through `dotenvy` first) and baked in at compile
//! time for the browser, where there is no process environment.

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const BASE_URL_ENV: &str = "BASEURL";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() {
            DEFAULT_BASE_URL.to_string()
        } else {
            trimmed.to_string()
        };
        Self { base_url }
    }

    pub fn from_env() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::new(option_env!("BASEURL").unwrap_or(DEFAULT_BASE_URL))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            match std::env::var(BASE_URL_ENV) {
                Ok(url) => Self::new(url),
                Err(_) => Self::default(),
            }
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join an absolute API path (`/api/...`) onto the base URL.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ApiConfig::new("https://api.charkak.kr/");
        assert_eq!(config.base_url(), "https://api.charkak.kr");
        assert_eq!(config.url("/api/post/top"), "https://api.charkak.kr/api/post/top");
        assert_eq!(config.url("api/post/top"), "https://api.charkak.kr/api/post/top");
    }

    #[test]
    fn test_blank_falls_back_to_default() {
        assert_eq!(ApiConfig::new("  ").base_url(), DEFAULT_BASE_URL);
        assert_eq!(ApiConfig::default().url("/x"), "http://localhost:8080/x");
    }
}
