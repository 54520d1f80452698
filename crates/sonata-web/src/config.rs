//! Build-time configuration.
//!
//! The API base URL is baked in when Trunk builds the bundle:
//!
//! ```text
//! SONATA_API_BASE=https://api.sonata.example trunk build --release
//! ```

/// Used when `SONATA_API_BASE` is unset at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Client configuration, provided to pages via Leptos context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    api_base: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

impl Config {
    /// Read `SONATA_API_BASE` from the build environment.
    pub fn from_env() -> Self {
        Self::new(option_env!("SONATA_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }

    pub fn new(api_base: impl Into<String>) -> Self {
        let mut api_base = api_base.into().trim().to_string();
        while api_base.ends_with('/') {
            api_base.pop();
        }
        if api_base.is_empty() {
            api_base = DEFAULT_API_BASE.to_string();
        }
        Self { api_base }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Absolute URL for an API path such as `/user/sign-in`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}
