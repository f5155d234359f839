#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Access credential for the places-search provider.
    pub places_api_key: String,
    pub search_radius_m: u32,
    /// Maximum number of competitors shown ahead of the target.
    pub display_cap: usize,
    pub debounce_ms: u64,
    pub min_query_chars: usize,
    pub max_predictions: usize,
    pub language: String,
    pub request_timeout_secs: u64,
    pub max_retries: u32,
    pub retry_backoff_base_ms: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("places_api_key", &"[redacted]")
            .field("search_radius_m", &self.search_radius_m)
            .field("display_cap", &self.display_cap)
            .field("debounce_ms", &self.debounce_ms)
            .field("min_query_chars", &self.min_query_chars)
            .field("max_predictions", &self.max_predictions)
            .field("language", &self.language)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("max_retries", &self.max_retries)
            .field("retry_backoff_base_ms", &self.retry_backoff_base_ms)
            .finish()
    }
}
