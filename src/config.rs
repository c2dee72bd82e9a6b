use std::env;

#[derive(Clone)]
pub struct Config {
    pub api_base_url: String,
    pub http_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_base_url: env::var("API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:5000".to_string()),
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .map(|v| v.parse().expect("HTTP_TIMEOUT_SECS must be a number"))
                .unwrap_or(10),
        }
    }
}
