use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// OMDb API key
    pub omdb_api_key: String,

    /// OMDb API base URL
    #[serde(default = "default_omdb_api_url")]
    pub omdb_api_url: String,

    /// Quiet period after the last keystroke before a search fires, in
    /// milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_omdb_api_url() -> String {
    "https://www.omdbapi.com".to_string()
}

fn default_debounce_ms() -> u64 {
    600
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
