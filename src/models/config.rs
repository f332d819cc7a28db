//! Configuration model loaded from external sources.

use serde::Deserialize;

fn default_seed_leads() -> usize {
    500
}

fn default_gemini_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_gemini_api_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    /// Cookie domain; the session cookie is host-only when unset.
    #[serde(default)]
    pub domain: Option<String>,
    pub address: String,
    pub port: u16,
    /// Session signing key, at least 64 bytes.
    pub secret: String,
    /// Number of generated leads when no CSV is configured.
    #[serde(default = "default_seed_leads")]
    pub seed_leads: usize,
    /// Fixed RNG seed for reproducible demo data.
    #[serde(default)]
    pub seed_rng: Option<u64>,
    /// CSV file to load leads from instead of generating them.
    #[serde(default)]
    pub leads_csv: Option<String>,
    /// Artificial delay added to read endpoints.
    #[serde(default)]
    pub mock_latency_ms: u64,
    #[serde(default)]
    pub gemini_api_key: Option<String>,
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,
    #[serde(default = "default_gemini_api_url")]
    pub gemini_api_url: String,
}
