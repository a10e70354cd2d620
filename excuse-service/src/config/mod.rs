use anyhow::Result;
use dotenvy::dotenv;
use secrecy::Secret;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub gemini: GeminiSettings,
    pub service_name: String,
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Clone, Debug)]
pub struct GeminiSettings {
    /// Absent or empty key means AI mode is disabled.
    pub api_key: Option<Secret<String>>,
    pub model: String,
    pub api_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let host = env::var("EXCUSE_SERVICE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("EXCUSE_SERVICE_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()?;

        let api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .map(Secret::new);
        let model =
            env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-2.5-flash".to_string());
        let api_base_url = env::var("GEMINI_API_BASE_URL")
            .unwrap_or_else(|_| "https://generativelanguage.googleapis.com/v1beta".to_string());

        Ok(Self {
            server: ServerConfig { host, port },
            gemini: GeminiSettings {
                api_key,
                model,
                api_base_url,
            },
            service_name: "excuse-service".to_string(),
        })
    }
}
