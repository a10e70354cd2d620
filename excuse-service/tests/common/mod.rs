use excuse_service::config::{Config, GeminiSettings, ServerConfig};
use excuse_service::Application;
use secrecy::Secret;
use std::time::Duration;

pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    /// Spawn without a Gemini key: AI mode disabled, templates only.
    pub async fn spawn() -> Self {
        Self::spawn_with_config(test_config(None)).await
    }

    /// Spawn with the Gemini provider pointed at a mock server.
    #[allow(dead_code)]
    pub async fn spawn_with_gemini(api_base_url: &str) -> Self {
        let mut config = test_config(Some("test-api-key"));
        config.gemini.api_base_url = api_base_url.to_string();
        Self::spawn_with_config(config).await
    }

    async fn spawn_with_config(config: Config) -> Self {
        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the HTTP server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..20 {
            if let Ok(response) = client.get(&health_url).send().await {
                if response.status().is_success() {
                    return Self { address, port };
                }
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        panic!("Server never became healthy at {}", health_url);
    }
}

fn test_config(api_key: Option<&str>) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0, // Random port
        },
        gemini: GeminiSettings {
            api_key: api_key.map(|key| Secret::new(key.to_string())),
            model: "gemini-2.5-flash".to_string(),
            api_base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        },
        service_name: "excuse-service-test".to_string(),
    }
}
