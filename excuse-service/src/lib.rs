pub mod config;
pub mod handlers;
pub mod services;

use axum::middleware::from_fn;
use axum::{
    routing::{get, post},
    Router,
};
use service_core::middleware::tracing::request_id_middleware;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use config::Config;
use services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use services::providers::TextProvider;
use services::templates::TemplateBank;

/// Shared application state. Everything here is fixed at startup and
/// read-only afterwards; requests share nothing else.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub templates: Arc<TemplateBank>,
    pub text_provider: Option<Arc<dyn TextProvider>>,
}

impl AppState {
    /// Whether the AI provider was configured at startup.
    pub fn ai_enabled(&self) -> bool {
        self.text_provider.is_some()
    }
}

pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    pub async fn build(config: Config) -> anyhow::Result<Self> {
        let templates = Arc::new(TemplateBank::builtin());

        // A missing API key disables AI mode but never fails startup.
        let text_provider: Option<Arc<dyn TextProvider>> = match &config.gemini.api_key {
            Some(key) => {
                let provider = GeminiTextProvider::new(GeminiConfig {
                    api_key: key.clone(),
                    model: config.gemini.model.clone(),
                    api_base_url: config.gemini.api_base_url.clone(),
                });
                tracing::info!(model = %config.gemini.model, "Gemini text provider initialized");
                Some(Arc::new(provider))
            }
            None => {
                tracing::warn!(
                    "GEMINI_API_KEY not set - AI generation disabled, templates only"
                );
                None
            }
        };

        let state = AppState {
            config: config.clone(),
            templates,
            text_provider,
        };

        let router = Router::new()
            .route("/health", get(handlers::health_check))
            .route("/generate", post(handlers::generate_excuse))
            .layer(CorsLayer::permissive())
            .layer(from_fn(request_id_middleware))
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                    let request_id = request
                        .headers()
                        .get("x-request-id")
                        .and_then(|value| value.to_str().ok())
                        .unwrap_or("-");

                    tracing::info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = %request.method(),
                        uri = %request.uri(),
                        version = ?request.version(),
                    )
                }),
            )
            .with_state(state);

        // Bind here so tests can ask for port 0 and read the real port back.
        let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            e
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("excuse-service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> anyhow::Result<()> {
        axum::serve(self.listener, self.router).await?;

        Ok(())
    }
}
