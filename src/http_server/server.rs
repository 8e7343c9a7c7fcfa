//! # HTTP Server
//!
//! Main HTTP server combining all endpoint routers.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::listings::ListingStore;
use crate::nlp::ChatModel;
use crate::preferences::PreferenceStore;

use super::config::HttpServerConfig;
use super::nlp_routes::{nlp_routes, NlpState};
use super::preference_routes::{preference_routes, PreferenceState};
use super::property_routes::{property_routes, PropertyState};
use super::response::ApiResponse;

/// Everything the routers need, assembled by the CLI boot path.
pub struct AppState {
    pub listings: Arc<dyn ListingStore>,
    pub preferences: Arc<PreferenceStore>,
    pub model: Arc<dyn ChatModel>,

    /// Hard cap on search result size.
    pub result_cap: usize,
}

/// HTTP server for the HomeQuest API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server
    pub fn new(config: HttpServerConfig, state: AppState) -> Self {
        let router = Self::build_router(&config, state);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, state: AppState) -> Router {
        let property_state = Arc::new(PropertyState {
            store: state.listings.clone(),
            result_cap: state.result_cap,
        });
        let preference_state = Arc::new(PreferenceState {
            preferences: state.preferences,
            listings: state.listings,
        });
        let nlp_state = Arc::new(NlpState { model: state.model });

        let cors = if config.cors_origins.is_empty() {
            // No origins configured: permissive, for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .route("/api/health", get(health_handler))
            .nest("/api/properties", property_routes(property_state))
            .nest("/api/preferences", preference_routes(preference_state))
            .nest("/api/nlp", nlp_routes(nlp_state))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        info!(%addr, "starting HomeQuest HTTP server");

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

/// Liveness probe
async fn health_handler() -> Json<ApiResponse<()>> {
    Json(ApiResponse::with_message((), "Server is running"))
}
