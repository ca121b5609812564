use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};

/// HTTP server hosting one or more entity resource routers.
pub struct ApiServer {
    config: ApiConfig,
    router: Router,
}

impl ApiServer {
    pub fn new(config: ApiConfig) -> Self {
        Self { config, router: Router::new() }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Merges an entity resource router into the served application.
    pub fn with_resource(mut self, resource: Router) -> Self {
        self.router = self.router.merge(resource);
        self
    }

    /// Build the application router (useful for testing).
    pub fn router(&self) -> Router {
        self.router
            .clone()
            .layer(TraceLayer::new_for_http())
    }

    /// Start serving requests.
    pub async fn serve(self) -> ApiResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("restash API listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ApiError::Internal(e.to_string()))
    }
}
