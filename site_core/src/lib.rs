//! Core library for the GraxxSocials marketing site server.
//!
//! Serves the home, services, service-detail, and contact pages, and
//! forwards contact submissions to an operator-configured endpoint.

pub mod catalog;
pub mod config;
pub mod contact;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod render;
pub mod theme;

pub use catalog::{Accent, Catalog, Category, Icon, ServiceItem};
pub use config::AppConfig;
pub use contact::{ContactForm, ContactSubmitter, SubmissionStatus};
pub use error::{AppError, Result};
pub use handlers::routes::create_routes;
pub use render::Renderer;
pub use theme::{ThemeMode, ThemeStore};

use axum::Router;
use std::net::SocketAddr;
use tokio::signal;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub app_name: String,
    pub version: String,
    pub catalog: Catalog,
    pub renderer: Renderer,
    pub theme: ThemeStore,
    pub submitter: ContactSubmitter,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let default_mode = match config.theme.default_mode.as_str() {
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        };

        let state_file = if config.theme.state_file.as_os_str().is_empty() {
            None
        } else {
            Some(config.theme.state_file.clone())
        };

        Ok(Self {
            app_name: "GraxxSocials Site".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            catalog: Catalog::new(),
            renderer: Renderer::new()?,
            theme: ThemeStore::load(state_file, default_mode),
            submitter: ContactSubmitter::from_config(&config.contact)?,
        })
    }
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(create_routes())
        .layer(middleware::logging::logging_layer())
        .with_state(state)
}

pub async fn run_server(app: Router, addr: SocketAddr) -> Result<()> {
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
