//! Route table for the site
//!
//! Three exact-match pages, one parametric detail page, the contact form
//! POST endpoints, and the theme toggle. Any unmatched path redirects to
//! home rather than rendering a 404.

use crate::{handlers, AppState};
use axum::{
    routing::{get, post},
    Router,
};

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::pages::handle_home))
        .route("/services", get(handlers::pages::handle_services))
        .route("/services/:id", get(handlers::pages::handle_service_detail))
        .route(
            "/contact",
            get(handlers::contact::handle_contact_page).post(handlers::contact::handle_submit),
        )
        .route("/contact/reset", post(handlers::contact::handle_reset))
        .route("/theme", post(handlers::pages::handle_theme_toggle))
        .route("/health", get(handlers::health::handle_health))
        .fallback(handlers::pages::handle_fallback)
}
