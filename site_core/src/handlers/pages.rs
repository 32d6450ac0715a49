//! Handlers for the content pages

use crate::{
    catalog::Category,
    error::Result,
    render::ServiceCard,
    AppState,
};
use axum::{
    extract::{OriginalUri, Path, State},
    http::HeaderMap,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Serialize;
use tracing::info;

#[derive(Serialize)]
struct HomeContext {
    featured: Vec<ServiceCard>,
}

pub async fn handle_home(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let ctx = HomeContext {
        featured: state
            .catalog
            .by_category(Category::Core)
            .into_iter()
            .map(ServiceCard::from)
            .collect(),
    };

    let html = state
        .renderer
        .page("home", "Home", "/", state.theme.mode(), &ctx)?;
    Ok(Html(html))
}

#[derive(Serialize)]
struct ServicesContext {
    core: Vec<ServiceCard>,
    other: Vec<ServiceCard>,
}

pub async fn handle_services(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let ctx = ServicesContext {
        core: state
            .catalog
            .by_category(Category::Core)
            .into_iter()
            .map(ServiceCard::from)
            .collect(),
        other: state
            .catalog
            .by_category(Category::Other)
            .into_iter()
            .map(ServiceCard::from)
            .collect(),
    };

    let html = state
        .renderer
        .page("services", "Services", "/services", state.theme.mode(), &ctx)?;
    Ok(Html(html))
}

#[derive(Serialize)]
struct ServiceDetailContext {
    id: &'static str,
    title: &'static str,
    long_description: &'static str,
    glyph: &'static str,
    accent_class: &'static str,
    features: &'static [&'static str],
}

pub async fn handle_service_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    info!("GET /services/{}", id);

    let Some(item) = state.catalog.find_by_id(&id) else {
        // Unknown slugs go back to the listing, never to an empty page.
        info!("Unknown service '{}', redirecting to listing", id);
        return Ok(Redirect::to("/services").into_response());
    };

    let ctx = ServiceDetailContext {
        id: item.id,
        title: item.title,
        long_description: item.long_description,
        glyph: item.icon.glyph(),
        accent_class: item.accent.css_class(),
        features: item.features,
    };

    let path = format!("/services/{}", item.id);
    let html = state
        .renderer
        .page("service_detail", item.title, &path, state.theme.mode(), &ctx)?;
    Ok(Html(html).into_response())
}

pub async fn handle_theme_toggle(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let mode = state.theme.toggle();
    info!("Theme toggled to {}", mode.as_str());

    // Return to the page the toggle was pressed on.
    let back = headers
        .get(http::header::REFERER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("/");

    Redirect::to(back)
}

pub async fn handle_fallback(uri: OriginalUri) -> impl IntoResponse {
    info!("Unmatched path {}, redirecting to home", uri.path());
    Redirect::to("/")
}
