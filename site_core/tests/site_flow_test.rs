//! End-to-end routing and page-flow tests driven through the router.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use site_core::{create_app, AppConfig, AppState};
use tower::ServiceExt;

fn test_app() -> Router {
    let mut config = AppConfig::default();
    config.contact.simulated_delay_ms = 0;
    config.theme.state_file = std::path::PathBuf::new();

    let state = AppState::from_config(&config).unwrap();
    create_app(state)
}

async fn get(app: &Router, path: &str) -> Response {
    app.clone()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_form(app: &Router, path: &str, body: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap()
}

#[tokio::test]
async fn test_configured_paths_render_their_pages() {
    let app = test_app();

    let cases = [
        ("/", "data-page=\"home\""),
        ("/services", "data-page=\"services\""),
        ("/contact", "data-page=\"contact\""),
    ];

    for (path, marker) in cases {
        let response = get(&app, path).await;
        assert_eq!(response.status(), StatusCode::OK, "GET {}", path);

        let body = body_text(response).await;
        assert!(body.contains(marker), "GET {} missing {}", path, marker);
    }
}

#[tokio::test]
async fn test_service_detail_renders_known_slug() {
    let app = test_app();

    let response = get(&app, "/services/branding").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("data-service=\"branding\""));
    assert!(body.contains("Brand Style Guides"));
}

#[tokio::test]
async fn test_unknown_service_redirects_to_listing() {
    let app = test_app();

    let response = get(&app, "/services/underwater-basket-weaving").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/services");
}

#[tokio::test]
async fn test_unmatched_path_redirects_home() {
    let app = test_app();

    for path in ["/nonexistent", "/services/x/y", "/admin"] {
        let response = get(&app, path).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "GET {}", path);
        assert_eq!(location(&response), "/");
    }
}

#[tokio::test]
async fn test_services_page_shows_both_grids() {
    let app = test_app();

    let body = body_text(get(&app, "/services").await).await;
    assert!(body.contains("grid-core"));
    assert!(body.contains("grid-other"));
    assert!(body.contains("Video Editing"));
    assert!(body.contains("Docs &amp; Presentations"));
}

#[tokio::test]
async fn test_contact_flow_submit_success_reset() {
    let app = test_app();

    let body = "name=Ada+Lovelace&email=ada%40example.com&service=Branding&message=Hello";
    let response = post_form(&app, "/contact", body).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/contact");

    let success = body_text(get(&app, "/contact").await).await;
    assert!(success.contains("data-page=\"contact-success\""));
    assert!(success.contains("Send another message"));

    let response = post_form(&app, "/contact/reset", "").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let form = body_text(get(&app, "/contact").await).await;
    assert!(form.contains("data-page=\"contact\""));
}

#[tokio::test]
async fn test_invalid_submission_rerenders_with_errors() {
    let app = test_app();

    let body = "name=&email=not-an-email&service=Other&message=";
    let response = post_form(&app, "/contact", body).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let html = body_text(response).await;
    assert!(html.contains("Name is required"));
    assert!(html.contains("Email must be a valid address"));
    assert!(html.contains("Message is required"));
}

#[tokio::test]
async fn test_theme_toggle_flips_rendered_class() {
    let app = test_app();

    let before = body_text(get(&app, "/").await).await;
    assert!(before.contains("<html lang=\"en\" class=\"\">"));

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/theme")
                .header(header::REFERER, "/services")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/services");

    let after = body_text(get(&app, "/").await).await;
    assert!(after.contains("<html lang=\"en\" class=\"dark\">"));
}

#[tokio::test]
async fn test_health_endpoint_reports_catalog() {
    let app = test_app();

    let response = get(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["catalog_entries"], 9);
}
