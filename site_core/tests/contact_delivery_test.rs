//! Outbound delivery tests against a mock endpoint.

use httpmock::prelude::*;
use site_core::{
    config::ContactConfig,
    contact::{ContactForm, ContactSubmitter, SubmissionStatus},
};

fn form() -> ContactForm {
    ContactForm {
        name: "Grace Hopper".to_string(),
        email: "grace@example.com".to_string(),
        service: "Creative Strategy".to_string(),
        message: "We need a content roadmap.".to_string(),
    }
}

fn submitter_for(endpoint: String) -> ContactSubmitter {
    ContactSubmitter::from_config(&ContactConfig {
        endpoint_url: endpoint,
        simulated_delay_ms: 0,
        request_timeout_seconds: 5,
    })
    .unwrap()
}

#[tokio::test]
async fn test_submission_posts_form_encoded_payload() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/exec")
            .header("content-type", "application/x-www-form-urlencoded")
            .body_contains("Name=Grace+Hopper")
            .body_contains("Email=grace%40example.com")
            .body_contains("Service=Creative+Strategy")
            .body_contains("Message=We+need+a+content+roadmap.")
            .body_contains("Date=");
        then.status(200).body("{\"result\":\"success\"}");
    });

    let submitter = submitter_for(server.url("/exec"));
    let status = submitter.submit(form()).await;

    mock.assert();
    assert_eq!(status, SubmissionStatus::Success);
}

#[tokio::test]
async fn test_endpoint_error_response_is_never_inspected() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST).path("/exec");
        then.status(500).body("spreadsheet on fire");
    });

    let submitter = submitter_for(server.url("/exec"));
    let status = submitter.submit(form()).await;

    mock.assert();
    assert_eq!(status, SubmissionStatus::Success);
    assert_eq!(submitter.status(), SubmissionStatus::Success);
}

#[tokio::test]
async fn test_connection_failure_still_reports_success() {
    let submitter = submitter_for("http://127.0.0.1:9/exec".to_string());

    let status = submitter.submit(form()).await;
    assert_eq!(status, SubmissionStatus::Success);
}

#[tokio::test]
async fn test_single_post_per_submission() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST).path("/exec");
        then.status(200);
    });

    let submitter = submitter_for(server.url("/exec"));
    submitter.submit(form()).await;

    mock.assert_hits(1);
}
