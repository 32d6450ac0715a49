//! Contact page and form submission handlers

use crate::{
    contact::{ContactForm, SubmissionStatus},
    error::Result,
    AppState,
};
use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Serialize;
use tracing::info;
use validator::{Validate, ValidationErrors};

#[derive(Serialize, Default)]
struct FormValues {
    name: String,
    email: String,
    message: String,
}

#[derive(Serialize)]
struct ServiceOption {
    title: &'static str,
    selected: bool,
}

#[derive(Serialize)]
struct ContactContext {
    services: Vec<ServiceOption>,
    errors: Vec<String>,
    values: FormValues,
    submitting: bool,
}

pub async fn handle_contact_page(State(state): State<AppState>) -> Result<Response> {
    match state.submitter.status() {
        SubmissionStatus::Success => render_success(&state).map(IntoResponse::into_response),
        status => {
            let ctx = form_context(&state, Vec::new(), FormValues::default(), status);
            let html = state
                .renderer
                .page("contact", "Contact", "/contact", state.theme.mode(), &ctx)?;
            Ok(Html(html).into_response())
        }
    }
}

pub async fn handle_submit(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> Result<Response> {
    info!("Contact submission from {} <{}>", form.name, form.email);

    if let Err(errors) = form.validate() {
        let values = FormValues {
            name: form.name.clone(),
            email: form.email.clone(),
            message: form.message.clone(),
        };
        let ctx = form_context(&state, error_messages(&errors), values, state.submitter.status());
        let html = state
            .renderer
            .page("contact", "Contact", "/contact", state.theme.mode(), &ctx)?;
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response());
    }

    state.submitter.submit(form).await;

    // Re-read through a redirect so a refresh never re-submits.
    Ok(Redirect::to("/contact").into_response())
}

pub async fn handle_reset(State(state): State<AppState>) -> impl IntoResponse {
    state.submitter.reset();
    Redirect::to("/contact")
}

fn render_success(state: &AppState) -> Result<Html<String>> {
    #[derive(Serialize)]
    struct Empty {}

    let html = state.renderer.page(
        "contact_success",
        "Contact",
        "/contact",
        state.theme.mode(),
        &Empty {},
    )?;
    Ok(Html(html))
}

fn form_context(
    state: &AppState,
    errors: Vec<String>,
    values: FormValues,
    status: SubmissionStatus,
) -> ContactContext {
    let services = state
        .catalog
        .all()
        .iter()
        .map(|item| ServiceOption {
            title: item.title,
            selected: false,
        })
        .collect();

    ContactContext {
        services,
        errors,
        values,
        submitting: status == SubmissionStatus::Submitting,
    }
}

fn error_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("{} is invalid", field),
            })
        })
        .collect();
    messages.sort();
    messages
}
