//! Outbound delivery of contact submissions

use crate::config::ContactConfig;
use crate::contact::models::{ContactForm, SubmissionStatus};
use crate::error::{AppError, Result};
use chrono::Local;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use url::Url;

/// Sends contact submissions to the configured endpoint and tracks the
/// three-state status of the form.
///
/// The destination is an opaque third-party web app (expected to append a
/// row to a spreadsheet). Its response cannot be relied upon, so the
/// response status and body are never inspected and transport failures are
/// treated as success. This optimistic-success policy is a deliberate
/// product decision inherited from the original site, not a technical
/// necessity.
#[derive(Clone)]
pub struct ContactSubmitter {
    client: reqwest::Client,
    endpoint: Option<Url>,
    simulated_delay: Duration,
    status: Arc<RwLock<SubmissionStatus>>,
}

impl ContactSubmitter {
    pub fn from_config(config: &ContactConfig) -> Result<Self> {
        let endpoint = if config.endpoint_url.is_empty() {
            None
        } else {
            let url = Url::parse(&config.endpoint_url)
                .map_err(|e| AppError::Config(format!("Invalid contact endpoint URL: {}", e)))?;
            Some(url)
        };

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint,
            simulated_delay: Duration::from_millis(config.simulated_delay_ms),
            status: Arc::new(RwLock::new(SubmissionStatus::Idle)),
        })
    }

    pub fn status(&self) -> SubmissionStatus {
        *self.status.read()
    }

    /// Delivers one submission.
    ///
    /// Transitions to `Submitting` before any I/O. While a submission is in
    /// flight, further calls are no-ops (the single concurrency guard in the
    /// system). Whether the POST errors or completes, the status ends up at
    /// `Success`.
    pub async fn submit(&self, form: ContactForm) -> SubmissionStatus {
        {
            let mut status = self.status.write();
            if *status == SubmissionStatus::Submitting {
                info!("Submission already in flight, ignoring duplicate");
                return SubmissionStatus::Submitting;
            }
            *status = SubmissionStatus::Submitting;
        }

        let payload = form.into_payload(Local::now());

        match &self.endpoint {
            Some(url) => {
                // The endpoint is response-opaque; only the transport error
                // is observable, and even that is swallowed.
                if let Err(e) = self.client.post(url.clone()).form(&payload).send().await {
                    warn!("Contact delivery failed, reporting success anyway: {}", e);
                }
            }
            None => {
                warn!("No contact endpoint configured, simulating delivery");
                tokio::time::sleep(self.simulated_delay).await;
            }
        }

        let mut status = self.status.write();
        *status = SubmissionStatus::Success;
        *status
    }

    /// Clears the form for a new submission.
    pub fn reset(&self) {
        *self.status.write() = SubmissionStatus::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ContactConfig;

    fn form() -> ContactForm {
        ContactForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            service: "Branding".to_string(),
            message: "Looking for a full rebrand.".to_string(),
        }
    }

    fn submitter_without_endpoint(delay_ms: u64) -> ContactSubmitter {
        ContactSubmitter::from_config(&ContactConfig {
            endpoint_url: String::new(),
            simulated_delay_ms: delay_ms,
            request_timeout_seconds: 30,
        })
        .unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_delivery_takes_configured_delay() {
        let submitter = submitter_without_endpoint(1500);
        assert_eq!(submitter.status(), SubmissionStatus::Idle);

        let started = tokio::time::Instant::now();
        let status = submitter.submit(form()).await;

        assert_eq!(status, SubmissionStatus::Success);
        assert_eq!(submitter.status(), SubmissionStatus::Success);
        assert_eq!(started.elapsed(), Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_duplicate_submit_is_ignored_while_in_flight() {
        let submitter = submitter_without_endpoint(1500);

        let background = submitter.clone();
        let first = tokio::spawn(async move { background.submit(form()).await });

        // Let the first submission reach its simulated delay.
        tokio::task::yield_now().await;
        assert_eq!(submitter.status(), SubmissionStatus::Submitting);

        let second = submitter.submit(form()).await;
        assert_eq!(second, SubmissionStatus::Submitting);

        assert_eq!(first.await.unwrap(), SubmissionStatus::Success);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_still_reports_success() {
        // Port 9 is the discard service; nothing is listening there.
        let submitter = ContactSubmitter::from_config(&ContactConfig {
            endpoint_url: "http://127.0.0.1:9/exec".to_string(),
            simulated_delay_ms: 1500,
            request_timeout_seconds: 2,
        })
        .unwrap();

        let status = submitter.submit(form()).await;
        assert_eq!(status, SubmissionStatus::Success);
    }

    #[tokio::test]
    async fn test_reset_returns_to_idle() {
        let submitter = submitter_without_endpoint(0);
        submitter.submit(form()).await;
        assert_eq!(submitter.status(), SubmissionStatus::Success);

        submitter.reset();
        assert_eq!(submitter.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_invalid_endpoint_url_is_rejected() {
        let result = ContactSubmitter::from_config(&ContactConfig {
            endpoint_url: "not a url".to_string(),
            simulated_delay_ms: 1500,
            request_timeout_seconds: 30,
        });
        assert!(result.is_err());
    }
}
