//! Contact form submission
//!
//! Serializes the form into a key-value payload, POSTs it to the configured
//! endpoint, and tracks a three-state submission status. See
//! [`submitter::ContactSubmitter`] for the delivery semantics.

pub mod models;
pub mod submitter;

pub use models::{ContactForm, SubmissionStatus};
pub use submitter::ContactSubmitter;
