use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::info;
use thiserror::Error;

use crate::config;
use crate::contact::form::ContactSubmission;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("server answered with status {0}")]
    Status(u16),
}

/// Where a validated submission is delivered.
#[derive(Clone, Debug, PartialEq)]
pub enum Submitter {
    /// Waits out a fixed delay and reports success. Stands in until an
    /// endpoint is configured.
    Simulated { delay_ms: u32 },
    /// POSTs the submission as JSON.
    Endpoint(String),
}

impl Submitter {
    pub fn from_config() -> Self {
        match config::contact_endpoint() {
            Some(url) => Submitter::Endpoint(url),
            None => Submitter::Simulated { delay_ms: config::SIMULATED_SUBMIT_DELAY_MS },
        }
    }

    pub async fn submit(&self, submission: &ContactSubmission) -> Result<(), SubmitError> {
        match self {
            Submitter::Simulated { delay_ms } => {
                TimeoutFuture::new(*delay_ms).await;
                info!(
                    "Form submitted: {}",
                    serde_json::to_string(submission).unwrap_or_default()
                );
                Ok(())
            }
            Submitter::Endpoint(url) => {
                let response = Request::post(url).json(submission)?.send().await?;
                if response.ok() {
                    info!("Form delivered to {}", url);
                    Ok(())
                } else {
                    Err(SubmitError::Status(response.status()))
                }
            }
        }
    }
}
