use gloo_net::http::Request;
use log::info;
use thiserror::Error;

use super::form::ContactPayload;
use crate::config;

/// Why a relay submission failed. The page shows the same message for all of
/// these; the variant only reaches the console.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SubmitError {
    #[error("could not build relay request: {0}")]
    Request(String),
    #[error("relay unreachable: {0}")]
    Transport(String),
    #[error("relay rejected submission with status {status}")]
    Rejected { status: u16 },
}

/// Any 2xx counts as accepted.
pub fn check_status(status: u16) -> Result<(), SubmitError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SubmitError::Rejected { status })
    }
}

/// POSTs the form to the relay. No timeout: a request that never settles
/// leaves the caller waiting.
pub async fn send_contact(payload: &ContactPayload) -> Result<(), SubmitError> {
    let request = Request::post(config::get_form_relay_url())
        .header("Accept", "application/json")
        .json(payload)
        .map_err(|e| SubmitError::Request(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| SubmitError::Transport(e.to_string()))?;

    info!("Form relay responded with {}", response.status());
    check_status(response.status())
}
