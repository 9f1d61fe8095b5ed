use std::time::Duration;

use chrono::Utc;
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::NewWaitlistEntry;

/// HTTP client for the hosted waitlist endpoint. Owns the credential and the
/// timeout; one instance is built from configuration at startup.
#[derive(Clone)]
pub struct WaitlistClient {
    http_client: Client,
    base_url: Url,
    anon_key: SecretString,
    user_agent: String,
}

#[derive(Serialize)]
struct SaveWaitlistPayload<'a> {
    name: &'a str,
    email: &'a str,
    user_agent: &'a str,
    timestamp: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[derive(thiserror::Error, Debug)]
pub enum SubmitError {
    /// The server answered and turned the signup down.
    #[error("{message}")]
    Rejected { message: String },
    #[error("Could not connect to server. Check your internet connection.")]
    Connection(#[source] reqwest::Error),
    #[error("Server configuration error. Please contact support.")]
    Configuration(#[source] reqwest::Error),
    #[error("Network error: {0}")]
    Transport(#[source] reqwest::Error),
}

impl SubmitError {
    fn from_transport(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            Self::Connection(err)
        } else if err.is_builder() || err.is_redirect() {
            Self::Configuration(err)
        } else {
            Self::Transport(err)
        }
    }
}

impl WaitlistClient {
    pub fn new(base_url: String, anon_key: SecretString, timeout: Duration) -> Self {
        Self {
            http_client: Client::builder().timeout(timeout).build().unwrap(),
            base_url: Url::parse(&base_url).expect("Failed parsing waitlist api base url."),
            anon_key,
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }

    pub async fn submit_entry(&self, entry: &NewWaitlistEntry) -> Result<(), SubmitError> {
        let url = self
            .base_url
            .join("functions/v1/save_waitlist")
            .expect("Failed joining route to waitlist api url.");

        let body = SaveWaitlistPayload {
            name: entry.name.as_ref(),
            email: entry.email.as_ref(),
            user_agent: &self.user_agent,
            timestamp: Utc::now().to_rfc3339(),
        };

        let response = self
            .http_client
            .post(url)
            .header(
                "Authorization",
                "Bearer ".to_owned() + self.anon_key.expose_secret(),
            )
            .json(&body)
            .send()
            .await
            .map_err(SubmitError::from_transport)?;

        if response.status().is_success() {
            return Ok(());
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| "Something went wrong".to_string());
        Err(SubmitError::Rejected { message })
    }
}
