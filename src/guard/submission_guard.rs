use chrono::Utc;

use crate::domain::{EntrantEmail, EntrantName, NewWaitlistEntry};
use crate::waitlist_client::WaitlistClient;

use super::{AttemptStore, FormView, MessageTone, RateLimiter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    BotDetected,
    RateLimited,
    InvalidInput,
    Failed,
}

/// Gates a waitlist signup before it reaches the network: honeypot check,
/// local rate limit, input validation, then the POST itself. Every failure
/// is terminal for the attempt; a new user action is required to retry.
pub struct SubmissionGuard<S: AttemptStore> {
    client: WaitlistClient,
    limiter: RateLimiter,
    store: S,
}

impl<S: AttemptStore> SubmissionGuard<S> {
    pub fn new(client: WaitlistClient, limiter: RateLimiter, store: S) -> Self {
        Self {
            client,
            limiter,
            store,
        }
    }

    #[tracing::instrument(name = "Submitting a waitlist signup.", skip(self, view))]
    pub async fn submit(&mut self, view: &mut dyn FormView) -> SubmitOutcome {
        if !view.honeypot().trim().is_empty() {
            // Automated submission: drop it without any visible feedback.
            tracing::info!("Honeypot field was filled in, dropping the submission");
            return SubmitOutcome::BotDetected;
        }

        let status = self.limiter.check(&self.store, Utc::now().timestamp_millis());
        if status.limited {
            let text = if status.remaining_seconds > 0 {
                format!(
                    "Too many attempts. Please wait {} seconds.",
                    status.remaining_seconds
                )
            } else {
                "Too many attempts. Please wait a few minutes before trying again.".to_string()
            };
            view.set_message(&text, MessageTone::Warning);
            return SubmitOutcome::RateLimited;
        }

        let name = match EntrantName::parse(view.name().trim().to_owned()) {
            Ok(name) => name,
            Err(_) => {
                view.set_message(
                    "Please enter a valid name (letters, spaces, 2-50 chars).",
                    MessageTone::Error,
                );
                return SubmitOutcome::InvalidInput;
            }
        };
        let email = match EntrantEmail::parse(view.email().trim().to_owned()) {
            Ok(email) => email,
            Err(_) => {
                view.set_message("Please enter a valid email.", MessageTone::Error);
                return SubmitOutcome::InvalidInput;
            }
        };

        self.limiter
            .record_attempt(&mut self.store, Utc::now().timestamp_millis());
        view.set_message("Submitting...", MessageTone::Neutral);

        let entry = NewWaitlistEntry { name, email };
        match self.client.submit_entry(&entry).await {
            Ok(()) => {
                view.set_message(
                    "Thank you! You have been added to the waitlist.",
                    MessageTone::Success,
                );
                view.reset();
                SubmitOutcome::Accepted
            }
            Err(err) => {
                tracing::warn!(error.message = %err, "Waitlist submission failed");
                view.set_message(&err.to_string(), MessageTone::Error);
                SubmitOutcome::Failed
            }
        }
    }
}
