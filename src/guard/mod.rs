mod attempt_store;
mod form_view;
mod rate_limit;
mod submission_guard;

pub use attempt_store::{AttemptStore, FileAttemptStore, InMemoryAttemptStore};
pub use form_view::{FormView, MessageTone};
pub use rate_limit::{RateLimitStatus, RateLimiter};
pub use submission_guard::{SubmissionGuard, SubmitOutcome};
