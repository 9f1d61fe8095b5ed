use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use super::super::helpers::error_chain_fmt;
use super::types::ErrorResponse;

#[derive(thiserror::Error)]
pub enum SaveWaitlistError {
    #[error("Name and email required")]
    MissingFields,
    #[error("This email is already on the waitlist")]
    DuplicateEmail,
    #[error(transparent)]
    StorageError(sqlx::Error),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for SaveWaitlistError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for SaveWaitlistError {
    fn status_code(&self) -> StatusCode {
        match self {
            SaveWaitlistError::MissingFields
            | SaveWaitlistError::DuplicateEmail
            | SaveWaitlistError::StorageError(_) => StatusCode::BAD_REQUEST,
            SaveWaitlistError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}
