use actix_web::http::Method;
use actix_web::{HttpRequest, HttpResponse, web};
use anyhow::Context;
use sqlx::PgPool;
use sqlx::types::chrono::Utc;
use uuid::Uuid;

use super::errors::SaveWaitlistError;
use super::types::{ErrorResponse, SaveWaitlistRequest, SaveWaitlistResponse};

// Postgres unique_violation
const UNIQUE_VIOLATION: &str = "23505";

#[tracing::instrument(name = "Adding a new waitlist entrant.", skip(body, db_pool))]
pub async fn save_waitlist(
    body: web::Bytes,
    db_pool: web::Data<PgPool>,
) -> Result<HttpResponse, SaveWaitlistError> {
    // The body is parsed here rather than by an extractor: an undecodable
    // payload is an internal error, not a malformed-request rejection.
    let request: SaveWaitlistRequest = serde_json::from_slice(&body)
        .context("Failed to parse the request body as JSON")
        .map_err(SaveWaitlistError::UnexpectedError)?;

    let (name, email) = match (request.name.as_deref(), request.email.as_deref()) {
        (Some(name), Some(email)) if !name.is_empty() && !email.is_empty() => (name, email),
        _ => return Err(SaveWaitlistError::MissingFields),
    };

    insert_entrant(&db_pool, name, email).await?;

    Ok(HttpResponse::Ok().json(SaveWaitlistResponse { success: true }))
}

/// Catch-all for the waitlist resource: bare OPTIONS gets a plain `ok`
/// (preflights with CORS headers are answered by the middleware), anything
/// else is not allowed.
pub async fn save_waitlist_fallback(request: HttpRequest) -> HttpResponse {
    if request.method() == Method::OPTIONS {
        return HttpResponse::Ok().body("ok");
    }

    HttpResponse::MethodNotAllowed().json(ErrorResponse {
        error: "Method not allowed".to_string(),
    })
}

#[tracing::instrument(
    name = "Saving new waitlist entrant in the database",
    skip(pool, name, email),
    fields(entrant_email = %email, entrant_name = %name)
)]
pub async fn insert_entrant(
    pool: &PgPool,
    name: &str,
    email: &str,
) -> Result<(), SaveWaitlistError> {
    sqlx::query(
        r#"
        INSERT INTO email_list (id, name, email, joined_at)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(name)
    .bind(email)
    .bind(Utc::now())
    .execute(pool)
    .await
    .map_err(|err| match &err {
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) => {
            SaveWaitlistError::DuplicateEmail
        }
        _ => {
            tracing::error!("Failed to execute query: {:?}", err);
            SaveWaitlistError::StorageError(err)
        }
    })?;

    Ok(())
}
