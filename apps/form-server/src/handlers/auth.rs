//! Login and registration handlers.

use actix_web::{HttpResponse, http::header, web};

use magdalene_core::LoginOutcome;
use magdalene_core::domain::LoginAttempt;
use magdalene_shared::dto::CredentialsForm;
use magdalene_shared::{LOGIN_FAILED, LOGIN_REDIRECT};

use crate::middleware::error::AppResult;
use crate::middleware::extract::Submission;
use crate::state::AppState;

fn redirect_to_store() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, LOGIN_REDIRECT))
        .finish()
}

fn login_failed() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(LOGIN_FAILED)
}

/// POST /login
///
/// A form without email or password is just a failed login.
pub async fn login(
    state: web::Data<AppState>,
    body: Submission<CredentialsForm>,
) -> AppResult<HttpResponse> {
    let attempt = match LoginAttempt::try_from(body.into_inner().into_document()) {
        Ok(attempt) => attempt,
        Err(e) => {
            tracing::debug!(error = %e, "Incomplete login form");
            return Ok(login_failed());
        }
    };

    match state.submissions.login(&attempt).await? {
        LoginOutcome::Authenticated => Ok(redirect_to_store()),
        LoginOutcome::Rejected => Ok(login_failed()),
    }
}

/// POST /register
pub async fn register(
    state: web::Data<AppState>,
    body: Submission<CredentialsForm>,
) -> AppResult<HttpResponse> {
    let attempt = LoginAttempt::try_from(body.into_inner().into_document())?;

    let credential = state.submissions.register(attempt).await?;
    tracing::info!(id = %credential.id, "Credential registered");

    Ok(redirect_to_store())
}
