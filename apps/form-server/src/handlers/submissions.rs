//! Storefront form handlers: purchase, booking, and quote requests.

use actix_web::{HttpResponse, web};

use magdalene_core::domain::{Booking, PurchaseRequest, QuoteRequest};
use magdalene_shared::dto::{BookingForm, PurchaseForm, QuoteForm};
use magdalene_shared::{BOOKING_SUCCESS, PURCHASE_SUCCESS, QUOTE_SUCCESS};

use crate::middleware::error::AppResult;
use crate::middleware::extract::Submission;
use crate::state::AppState;

fn html(body: &'static str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

/// POST /buynow
pub async fn buy_now(
    state: web::Data<AppState>,
    body: Submission<PurchaseForm>,
) -> AppResult<HttpResponse> {
    let request = PurchaseRequest::try_from(body.into_inner().into_document())?;

    let saved = state.submissions.submit_purchase(request).await?;
    tracing::info!(id = %saved.id, car = %saved.car, "Purchase request stored");

    Ok(html(PURCHASE_SUCCESS))
}

/// POST /booking
pub async fn booking(
    state: web::Data<AppState>,
    body: Submission<BookingForm>,
) -> AppResult<HttpResponse> {
    let booking = Booking::try_from(body.into_inner().into_document())?;

    let saved = state.submissions.submit_booking(booking).await?;
    tracing::info!(id = %saved.id, service = %saved.service, "Booking stored");

    Ok(html(BOOKING_SUCCESS))
}

/// POST /getaquote
pub async fn get_a_quote(
    state: web::Data<AppState>,
    body: Submission<QuoteForm>,
) -> AppResult<HttpResponse> {
    let quote = QuoteRequest::try_from(body.into_inner().into_document())?;

    let saved = state.submissions.submit_quote(quote).await?;
    tracing::info!(id = %saved.id, budget = %saved.budget, "Quote request stored");

    Ok(html(QUOTE_SUCCESS))
}
