use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;

use super::{existing_visitor, session_expired};
use crate::errors::AppError;
use crate::models::availability::parse_date;
use crate::models::BookingForm;
use crate::services::booking::submit_booking;
use crate::services::controller::BookingController;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct DateForm {
    #[serde(default)]
    pub date: String,
}

/// Applies a synchronous controller transition and redirects back to the page.
/// Without a session there is no form to act on, so the visitor is sent to `/`.
async fn act(
    state: &AppState,
    headers: &HeaderMap,
    f: impl FnOnce(&mut BookingController),
) -> Result<Response, AppError> {
    let Some(id) = existing_visitor(state, headers) else {
        return Ok(Redirect::to("/").into_response());
    };
    let today = state.config.today();
    state
        .sessions
        .with(id, |s| {
            s.booking.set_today(today);
            f(&mut s.booking)
        })
        .ok_or_else(session_expired)?;
    Ok(Redirect::to("/").into_response())
}

// POST /dates/prev
pub async fn prev_dates(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    act(&state, &headers, BookingController::prev).await
}

// POST /dates/next
pub async fn next_dates(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    act(&state, &headers, BookingController::next).await
}

// POST /dates/select
pub async fn select_date(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(form): Form<DateForm>,
) -> Result<Response, AppError> {
    act(&state, &headers, |c| match parse_date(&form.date) {
        Some(date) => {
            c.select_date(date);
        }
        None => c.reject_invalid_date(),
    })
    .await
}

// POST /dates/picker/open
pub async fn open_picker(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    act(&state, &headers, BookingController::open_picker).await
}

// POST /dates/picker/close
pub async fn close_picker(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    act(&state, &headers, BookingController::close_picker).await
}

// POST /dates/pick
pub async fn pick_date(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(form): Form<DateForm>,
) -> Result<Response, AppError> {
    act(&state, &headers, |c| match parse_date(&form.date) {
        Some(date) => {
            c.pick_date(date);
        }
        None => c.reject_invalid_date(),
    })
    .await
}

// POST /confirmation/close
pub async fn close_confirmation(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    act(&state, &headers, BookingController::close_confirmation).await
}

// POST /booking
pub async fn submit(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(form): Form<BookingForm>,
) -> Result<Response, AppError> {
    let Some(id) = existing_visitor(&state, &headers) else {
        return Ok(Redirect::to("/").into_response());
    };
    let outcome = submit_booking(&state, id, form)
        .await
        .ok_or_else(session_expired)?;
    tracing::debug!(visitor = %id, ?outcome, "booking form handled");
    Ok(Redirect::to("/").into_response())
}
