pub mod admin;
pub mod booking;
pub mod health;
pub mod pages;

use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

const VISITOR_COOKIE: &str = "visitor";

fn visitor_from_headers(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().strip_prefix("visitor="))
        .find_map(|id| Uuid::parse_str(id).ok())
}

/// The visitor's session if the cookie names a live one. Never creates a session.
pub fn existing_visitor(state: &AppState, headers: &HeaderMap) -> Option<Uuid> {
    state.sessions.touch(visitor_from_headers(headers))
}

/// The visitor's session, created when the cookie is missing or stale.
pub fn visitor(state: &AppState, headers: &HeaderMap) -> Uuid {
    state
        .sessions
        .ensure(visitor_from_headers(headers), state.config.today())
}

/// Attaches the visitor cookie to any response.
pub fn with_cookie(id: Uuid, resp: impl IntoResponse) -> Response {
    let cookie = format!("{VISITOR_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax");
    ([(SET_COOKIE, cookie)], resp).into_response()
}

pub fn session_expired() -> AppError {
    AppError::SessionExpired
}
