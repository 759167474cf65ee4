use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, Uri};
use axum::response::{Html, IntoResponse, Redirect, Response};

use super::{existing_visitor, session_expired, visitor, with_cookie};
use crate::errors::AppError;
use crate::services::booking::load_availability;
use crate::services::session::{guard, Route, RouteDecision};
use crate::state::AppState;
use crate::views;

// GET /, /admin, /admin/login and every unknown path
pub async fn page(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    uri: Uri,
) -> Result<Response, AppError> {
    let route = Route::from_path(uri.path());
    if route == Route::Booking {
        return booking_page(&state, &headers).await;
    }

    // Admin pages and redirects only read an existing session
    let authenticated = existing_visitor(&state, &headers)
        .and_then(|id| state.sessions.with(id, |s| s.admin.is_authenticated()))
        .unwrap_or(false);

    Ok(match guard(route, authenticated) {
        RouteDecision::Redirect(to) => Redirect::to(to).into_response(),
        RouteDecision::Render(Route::AdminLogin) => {
            Html(views::admin::render_login(None, "")).into_response()
        }
        RouteDecision::Render(Route::AdminDashboard) => {
            Html(views::admin::render_dashboard()).into_response()
        }
        RouteDecision::Render(_) => Redirect::to("/").into_response(),
    })
}

/// Mounts the booking form on the first visit, then renders it.
async fn booking_page(state: &AppState, headers: &HeaderMap) -> Result<Response, AppError> {
    let id = visitor(state, headers);
    if state.sessions.with(id, |s| s.booking.mount()) == Some(true) {
        load_availability(state, id).await;
    }

    let today = state.config.today();
    let html = state
        .sessions
        .with(id, |s| {
            s.booking.set_today(today);
            let notices = s.booking.take_notices();
            views::booking::render_booking_page(&s.booking, &notices, &state.config)
        })
        .ok_or_else(session_expired)?;

    Ok(with_cookie(id, Html(html)))
}
