use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;

use super::{existing_visitor, session_expired, visitor, with_cookie};
use crate::errors::AppError;
use crate::i18n;
use crate::state::AppState;
use crate::views;

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

// POST /admin/login
pub async fn login(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let username = form.username.trim();

    if username.is_empty() || form.password.is_empty() {
        let html = views::admin::render_login(Some(i18n::ADMIN_LOGIN_REQUIRED), username);
        return Ok((StatusCode::BAD_REQUEST, Html(html)).into_response());
    }

    match state.api.admin_login(username, &form.password).await {
        Ok(token) => {
            // The session is created only once there is something to keep in it
            let id = visitor(&state, &headers);
            state
                .sessions
                .with(id, |s| s.admin.sign_in(token))
                .ok_or_else(session_expired)?;
            Ok(with_cookie(id, Redirect::to("/admin")))
        }
        Err(e) => {
            tracing::warn!(%username, "admin login failed: {e}");
            let message = format!("{}: {}", i18n::ADMIN_LOGIN_FAILED, e.user_message());
            let html = views::admin::render_login(Some(&message), username);
            Ok((StatusCode::UNAUTHORIZED, Html(html)).into_response())
        }
    }
}

// POST /admin/logout
pub async fn logout(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    if let Some(id) = existing_visitor(&state, &headers) {
        state
            .sessions
            .with(id, |s| s.admin.sign_out())
            .ok_or_else(session_expired)?;
    }
    Ok(Redirect::to("/admin/login").into_response())
}
