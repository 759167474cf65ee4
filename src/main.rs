use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use maintenance_desk::config::AppConfig;
use maintenance_desk::handlers;
use maintenance_desk::services::backend::http::HttpMaintenanceApi;
use maintenance_desk::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    tracing::info!(
        "using maintenance backend at {} (timezone {})",
        config.api_base_url,
        config.shop_timezone
    );

    let api = HttpMaintenanceApi::new(config.api_base_url.clone(), config.request_timeout_secs)?;
    let state = Arc::new(AppState::new(config.clone(), Box::new(api)));

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/", get(handlers::pages::page))
        .route("/admin", get(handlers::pages::page))
        .route(
            "/admin/login",
            get(handlers::pages::page).post(handlers::admin::login),
        )
        .route("/admin/logout", post(handlers::admin::logout))
        .route("/dates/prev", post(handlers::booking::prev_dates))
        .route("/dates/next", post(handlers::booking::next_dates))
        .route("/dates/select", post(handlers::booking::select_date))
        .route("/dates/pick", post(handlers::booking::pick_date))
        .route("/dates/picker/open", post(handlers::booking::open_picker))
        .route("/dates/picker/close", post(handlers::booking::close_picker))
        .route("/booking", post(handlers::booking::submit))
        .route(
            "/confirmation/close",
            post(handlers::booking::close_confirmation),
        )
        .fallback(handlers::pages::page)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
