pub mod http;

use async_trait::async_trait;

use crate::models::{BookedDateSet, BookingDraft};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend returned {status}")]
    Server {
        status: u16,
        message: Option<String>,
    },

    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// The server's own `message` when it sent one, otherwise the error text.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server {
                message: Some(message),
                ..
            } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// The shop's REST backend. It owns bookings, availability and admin accounts.
#[async_trait]
pub trait MaintenanceApi: Send + Sync {
    async fn booked_dates(&self) -> Result<BookedDateSet, ApiError>;

    async fn submit_booking(&self, draft: &BookingDraft) -> Result<(), ApiError>;

    /// Exchanges admin credentials for a session token.
    async fn admin_login(&self, username: &str, password: &str) -> Result<String, ApiError>;
}
