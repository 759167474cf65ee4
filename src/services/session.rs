use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use chrono::{Duration, NaiveDate, NaiveDateTime, Utc};
use tokio::sync::watch;
use uuid::Uuid;

use crate::services::controller::BookingController;

/// Admin authentication for one visitor. Changes are published so interested
/// parts of the app can react instead of re-reading the token.
#[derive(Debug)]
pub struct AdminSession {
    token: Option<String>,
    changes: watch::Sender<bool>,
}

impl Default for AdminSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AdminSession {
    pub fn new() -> Self {
        let (changes, _) = watch::channel(false);
        Self {
            token: None,
            changes,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn sign_in(&mut self, token: String) {
        self.token = Some(token);
        self.changes.send_replace(true);
    }

    pub fn sign_out(&mut self) {
        if self.token.take().is_some() {
            self.changes.send_replace(false);
        }
    }

    /// Receiver that yields the authentication flag every time it changes.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.changes.subscribe()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Booking,
    AdminLogin,
    AdminDashboard,
    Unknown,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" => Route::Booking,
            "/admin/login" => Route::AdminLogin,
            "/admin" => Route::AdminDashboard,
            _ => Route::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Render(Route),
    Redirect(&'static str),
}

pub fn guard(route: Route, authenticated: bool) -> RouteDecision {
    match (route, authenticated) {
        (Route::Booking, _) => RouteDecision::Render(Route::Booking),
        (Route::AdminLogin, true) => RouteDecision::Redirect("/admin"),
        (Route::AdminLogin, false) => RouteDecision::Render(Route::AdminLogin),
        (Route::AdminDashboard, true) => RouteDecision::Render(Route::AdminDashboard),
        (Route::AdminDashboard, false) => RouteDecision::Redirect("/admin/login"),
        (Route::Unknown, _) => RouteDecision::Redirect("/"),
    }
}

pub struct VisitorSession {
    pub booking: BookingController,
    pub admin: AdminSession,
    pub last_seen: NaiveDateTime,
}

/// In-memory visitor sessions keyed by the `visitor` cookie.
pub struct SessionStore {
    sessions: Mutex<HashMap<Uuid, VisitorSession>>,
    ttl: Duration,
    max_lookahead_days: i64,
}

impl SessionStore {
    pub fn new(ttl_minutes: i64, max_lookahead_days: i64) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            ttl: Duration::try_minutes(ttl_minutes.max(0)).unwrap_or_else(|| Duration::hours(1)),
            max_lookahead_days,
        }
    }

    /// Locks the map, recovering it after a panic inside [`SessionStore::with`].
    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, VisitorSession>> {
        self.sessions.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("recovering visitor sessions after a panic");
            self.sessions.clear_poison();
            poisoned.into_inner()
        })
    }

    /// Marks a known session as seen and returns its id. Never creates one.
    pub fn touch(&self, id: Option<Uuid>) -> Option<Uuid> {
        let id = id?;
        let now = Utc::now().naive_utc();
        let mut sessions = self.lock();
        let session = sessions.get_mut(&id)?;
        session.last_seen = now;
        Some(id)
    }

    /// Returns the id of an existing session, or creates one.
    pub fn ensure(&self, id: Option<Uuid>, today: NaiveDate) -> Uuid {
        if let Some(id) = self.touch(id) {
            return id;
        }

        let now = Utc::now().naive_utc();
        let mut sessions = self.lock();

        let ttl = self.ttl;
        let before = sessions.len();
        sessions.retain(|_, s| now - s.last_seen < ttl);
        let pruned = before - sessions.len();
        if pruned > 0 {
            tracing::debug!("pruned {pruned} idle visitor sessions");
        }

        let id = Uuid::new_v4();
        let admin = AdminSession::new();
        watch_admin(id, admin.subscribe());
        sessions.insert(
            id,
            VisitorSession {
                booking: BookingController::new(today, self.max_lookahead_days),
                admin,
                last_seen: now,
            },
        );
        tracing::info!(visitor = %id, "new visitor session");
        id
    }

    /// Runs `f` against a session under the lock. Never call across an await.
    pub fn with<R>(&self, id: Uuid, f: impl FnOnce(&mut VisitorSession) -> R) -> Option<R> {
        self.lock().get_mut(&id).map(f)
    }

    pub fn active_sessions(&self) -> usize {
        self.lock().len()
    }
}

/// Logs admin sign-in and sign-out for a visitor until its session is dropped.
fn watch_admin(visitor: Uuid, mut rx: watch::Receiver<bool>) {
    if tokio::runtime::Handle::try_current().is_err() {
        return;
    }
    tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let authenticated = *rx.borrow_and_update();
            if authenticated {
                tracing::info!(%visitor, "admin signed in");
            } else {
                tracing::info!(%visitor, "admin signed out");
            }
        }
    });
}
