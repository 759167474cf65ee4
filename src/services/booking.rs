use uuid::Uuid;

use crate::models::BookingForm;
use crate::services::controller::{SubmitOutcome, SubmitRejection};
use crate::state::AppState;

/// Fetches booked dates for a visitor and runs the auto-advance cycles.
/// The session lock is released while the request is outstanding.
pub async fn load_availability(state: &AppState, visitor: Uuid) {
    if state
        .sessions
        .with(visitor, |s| s.booking.begin_load())
        .is_none()
    {
        return;
    }

    let result = state.api.booked_dates().await;

    let applied = state.sessions.with(visitor, |s| {
        s.booking.finish_load(result);
        s.booking.settle();
    });
    if applied.is_none() {
        tracing::debug!(%visitor, "session gone before booked dates arrived");
    }
}

/// Validates, posts and finalizes one booking. Returns `None` when the visitor
/// session no longer exists.
pub async fn submit_booking(
    state: &AppState,
    visitor: Uuid,
    form: BookingForm,
) -> Option<Result<SubmitOutcome, SubmitRejection>> {
    let today = state.config.today();
    let begun = state.sessions.with(visitor, |s| {
        s.booking.set_today(today);
        s.booking.begin_submit(form)
    })?;

    let draft = match begun {
        Err(rejection) => {
            tracing::warn!(%visitor, "booking rejected before submit: {rejection}");
            return Some(Err(rejection));
        }
        Ok(draft) => draft,
    };

    let result = state.api.submit_booking(&draft).await;

    let outcome = state
        .sessions
        .with(visitor, |s| s.booking.finish_submit(result));

    if outcome == Some(SubmitOutcome::Accepted) {
        tracing::info!(
            %visitor,
            date = %draft.preferred_date,
            "maintenance booking submitted"
        );
        load_availability(state, visitor).await;
    }
    outcome.map(Ok)
}
