use chrono::NaiveDate;

use crate::i18n;
use crate::models::{
    BookedDateSet, BookingDraft, BookingForm, BookingRecord, BookingStatus, FieldErrors, Notice,
    VisibleWindow,
};
use crate::services::availability::{self, Derivation};
use crate::services::backend::ApiError;
use crate::services::validation;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejection {
    #[error("a submission is already in flight")]
    InFlight,

    #[error("form has invalid fields")]
    InvalidFields,

    #[error("no date selected")]
    NoDateSelected,

    #[error("{0} is fully booked")]
    DateFull(NaiveDate),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Booking stored; availability must be reloaded.
    Accepted,
    Failed,
}

/// State of one visitor's date picker and booking form.
///
/// Network work is split into `begin_*` / `finish_*` pairs so callers never hold
/// the controller across an await point. All derived state (the window, which
/// days are full) is recomputed from current values on every read.
#[derive(Debug, Clone)]
pub struct BookingController {
    today: NaiveDate,
    offset: i64,
    booked: BookedDateSet,
    selection: Option<NaiveDate>,
    loading: bool,
    mounted: bool,
    in_flight: Option<BookingDraft>,
    picker_open: bool,
    auto_advance_pending: bool,
    max_lookahead_days: i64,
    form: BookingForm,
    field_errors: FieldErrors,
    notices: Vec<Notice>,
    confirmation: Option<BookingRecord>,
}

impl BookingController {
    /// A freshly mounted form: loading until the first availability fetch lands.
    pub fn new(today: NaiveDate, max_lookahead_days: i64) -> Self {
        Self {
            today,
            offset: 0,
            booked: BookedDateSet::new(),
            selection: None,
            loading: true,
            mounted: false,
            in_flight: None,
            picker_open: false,
            auto_advance_pending: false,
            max_lookahead_days,
            form: BookingForm::default(),
            field_errors: FieldErrors::default(),
            notices: Vec::new(),
            confirmation: None,
        }
    }

    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    // ── Reads ──

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn window(&self) -> VisibleWindow {
        VisibleWindow::compute(self.today, self.offset)
    }

    pub fn selection(&self) -> Option<NaiveDate> {
        self.selection
    }

    pub fn is_selected(&self, date: NaiveDate) -> bool {
        self.selection == Some(date)
    }

    pub fn is_full(&self, date: NaiveDate) -> bool {
        self.booked.contains(date)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn can_go_prev(&self) -> bool {
        self.offset > 0
    }

    pub fn picker_open(&self) -> bool {
        self.picker_open
    }

    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    pub fn confirmation(&self) -> Option<&BookingRecord> {
        self.confirmation.as_ref()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Hands pending notices to the renderer; each is shown once.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    // ── Availability loader ──

    /// Claims the first availability load. Only the first caller gets `true`.
    pub fn mount(&mut self) -> bool {
        !std::mem::replace(&mut self.mounted, true)
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Applies a fetch result. Failures degrade to an empty set so the customer can
    /// still pick a day; the backend re-checks on submit.
    pub fn finish_load(&mut self, result: Result<BookedDateSet, ApiError>) {
        self.booked = match result {
            Ok(booked) => booked,
            Err(e) => {
                tracing::warn!("failed to load booked dates: {e}");
                self.notices.push(Notice::error(i18n::BOOKED_DATES_FAILED));
                BookedDateSet::new()
            }
        };
        self.loading = false;
        self.auto_advance_pending = true;
    }

    // ── Auto-advance ──

    /// One update cycle. Returns `true` when it changed the selection or the window.
    pub fn tick(&mut self) -> bool {
        if !self.auto_advance_pending || self.loading {
            return false;
        }

        match availability::derive_selection(&self.window(), &self.booked, self.selection) {
            Derivation::Keep => {
                self.auto_advance_pending = false;
                false
            }
            Derivation::Select(date) => {
                self.selection = Some(date);
                self.auto_advance_pending = false;
                true
            }
            Derivation::Advance(next) if next > self.max_lookahead_days => {
                tracing::warn!(
                    offset = self.offset,
                    "no open day within {} days",
                    self.max_lookahead_days
                );
                self.auto_advance_pending = false;
                self.notices.push(Notice::error(i18n::NO_AVAILABLE_DATES));
                false
            }
            Derivation::Advance(next) => {
                self.offset = next;
                true
            }
        }
    }

    /// Runs update cycles until nothing changes. Bounded by the lookahead.
    pub fn settle(&mut self) {
        while self.tick() {}
    }

    // ── Navigation ──

    pub fn prev(&mut self) {
        if !self.can_go_prev() {
            return;
        }
        self.offset = availability::prev_offset(self.offset);
        self.auto_advance_pending = false;
    }

    pub fn next(&mut self) {
        self.offset = availability::next_offset(self.offset);
        self.auto_advance_pending = false;
    }

    pub fn open_picker(&mut self) {
        self.picker_open = true;
    }

    pub fn close_picker(&mut self) {
        self.picker_open = false;
    }

    fn reject_if_unbookable(&mut self, date: NaiveDate) -> bool {
        let ahead = date.signed_duration_since(self.today).num_days();
        if ahead > self.max_lookahead_days {
            tracing::debug!(%date, "rejected date beyond {} days", self.max_lookahead_days);
            self.notices.push(Notice::error(i18n::INVALID_DATE));
            return true;
        }
        if self.is_full(date) {
            tracing::debug!(%date, "rejected full date");
            self.notices.push(Notice::error(i18n::DATE_FULL));
            return true;
        }
        false
    }

    /// Selects a day shown in the window.
    pub fn select_date(&mut self, date: NaiveDate) -> bool {
        if self.reject_if_unbookable(date) {
            return false;
        }
        self.selection = Some(date);
        self.auto_advance_pending = false;
        true
    }

    /// Selects an arbitrary day from the pop-up calendar and moves the window to it.
    pub fn pick_date(&mut self, date: NaiveDate) -> bool {
        if self.reject_if_unbookable(date) {
            return false;
        }
        self.selection = Some(date);
        self.offset = availability::offset_for(self.today, date);
        self.picker_open = false;
        self.auto_advance_pending = false;
        true
    }

    pub fn reject_invalid_date(&mut self) {
        self.notices.push(Notice::error(i18n::INVALID_DATE));
    }

    // ── Submit ──

    /// Runs every pre-network check and marks the submission in flight.
    pub fn begin_submit(&mut self, form: BookingForm) -> Result<BookingDraft, SubmitRejection> {
        if self.in_flight.is_some() {
            return Err(SubmitRejection::InFlight);
        }

        self.form = form;
        self.field_errors = validation::validate_form(&self.form);
        if !self.field_errors.is_empty() {
            return Err(SubmitRejection::InvalidFields);
        }

        let Some(date) = self.selection else {
            self.notices.push(Notice::error(i18n::CHOOSE_DATE));
            return Err(SubmitRejection::NoDateSelected);
        };

        if self.is_full(date) {
            self.notices.push(Notice::error(i18n::DATE_FULL));
            return Err(SubmitRejection::DateFull(date));
        }

        let draft = BookingDraft {
            name: self.form.name.trim().to_string(),
            phone: self.form.phone.trim().to_string(),
            car_model: self.form.car_model.trim().to_string(),
            license_plate: self.form.license_plate.trim().to_string(),
            preferred_date: date,
            status: BookingStatus::Pending,
        };
        self.in_flight = Some(draft.clone());
        Ok(draft)
    }

    pub fn finish_submit(&mut self, result: Result<(), ApiError>) -> SubmitOutcome {
        let draft = self.in_flight.take();

        match (result, draft) {
            (Ok(()), Some(draft)) => {
                self.notices
                    .push(Notice::success(i18n::SUBMIT_OK_TITLE, i18n::SUBMIT_OK_DETAIL));
                self.confirmation = Some(BookingRecord::from(draft));
                self.form = BookingForm::default();
                self.field_errors = FieldErrors::default();
                self.selection = None;
                self.offset = 0;
                self.picker_open = false;
                SubmitOutcome::Accepted
            }
            (Ok(()), None) => {
                tracing::warn!("submit finished with nothing in flight");
                SubmitOutcome::Failed
            }
            (Err(e), _) => {
                tracing::error!("booking submission failed: {e}");
                self.notices.push(Notice::error(format!(
                    "{}: {}",
                    i18n::SUBMIT_FAILED_PREFIX,
                    e.user_message()
                )));
                SubmitOutcome::Failed
            }
        }
    }

    // ── Confirmation ──

    pub fn close_confirmation(&mut self) {
        self.confirmation = None;
    }
}
