use chrono::NaiveDate;

use crate::models::{BookedDateSet, VisibleWindow, PAGE_SIZE};

/// One step back, never below zero.
pub fn prev_offset(offset: i64) -> i64 {
    if offset <= 0 {
        0
    } else {
        (offset - PAGE_SIZE).max(0)
    }
}

pub fn next_offset(offset: i64) -> i64 {
    offset.max(0) + PAGE_SIZE
}

/// Offset of the page that contains `picked`. Days before `today` map to 0.
pub fn offset_for(today: NaiveDate, picked: NaiveDate) -> i64 {
    let days = (picked - today).num_days();
    if days < 0 {
        0
    } else {
        days / PAGE_SIZE * PAGE_SIZE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Derivation {
    /// A date is already selected.
    Keep,
    Select(NaiveDate),
    /// Every day in the window is full; move to this offset.
    Advance(i64),
}

/// One auto-advance step: pick the first open day in `window`, or move one page on.
pub fn derive_selection(
    window: &VisibleWindow,
    booked: &BookedDateSet,
    current: Option<NaiveDate>,
) -> Derivation {
    if current.is_some() {
        return Derivation::Keep;
    }
    match window.first_open(booked) {
        Some(date) => Derivation::Select(date),
        None => Derivation::Advance(next_offset(window.offset)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::availability::parse_date;

    fn d(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn test_prev_is_noop_at_zero() {
        assert_eq!(prev_offset(0), 0);
    }

    #[test]
    fn test_prev_steps_back_one_page() {
        assert_eq!(prev_offset(5), 0);
        assert_eq!(prev_offset(20), 15);
        // Offsets from a direct pick are page aligned, but stay non-negative regardless
        assert_eq!(prev_offset(3), 0);
    }

    #[test]
    fn test_next_is_unbounded() {
        assert_eq!(next_offset(0), 5);
        assert_eq!(next_offset(1000), 1005);
    }

    #[test]
    fn test_offset_for_direct_pick() {
        let today = d("2025-05-20");
        assert_eq!(offset_for(today, d("2025-05-20")), 0);
        assert_eq!(offset_for(today, d("2025-05-24")), 0);
        assert_eq!(offset_for(today, d("2025-05-25")), 5);
        assert_eq!(offset_for(today, d("2025-06-19")), 30);
    }

    #[test]
    fn test_offset_for_past_date_is_zero() {
        assert_eq!(offset_for(d("2025-05-20"), d("2025-05-01")), 0);
    }

    #[test]
    fn test_derive_selects_first_open_day() {
        let window = VisibleWindow::compute(d("2025-05-20"), 0);
        let booked = BookedDateSet::from_strings(["2025-05-22"]);
        assert_eq!(
            derive_selection(&window, &booked, None),
            Derivation::Select(d("2025-05-20"))
        );
    }

    #[test]
    fn test_derive_keeps_existing_selection() {
        let window = VisibleWindow::compute(d("2025-05-20"), 0);
        let booked = BookedDateSet::new();
        assert_eq!(
            derive_selection(&window, &booked, Some(d("2025-05-23"))),
            Derivation::Keep
        );
    }

    #[test]
    fn test_derive_advances_one_page_when_window_full() {
        let window = VisibleWindow::compute(d("2025-05-20"), 0);
        let booked: BookedDateSet = window.dates.iter().copied().collect();
        assert_eq!(derive_selection(&window, &booked, None), Derivation::Advance(5));
    }

    #[test]
    fn test_derive_with_empty_set_picks_window_start() {
        let window = VisibleWindow::compute(d("2025-05-20"), 10);
        assert_eq!(
            derive_selection(&window, &BookedDateSet::new(), None),
            Derivation::Select(d("2025-05-30"))
        );
    }
}
