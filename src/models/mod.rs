pub mod availability;
pub mod booking;
pub mod notice;

pub use availability::{BookedDateSet, VisibleWindow, PAGE_SIZE};
pub use booking::{BookingDraft, BookingForm, BookingRecord, BookingStatus, FieldErrors};
pub use notice::{Notice, NoticeLevel};
