use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::availability::format_date;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Every booking starts here; the shop confirms it out of band.
    Pending,
}

impl BookingStatus {
    /// Text shown to the customer.
    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "รอการยืนยันจากแอดมิน",
        }
    }
}

/// Raw field values as typed into the booking form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub car_model: String,
    #[serde(default)]
    pub license_plate: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub car_model: Option<String>,
    pub license_plate: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.phone.is_none()
            && self.car_model.is_none()
            && self.license_plate.is_none()
    }
}

/// Validated form plus the chosen day, in the shape the backend expects.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    pub name: String,
    pub phone: String,
    pub car_model: String,
    pub license_plate: String,
    #[serde(serialize_with = "serialize_day")]
    pub preferred_date: NaiveDate,
    pub status: BookingStatus,
}

fn serialize_day<S: serde::Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format_date(*date))
}

/// What the customer sees after a successful submit.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRecord {
    pub draft: BookingDraft,
    pub status: BookingStatus,
}

impl From<BookingDraft> for BookingRecord {
    fn from(draft: BookingDraft) -> Self {
        Self {
            status: draft.status.clone(),
            draft,
        }
    }
}
