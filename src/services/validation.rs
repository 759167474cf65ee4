use once_cell::sync::Lazy;
use regex::Regex;

use crate::i18n;
use crate::models::{BookingForm, FieldErrors};

static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^0[0-9]{9}$").unwrap_or_else(|e| panic!("invalid phone pattern: {e}"))
});

pub fn validate_phone(raw: &str) -> Result<(), &'static str> {
    let phone = raw.trim();
    if phone.is_empty() {
        return Err(i18n::REQUIRED_PHONE);
    }
    if !PHONE_PATTERN.is_match(phone) {
        return Err(i18n::INVALID_PHONE);
    }
    Ok(())
}

fn required(value: &str, message: &'static str) -> Option<String> {
    if value.trim().is_empty() {
        Some(message.to_string())
    } else {
        None
    }
}

/// Checks every field and reports all failures at once.
pub fn validate_form(form: &BookingForm) -> FieldErrors {
    FieldErrors {
        name: required(&form.name, i18n::REQUIRED_NAME),
        phone: validate_phone(&form.phone).err().map(str::to_string),
        car_model: required(&form.car_model, i18n::REQUIRED_CAR_MODEL),
        license_plate: required(&form.license_plate, i18n::REQUIRED_LICENSE_PLATE),
    }
}
