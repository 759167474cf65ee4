use chrono::{Datelike, NaiveDate, Weekday};

use super::{escape, layout, render_notices};
use crate::config::AppConfig;
use crate::i18n;
use crate::models::availability::format_date;
use crate::models::{BookingRecord, Notice};
use crate::services::controller::BookingController;

const THAI_MONTHS: [&str; 12] = [
    "ม.ค.", "ก.พ.", "มี.ค.", "เม.ย.", "พ.ค.", "มิ.ย.", "ก.ค.", "ส.ค.", "ก.ย.", "ต.ค.", "พ.ย.", "ธ.ค.",
];

fn thai_weekday(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "จ.",
        Weekday::Tue => "อ.",
        Weekday::Wed => "พ.",
        Weekday::Thu => "พฤ.",
        Weekday::Fri => "ศ.",
        Weekday::Sat => "ส.",
        Weekday::Sun => "อา.",
    }
}

fn thai_month(date: NaiveDate) -> &'static str {
    THAI_MONTHS[date.month0() as usize]
}

pub fn render_loading() -> String {
    layout(
        i18n::PAGE_TITLE,
        &format!("<div class=\"loading\">{}</div>", i18n::LOADING),
    )
}

fn render_day(c: &BookingController, date: NaiveDate) -> String {
    let full = c.is_full(date);
    let class = if c.is_selected(date) {
        "date-button selected-date"
    } else if full {
        "date-button full-date"
    } else {
        "date-button available-date"
    };
    let disabled = if full { " disabled" } else { "" };
    let full_label = if full {
        format!("<span class=\"full-label\">{}</span>", i18n::FULL)
    } else {
        String::new()
    };

    format!(
        "<form class=\"day\" method=\"post\" action=\"/dates/select\">\
         <input type=\"hidden\" name=\"date\" value=\"{iso}\">\
         <button type=\"submit\" class=\"{class}\" data-date=\"{iso}\"{disabled}>\
         <small>{weekday}</small><strong>{day}</strong><small>{month}</small>\
         </button>{full_label}</form>",
        iso = format_date(date),
        weekday = thai_weekday(date.weekday()),
        day = date.day(),
        month = thai_month(date),
    )
}

fn render_date_strip(c: &BookingController) -> String {
    let days: String = c.window().dates.iter().map(|d| render_day(c, *d)).collect();
    let prev_disabled = if c.can_go_prev() { "" } else { " disabled" };

    format!(
        "<label>{label}</label>\
         <div class=\"strip\">\
         <form method=\"post\" action=\"/dates/prev\"><button type=\"submit\" aria-label=\"prev\"{prev_disabled}>&lsaquo;</button></form>\
         <div class=\"days\">{days}</div>\
         <form method=\"post\" action=\"/dates/next\"><button type=\"submit\" aria-label=\"next\">&rsaquo;</button></form>\
         </div>",
        label = i18n::PREFERRED_DATE,
    )
}

fn render_picker(c: &BookingController) -> String {
    if !c.picker_open() {
        return format!(
            "<form method=\"post\" action=\"/dates/picker/open\"><button type=\"submit\">{}</button></form>",
            i18n::CHOOSE_OTHER_DATE
        );
    }

    let selected = c.selection().map(format_date).unwrap_or_default();
    format!(
        "<form method=\"post\" action=\"/dates/pick\" class=\"picker\">\
         <input type=\"date\" name=\"date\" min=\"{min}\" value=\"{selected}\" placeholder=\"{placeholder}\" required>\
         <button type=\"submit\">{confirm}</button></form>\
         <form method=\"post\" action=\"/dates/picker/close\"><button type=\"submit\">{close}</button></form>",
        min = format_date(c.today()),
        placeholder = i18n::PICKER_PLACEHOLDER,
        confirm = i18n::PICKER_CONFIRM,
        close = i18n::PICKER_CLOSE,
    )
}

fn render_field(
    name: &str,
    label: &str,
    placeholder: &str,
    value: &str,
    error: Option<&str>,
    extra: &str,
) -> String {
    let error = error
        .map(|e| format!("<div class=\"field-error\">{}</div>", escape(e)))
        .unwrap_or_default();
    format!(
        "<label for=\"{name}\">{label}</label>\
         <input id=\"{name}\" name=\"{name}\" value=\"{value}\" placeholder=\"{placeholder}\"{extra}>{error}",
        value = escape(value),
    )
}

fn render_form(c: &BookingController) -> String {
    let form = c.form();
    let errors = c.field_errors();
    let (submit_label, submit_disabled) = if c.is_submitting() {
        (i18n::SUBMITTING, " disabled")
    } else {
        (i18n::SUBMIT, "")
    };

    let fields = [
        render_field(
            "name",
            i18n::LABEL_NAME,
            i18n::PLACEHOLDER_NAME,
            &form.name,
            errors.name.as_deref(),
            "",
        ),
        render_field(
            "phone",
            i18n::LABEL_PHONE,
            i18n::PLACEHOLDER_PHONE,
            &form.phone,
            errors.phone.as_deref(),
            " maxlength=\"10\" inputmode=\"numeric\"",
        ),
        render_field(
            "car_model",
            i18n::LABEL_CAR_MODEL,
            i18n::PLACEHOLDER_CAR_MODEL,
            &form.car_model,
            errors.car_model.as_deref(),
            "",
        ),
        render_field(
            "license_plate",
            i18n::LABEL_LICENSE_PLATE,
            i18n::PLACEHOLDER_LICENSE_PLATE,
            &form.license_plate,
            errors.license_plate.as_deref(),
            "",
        ),
    ]
    .concat();

    format!(
        "<form method=\"post\" action=\"/booking\">{fields}\
         <button type=\"submit\" class=\"submit\"{submit_disabled}>{submit_label}</button></form>"
    )
}

fn render_confirmation(record: &BookingRecord, config: &AppConfig) -> String {
    let draft = &record.draft;
    let rows = [
        (i18n::LABEL_NAME, draft.name.clone()),
        (i18n::LABEL_PHONE, draft.phone.clone()),
        (i18n::LABEL_CAR_MODEL, draft.car_model.clone()),
        (i18n::LABEL_LICENSE_PLATE, draft.license_plate.clone()),
        (i18n::PREFERRED_DATE, format_date(draft.preferred_date)),
        (i18n::LABEL_STATUS, record.status.label().to_string()),
    ]
    .iter()
    .map(|(label, value)| format!("<p><strong>{label}:</strong> {}</p>", escape(value)))
    .collect::<String>();

    let tel: String = config
        .shop_contact_phone
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();
    let line_id = config.shop_line_id.trim_start_matches('@');

    format!(
        "<div class=\"modal\" role=\"dialog\"><div class=\"card confirmation\">\
         <h2>{title}</h2><div class=\"maintenance-details\">{rows}</div>\
         <p class=\"screenshot-notice\">📸 {screenshot}</p>\
         <div class=\"contact-info\"><p>{contact}</p>\
         <p>โทร: <a href=\"tel:{tel}\">{phone}</a></p>\
         <p>LINE: <a href=\"https://line.me/ti/p/@{line_href}\" target=\"_blank\" rel=\"noopener noreferrer\">{line}</a></p></div>\
         <form method=\"post\" action=\"/confirmation/close\"><button type=\"submit\" class=\"submit\">{back}</button></form>\
         </div></div>",
        title = i18n::CONFIRMATION_TITLE,
        screenshot = i18n::SCREENSHOT_NOTICE,
        contact = i18n::CONTACT_HEADING,
        phone = escape(&config.shop_contact_phone),
        line_href = escape(line_id),
        line = escape(&config.shop_line_id),
        back = i18n::BACK_HOME,
    )
}

pub fn render_booking_page(c: &BookingController, notices: &[Notice], config: &AppConfig) -> String {
    if c.is_loading() {
        return render_loading();
    }

    let confirmation = c
        .confirmation()
        .map(|r| render_confirmation(r, config))
        .unwrap_or_default();

    let body = format!(
        "<main class=\"card\"><h1>{title}</h1>{notices}\
         <section class=\"dates\">{strip}<div class=\"picker-box\">{picker}</div></section>\
         {form}</main>{confirmation}",
        title = i18n::PAGE_TITLE,
        notices = render_notices(notices),
        strip = render_date_strip(c),
        picker = render_picker(c),
        form = render_form(c),
    );
    layout(i18n::PAGE_TITLE, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::availability::parse_date;
    use crate::models::{BookedDateSet, BookingForm};

    fn config() -> AppConfig {
        AppConfig {
            port: 3000,
            api_base_url: "http://backend".to_string(),
            shop_timezone: chrono_tz::Asia::Bangkok,
            max_lookahead_days: 364,
            session_ttl_minutes: 60,
            shop_contact_phone: "081-234-5678".to_string(),
            shop_line_id: "@shopname".to_string(),
            request_timeout_secs: 10,
        }
    }

    fn controller(booked: &[&str]) -> BookingController {
        let mut c = BookingController::new(parse_date("2025-05-20").unwrap(), 364);
        c.finish_load(Ok(BookedDateSet::from_strings(booked.iter())));
        c.settle();
        c
    }

    #[test]
    fn test_loading_placeholder_hides_grid() {
        let c = BookingController::new(parse_date("2025-05-20").unwrap(), 364);
        let html = render_booking_page(&c, &[], &config());
        assert!(html.contains(i18n::LOADING));
        assert!(!html.contains("date-button"));
    }

    #[test]
    fn test_full_day_disabled_and_marked() {
        let html = render_booking_page(&controller(&["2025-05-22"]), &[], &config());
        assert!(html.contains(
            "class=\"date-button full-date\" data-date=\"2025-05-22\" disabled"
        ));
        assert!(html.contains(i18n::FULL));
        assert!(html.contains("class=\"date-button selected-date\" data-date=\"2025-05-20\""));
    }

    #[test]
    fn test_prev_disabled_at_first_page() {
        let html = render_booking_page(&controller(&[]), &[], &config());
        assert!(html.contains("aria-label=\"prev\" disabled"));
    }

    #[test]
    fn test_submit_button_disabled_while_in_flight() {
        let html = render_booking_page(&controller(&[]), &[], &config());
        assert!(html.contains(&format!("class=\"submit\">{}", i18n::SUBMIT)));

        let mut c = controller(&[]);
        c.begin_submit(BookingForm {
            name: "Somchai".to_string(),
            phone: "0812345678".to_string(),
            car_model: "Civic".to_string(),
            license_plate: "ABC123".to_string(),
        })
        .unwrap();
        let html = render_booking_page(&c, &[], &config());
        assert!(html.contains(&format!("class=\"submit\" disabled>{}", i18n::SUBMITTING)));
    }

    #[test]
    fn test_thai_date_labels() {
        let date = parse_date("2025-05-20").unwrap();
        assert_eq!(thai_weekday(date.weekday()), "อ.");
        assert_eq!(thai_month(date), "พ.ค.");
    }
}
