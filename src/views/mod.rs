pub mod admin;
pub mod booking;

use crate::models::{Notice, NoticeLevel};

const STYLE: &str = r#"
body { margin: 0; min-height: 100vh; background: #121212; color: #fff; font-family: sans-serif; display: flex; align-items: center; justify-content: center; }
.card { width: 100%; max-width: 28rem; background: #1f1f1f; border: 1px solid #896253; border-radius: 0.75rem; padding: 2rem; }
h1 { color: #CD9969; text-align: center; text-transform: uppercase; }
label { color: #9ca3af; font-weight: 600; text-transform: uppercase; display: block; margin: 0.75rem 0 0.25rem; }
input { width: 100%; box-sizing: border-box; padding: 0.5rem; border-radius: 0.5rem; border: 1px solid #896253; background: #2a2a2a; color: #CD9969; }
button { cursor: pointer; border-radius: 0.5rem; border: 1px solid #896253; background: #443833; color: #CD9969; padding: 0.5rem; }
button:disabled { cursor: not-allowed; opacity: 0.5; }
.strip { display: flex; align-items: center; gap: 0.25rem; background: #2a2a2a; border-radius: 0.75rem; padding: 0.75rem; }
.days { display: flex; gap: 0.25rem; flex: 1; overflow-x: auto; }
.day { display: flex; flex-direction: column; align-items: center; }
.day button { width: 3.5rem; height: 4.5rem; display: flex; flex-direction: column; align-items: center; justify-content: center; }
.selected-date { background: #CD9969; color: #000; }
.full-date { background: #333; color: #777; }
.full-label { color: #9ca3af; font-size: 0.75rem; }
.field-error { color: #f87171; font-size: 0.8rem; }
.notice { padding: 0.75rem; border-radius: 0.5rem; margin-bottom: 1rem; }
.notice-error { background: #7f1d1d; }
.notice-success { background: #14532d; }
.submit { width: 100%; height: 3.5rem; margin-top: 1.5rem; background: linear-gradient(to right, #CD9969, #896253); color: #000; font-weight: 700; }
.modal { position: fixed; inset: 0; background: rgba(0,0,0,0.7); display: flex; align-items: center; justify-content: center; }
.modal .card { text-align: center; }
"#;

pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

pub fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"th\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        escape(title)
    )
}

pub fn render_notices(notices: &[Notice]) -> String {
    notices
        .iter()
        .map(|n| {
            let class = match n.level {
                NoticeLevel::Success => "notice notice-success",
                NoticeLevel::Error => "notice notice-error",
            };
            let detail = n
                .detail
                .as_deref()
                .map(|d| format!("<div>{}</div>", escape(d)))
                .unwrap_or_default();
            format!(
                "<div class=\"{class}\" role=\"alert\"><strong>{}</strong>{detail}</div>",
                escape(&n.title)
            )
        })
        .collect()
}
