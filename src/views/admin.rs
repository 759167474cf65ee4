use super::{escape, layout};
use crate::i18n;

pub fn render_login(error: Option<&str>, username: &str) -> String {
    let error = error
        .map(|e| format!("<div class=\"notice notice-error\" role=\"alert\">{}</div>", escape(e)))
        .unwrap_or_default();

    let body = format!(
        "<main class=\"card\"><h1>{title}</h1>{error}\
         <form method=\"post\" action=\"/admin/login\">\
         <label for=\"username\">{user_label}</label>\
         <input id=\"username\" name=\"username\" value=\"{username}\" autocomplete=\"username\">\
         <label for=\"password\">{pass_label}</label>\
         <input id=\"password\" name=\"password\" type=\"password\" autocomplete=\"current-password\">\
         <button type=\"submit\" class=\"submit\">{login}</button></form></main>",
        title = i18n::ADMIN_LOGIN_TITLE,
        user_label = i18n::ADMIN_USERNAME,
        username = escape(username),
        pass_label = i18n::ADMIN_PASSWORD,
        login = i18n::ADMIN_LOGIN,
    );
    layout(i18n::ADMIN_LOGIN_TITLE, &body)
}

pub fn render_dashboard() -> String {
    let body = format!(
        "<main class=\"card\"><h1>{title}</h1><p>{signed_in}</p>\
         <form method=\"post\" action=\"/admin/logout\">\
         <button type=\"submit\" class=\"submit\">{logout}</button></form></main>",
        title = i18n::ADMIN_DASHBOARD_TITLE,
        signed_in = i18n::ADMIN_SIGNED_IN,
        logout = i18n::ADMIN_LOGOUT,
    );
    layout(i18n::ADMIN_DASHBOARD_TITLE, &body)
}
