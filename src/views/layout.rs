use axum::http::StatusCode;

use super::escape;
use crate::ui::Notice;

pub fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         </head>\n\
         <body>\n{body}\n</body>\n\
         </html>\n",
        title = escape(title),
    )
}

pub fn notice(notice: Option<&Notice>) -> String {
    match notice {
        Some(n) => format!(
            "<div class=\"notice notice-{}\" role=\"status\" data-testid=\"notice\">{}</div>\n",
            n.level.as_str(),
            escape(&n.text)
        ),
        None => String::new(),
    }
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let body = format!(
        "<main class=\"error\">\n<h1>{}</h1>\n<p>{}</p>\n<p><a href=\"/\">Back to home</a></p>\n</main>",
        status.as_u16(),
        escape(message)
    );
    page(status.canonical_reason().unwrap_or("Error"), &body)
}
