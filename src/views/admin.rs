use std::fmt::Write;

use super::{display_date, escape, layout, link};
use crate::config::SiteInfo;
use crate::models::{Booking, BookingStatus, ContactMessage};
use crate::ui::{AdminDashboard, Notice, Tab};

fn title(site: &SiteInfo) -> String {
    format!("{} Admin", site.name)
}

pub fn login(site: &SiteInfo, notice: Option<&Notice>, email: &str) -> String {
    let mut body = String::new();
    let _ = write!(
        body,
        "<main class=\"admin-login\">\n<h1>ADMIN LOGIN</h1>\n<p>Sign in to manage bookings and messages.</p>\n{}\
         <form method=\"post\" action=\"/admin/login\" data-testid=\"admin-login-form\">\n\
         <label for=\"email\">Email</label>\n\
         <input id=\"email\" type=\"email\" name=\"email\" value=\"{}\" data-testid=\"admin-email-input\" required>\n\
         <label for=\"password\">Password</label>\n\
         <input id=\"password\" type=\"password\" name=\"password\" data-testid=\"admin-password-input\" required>\n\
         <button type=\"submit\" data-testid=\"admin-login-btn\">Login</button>\n\
         </form>\n<p><a href=\"/\">Back to site</a></p>\n</main>",
        layout::notice(notice),
        escape(email),
    );
    layout::page(&title(site), &body)
}

/// Yes/no prompt shown before a delete is sent.
pub fn confirm(site: &SiteInfo, prompt: &str, action: &str) -> String {
    let body = format!(
        "<main class=\"admin-confirm\">\n<p data-testid=\"confirm-prompt\">{}</p>\n\
         <form method=\"post\" action=\"{action}\">\n\
         <button type=\"submit\" name=\"confirm\" value=\"yes\" data-testid=\"confirm-yes-btn\">OK</button>\n\
         <button type=\"submit\" name=\"confirm\" value=\"no\" data-testid=\"confirm-no-btn\">Cancel</button>\n\
         </form>\n</main>",
        escape(prompt),
        action = escape(action),
    );
    layout::page(&title(site), &body)
}

pub fn dashboard(site: &SiteInfo, dashboard: &AdminDashboard) -> String {
    let tab = dashboard.tab();
    let mut body = String::new();

    let _ = write!(
        body,
        "<header class=\"admin-header\">\n<h1>ADMIN DASHBOARD</h1>\n\
         <a href=\"/admin?tab={}\" data-testid=\"refresh-btn\">Refresh</a>\n\
         <form method=\"post\" action=\"/admin/logout\"><button type=\"submit\" data-testid=\"logout-btn\">Logout</button></form>\n\
         </header>\n{}",
        tab.as_str(),
        layout::notice(dashboard.notice()),
    );

    let _ = writeln!(
        body,
        "<nav class=\"tabs\">\n\
         <a href=\"/admin?tab=bookings\" class=\"{}\" data-testid=\"bookings-tab\">Bookings ({})</a>\n\
         <a href=\"/admin?tab=messages\" class=\"{}\" data-testid=\"messages-tab\">Messages ({})</a>\n\
         </nav>",
        active(tab == Tab::Bookings),
        dashboard.bookings().len(),
        active(tab == Tab::Messages),
        dashboard.messages().len(),
    );

    match tab {
        Tab::Bookings => bookings_table(&mut body, dashboard.bookings()),
        Tab::Messages => message_list(&mut body, dashboard.messages()),
    }

    if let Some(booking) = dashboard.selected_booking() {
        booking_detail(&mut body, booking);
    }

    layout::page(&title(site), &body)
}

fn active(flag: bool) -> &'static str {
    if flag {
        "tab active"
    } else {
        "tab"
    }
}

fn bookings_table(body: &mut String, bookings: &[Booking]) {
    if bookings.is_empty() {
        body.push_str("<p class=\"empty\" data-testid=\"no-bookings\">No bookings yet</p>\n");
        return;
    }

    body.push_str(
        "<table data-testid=\"bookings-table\">\n\
         <thead><tr><th>Client</th><th>Service</th><th>Date &amp; Time</th><th>Status</th><th>Actions</th></tr></thead>\n<tbody>\n",
    );
    for booking in bookings {
        let id = escape(&booking.id);
        let _ = write!(
            body,
            "<tr data-testid=\"booking-row-{id}\">\n\
             <td>{}<br><small>{}</small></td>\n\
             <td>{}</td>\n\
             <td>{}<br><small>{}</small></td>\n<td>",
            escape(&booking.client_name),
            escape(&booking.client_email),
            booking.service_type.label(),
            escape(&display_date(&booking.booking_date)),
            escape(&booking.booking_time),
        );
        status_form(body, &booking.id, booking.status);
        let _ = writeln!(
            body,
            "</td>\n<td>\
             <a href=\"{}\" data-testid=\"view-booking-{id}\">View</a> \
             <a href=\"{}\" data-testid=\"delete-booking-{id}\">Delete</a>\
             </td>\n</tr>",
            escape(&link(&["admin"], &[("tab", "bookings"), ("booking", &booking.id)])),
            escape(&link(&["admin", "bookings", &booking.id, "delete"], &[])),
        );
    }
    body.push_str("</tbody>\n</table>\n");
}

fn status_form(body: &mut String, id: &str, current: BookingStatus) {
    let _ = write!(
        body,
        "<form method=\"post\" action=\"{}\">\
         <select name=\"status\" data-testid=\"status-select-{}\">",
        escape(&link(&["admin", "bookings", id, "status"], &[])),
        escape(id),
    );
    for status in BookingStatus::ALL {
        let _ = write!(
            body,
            "<option value=\"{}\"{}>{}</option>",
            status.as_str(),
            if status == current { " selected" } else { "" },
            status.label(),
        );
    }
    body.push_str("</select> <button type=\"submit\">Update</button></form>");
}

fn message_list(body: &mut String, messages: &[ContactMessage]) {
    if messages.is_empty() {
        body.push_str("<p class=\"empty\" data-testid=\"no-messages\">No messages yet</p>\n");
        return;
    }

    body.push_str("<ul class=\"messages\" data-testid=\"messages-list\">\n");
    for message in messages {
        let id = escape(&message.id);
        let _ = writeln!(
            body,
            "<li data-testid=\"message-{id}\">\n\
             <h3>{}</h3>\n<p><a href=\"mailto:{email}\">{email}</a> <small>{}</small></p>\n\
             <p>{}</p>\n\
             <a href=\"{delete}\" data-testid=\"delete-message-{id}\">Delete</a>\n</li>",
            escape(&message.name),
            message
                .created_at
                .as_deref()
                .map(display_date)
                .map(|d| escape(&d))
                .unwrap_or_default(),
            escape(&message.message),
            email = escape(&message.email),
            delete = escape(&link(&["admin", "messages", &message.id, "delete"], &[])),
        );
    }
    body.push_str("</ul>\n");
}

fn booking_detail(body: &mut String, booking: &Booking) {
    let _ = write!(
        body,
        "<aside class=\"booking-detail\" data-testid=\"booking-detail\">\n\
         <h2>BOOKING DETAILS</h2>\n<dl>\n\
         <dt>Client</dt><dd>{}</dd>\n\
         <dt>Email</dt><dd>{}</dd>\n\
         <dt>Phone</dt><dd>{}</dd>\n\
         <dt>Service</dt><dd>{}</dd>\n\
         <dt>Date</dt><dd>{}</dd>\n\
         <dt>Time</dt><dd>{}</dd>\n\
         <dt>Status</dt><dd>{}</dd>\n",
        escape(&booking.client_name),
        escape(&booking.client_email),
        escape(&booking.client_phone),
        booking.service_type.label(),
        escape(&display_date(&booking.booking_date)),
        escape(&booking.booking_time),
        booking.status.label(),
    );
    if let Some(message) = booking.message.as_deref().filter(|m| !m.is_empty()) {
        let _ = writeln!(body, "<dt>Message</dt><dd>{}</dd>", escape(message));
    }
    if let Some(created) = booking.created_at.as_deref() {
        let _ = writeln!(body, "<dt>Booked</dt><dd>{}</dd>", escape(&display_date(created)));
    }
    body.push_str(
        "</dl>\n<a href=\"/admin?tab=bookings\" data-testid=\"close-detail-btn\">Close</a>\n</aside>\n",
    );
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::services::fake::{self, FakeBackend};
    use crate::session::{BearerToken, Session};

    fn site() -> SiteInfo {
        SiteInfo {
            name: "Studio Media".to_string(),
            phone: String::new(),
            email: String::new(),
            location: String::new(),
        }
    }

    async fn loaded(backend: &Arc<FakeBackend>) -> AdminDashboard {
        let mut dashboard = AdminDashboard::new(
            backend.services(),
            Session::Valid(BearerToken::new(fake::TOKEN)),
        );
        dashboard.open().await.unwrap();
        dashboard
    }

    #[test]
    fn test_login_page_has_no_tables() {
        let html = login(&site(), Some(&Notice::error("Invalid credentials")), "a@b.co");
        assert!(html.contains("action=\"/admin/login\""));
        assert!(html.contains("value=\"a@b.co\""));
        assert!(html.contains("Invalid credentials"));
        assert!(!html.contains("bookings-table"));
    }

    #[tokio::test]
    async fn test_bookings_tab_lists_rows_with_status() {
        let backend = FakeBackend::seeded();
        let html = dashboard(&site(), &loaded(&backend).await);

        assert!(html.contains("Bookings (2)"));
        assert!(html.contains("Messages (1)"));
        assert!(html.contains("data-testid=\"booking-row-b1\""));
        assert!(html.contains("Jun 1, 2025"));
        assert!(html.contains("<option value=\"pending\" selected>Pending</option>"));
        assert!(!html.contains("messages-list"));
    }

    #[tokio::test]
    async fn test_empty_tabs() {
        let backend = Arc::new(FakeBackend::default());
        let mut view = loaded(&backend).await;
        assert!(dashboard(&site(), &view).contains("No bookings yet"));

        view.set_tab(Tab::Messages);
        assert!(dashboard(&site(), &view).contains("No messages yet"));
    }

    #[tokio::test]
    async fn test_selected_booking_shows_detail() {
        let backend = FakeBackend::seeded();
        let mut view = loaded(&backend).await;
        view.view_booking("b2").unwrap();

        let html = dashboard(&site(), &view);
        assert!(html.contains("booking-detail"));
        assert!(html.contains("<dd>Sam Lee</dd>"));
        assert!(html.contains("<dd>5551234567</dd>"));
    }

    #[tokio::test]
    async fn test_ids_are_percent_encoded_in_links() {
        let backend = Arc::new(FakeBackend::default());
        backend
            .bookings
            .lock()
            .unwrap()
            .push(fake::booking("a/b?c#d", "Jane Doe"));
        backend
            .messages
            .lock()
            .unwrap()
            .push(fake::message("m/1", "Ana"));
        let mut view = loaded(&backend).await;

        let html = dashboard(&site(), &view);
        assert!(html.contains("href=\"/admin?tab=bookings&amp;booking=a%2Fb%3Fc%23d\""));
        assert!(html.contains("href=\"/admin/bookings/a%2Fb%3Fc%23d/delete\""));
        assert!(html.contains("action=\"/admin/bookings/a%2Fb%3Fc%23d/status\""));
        assert!(html.contains("data-testid=\"booking-row-a/b?c#d\""));

        view.set_tab(Tab::Messages);
        let html = dashboard(&site(), &view);
        assert!(html.contains("href=\"/admin/messages/m%2F1/delete\""));
    }

    #[test]
    fn test_confirm_offers_both_answers() {
        let html = confirm(&site(), "Delete?", "/admin/bookings/b1/delete");
        assert!(html.contains("action=\"/admin/bookings/b1/delete\""));
        assert!(html.contains("value=\"yes\""));
        assert!(html.contains("value=\"no\""));
    }
}
