use std::fmt::Write;

use chrono::{Duration, NaiveDate};

use super::{escape, layout};
use crate::models::ServiceType;
use crate::ui::{BookingWizard, WizardStep};

fn disabled(flag: bool) -> &'static str {
    if flag {
        " disabled"
    } else {
        ""
    }
}

/// The booking modal, rendered on top of the landing page.
pub fn render(wizard: &BookingWizard, today: NaiveDate) -> String {
    let step = wizard.step();
    let mut html = String::new();

    let _ = write!(
        html,
        "<section id=\"booking\" class=\"modal\" data-testid=\"booking-modal\">\n\
         <form method=\"post\" action=\"/book/close\"><button type=\"submit\" aria-label=\"Close modal\" data-testid=\"modal-close-btn\">&times;</button></form>\n\
         <p class=\"caption\">{}</p>\n<h2>{}</h2>\n",
        step.caption(),
        escape(step.heading()),
    );
    html.push_str(&layout::notice(wizard.notice()));

    match step {
        WizardStep::Service => service_step(&mut html, wizard),
        WizardStep::Schedule => schedule_step(&mut html, wizard, today),
        WizardStep::Details => details_step(&mut html, wizard),
        WizardStep::Complete => complete_step(&mut html, wizard),
    }

    if step != WizardStep::Complete {
        html.push_str("<nav class=\"wizard-nav\">\n");
        if step != WizardStep::Service {
            html.push_str(
                "<form method=\"post\" action=\"/book/back\"><button type=\"submit\" data-testid=\"modal-back-btn\">Back</button></form>\n",
            );
        }
        if step != WizardStep::Details {
            let _ = writeln!(
                html,
                "<form method=\"post\" action=\"/book/next\"><button type=\"submit\" data-testid=\"modal-next-btn\"{}>Next</button></form>",
                disabled(!wizard.can_proceed())
            );
        }
        html.push_str("</nav>\n");
    }

    html.push_str("</section>\n");
    html
}

fn service_step(html: &mut String, wizard: &BookingWizard) {
    let selected = wizard.form().service_type;
    html.push_str(
        "<form method=\"post\" action=\"/book/service\">\n\
         <label for=\"service_type\">What can we help you with?</label>\n\
         <select id=\"service_type\" name=\"service_type\" data-testid=\"service-select\" required>\n\
         <option value=\"\">Select a service</option>\n",
    );
    for service in ServiceType::ALL {
        let _ = writeln!(
            html,
            "<option value=\"{}\"{}>{}</option>",
            service.as_str(),
            if selected == Some(service) { " selected" } else { "" },
            service.label()
        );
    }
    html.push_str("</select>\n<button type=\"submit\">Choose</button>\n</form>\n");
}

fn schedule_step(html: &mut String, wizard: &BookingWizard, today: NaiveDate) {
    let form = wizard.form();
    let min = (today + Duration::days(1)).format("%Y-%m-%d");
    let value = form
        .booking_date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();

    let _ = write!(
        html,
        "<form method=\"post\" action=\"/book/date\">\n\
         <label for=\"date\">Select a Date</label>\n\
         <input id=\"date\" type=\"date\" name=\"date\" min=\"{min}\" value=\"{value}\" data-testid=\"booking-calendar\" required>\n\
         <button type=\"submit\">Show times</button>\n\
         </form>\n"
    );

    let Some(date) = form.booking_date else {
        return;
    };

    let _ = writeln!(
        html,
        "<p class=\"label\">Available Times for {}</p>",
        date.format("%B %-d, %Y")
    );
    let _ = writeln!(
        html,
        "<div class=\"slots\" data-testid=\"time-slots\"{}>",
        if wizard.using_fallback_slots() { " data-fallback" } else { "" }
    );
    for slot in wizard.available_times() {
        let chosen = form.booking_time.as_deref() == Some(slot.as_str());
        let testid = escape(&slot.replace([':', ' '], "-"));
        let _ = writeln!(
            html,
            "<form method=\"post\" action=\"/book/time\"><input type=\"hidden\" name=\"time\" value=\"{slot}\"><button type=\"submit\" class=\"slot{}\" data-testid=\"time-slot-{testid}\">{slot}</button></form>",
            if chosen { " selected" } else { "" },
            slot = escape(slot),
        );
    }
    html.push_str("</div>\n");
}

fn details_step(html: &mut String, wizard: &BookingWizard) {
    let form = wizard.form();
    let _ = write!(
        html,
        "<form method=\"post\" action=\"/book/submit\">\n\
         <label for=\"client_name\">Your Name</label>\n\
         <input id=\"client_name\" type=\"text\" name=\"client_name\" value=\"{}\" placeholder=\"John Doe\" data-testid=\"booking-name-input\" required>\n\
         <label for=\"client_email\">Email Address</label>\n\
         <input id=\"client_email\" type=\"email\" name=\"client_email\" value=\"{}\" placeholder=\"john@example.com\" data-testid=\"booking-email-input\" required>\n\
         <label for=\"client_phone\">Phone Number</label>\n\
         <input id=\"client_phone\" type=\"tel\" name=\"client_phone\" value=\"{}\" placeholder=\"(555) 123-4567\" data-testid=\"booking-phone-input\" required>\n\
         <label for=\"booking_message\">Additional Notes (Optional)</label>\n\
         <textarea id=\"booking_message\" name=\"message\" placeholder=\"Tell us more about your project...\" data-testid=\"booking-message-input\">{}</textarea>\n",
        escape(&form.client_name),
        escape(&form.client_email),
        escape(&form.client_phone),
        escape(&form.message),
    );

    let _ = write!(
        html,
        "<dl class=\"summary\">\n\
         <dt>Service:</dt><dd>{}</dd>\n\
         <dt>Date:</dt><dd>{}</dd>\n\
         <dt>Time:</dt><dd>{}</dd>\n\
         </dl>\n",
        wizard.service_label().unwrap_or_default(),
        form.booking_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        escape(form.booking_time.as_deref().unwrap_or_default()),
    );

    let _ = writeln!(
        html,
        "<button type=\"submit\" data-testid=\"modal-submit-btn\"{}>{}</button>\n</form>",
        disabled(wizard.is_submitting()),
        if wizard.is_submitting() {
            "Submitting..."
        } else {
            "Confirm Booking"
        }
    );
}

fn complete_step(html: &mut String, wizard: &BookingWizard) {
    let form = wizard.form();
    let _ = write!(
        html,
        "<div class=\"complete\">\n\
         <h3>{}</h3>\n\
         <p>Your booking for <strong>{}</strong> has been submitted.</p>\n\
         <p>Date: <strong>{}</strong> at <strong>{}</strong></p>\n\
         <p>We'll contact you within 24 hours to confirm your booking.</p>\n\
         <form method=\"post\" action=\"/book/close\"><button type=\"submit\" data-testid=\"modal-done-btn\">Done</button></form>\n\
         </div>\n",
        escape(&wizard.thank_you().unwrap_or_default()),
        wizard.service_label().unwrap_or_default(),
        form.booking_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        escape(form.booking_time.as_deref().unwrap_or_default()),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fake::FakeBackend;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_next_disabled_without_service() {
        let html = render(&BookingWizard::new(None), day("2025-05-20"));
        assert!(html.contains("STEP 1 OF 3"));
        assert!(html.contains("data-testid=\"modal-next-btn\" disabled"));
        assert!(!html.contains("modal-back-btn"));
    }

    #[test]
    fn test_preselected_service_is_selected() {
        let html = render(
            &BookingWizard::new(Some(ServiceType::RealEstate)),
            day("2025-05-20"),
        );
        assert!(html.contains("<option value=\"real_estate\" selected>Real Estate Tours</option>"));
        assert!(html.contains("data-testid=\"modal-next-btn\">Next"));
    }

    #[test]
    fn test_date_input_starts_tomorrow() {
        let mut wizard = BookingWizard::new(Some(ServiceType::Event));
        wizard.next().unwrap();
        let html = render(&wizard, day("2025-05-20"));
        assert!(html.contains("min=\"2025-05-21\""));
        assert!(!html.contains("Available Times"));
    }

    #[tokio::test]
    async fn test_hostile_slot_is_escaped() {
        let backend = FakeBackend::default();
        *backend.slots.lock().unwrap() = Some(vec!["10\"><script>x()</script>".to_string()]);
        let mut wizard = BookingWizard::new(Some(ServiceType::Event));
        wizard.next().unwrap();
        wizard
            .select_date(day("2025-05-21"), day("2025-05-20"), &backend)
            .await
            .unwrap();

        let html = render(&wizard, day("2025-05-20"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("data-testid=\"time-slot-10&quot;&gt;&lt;script&gt;x()&lt;/script&gt;\""));
    }
}
