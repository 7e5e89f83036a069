use std::fmt::Write;

use chrono::{Datelike, NaiveDate};

use super::{escape, layout, wizard};
use crate::config::SiteInfo;
use crate::models::{ServiceType, PORTFOLIO, QUICK_BOOKING};
use crate::ui::{BookingWizard, ContactForm, LandingPage};

pub fn book_link(service: Option<ServiceType>) -> String {
    match service {
        Some(s) => format!("/book?start=true&service={}#booking", s.as_str()),
        None => "/book?start=true#booking".to_string(),
    }
}

pub fn render(
    site: &SiteInfo,
    page: &LandingPage,
    wizard: Option<&BookingWizard>,
    contact: &ContactForm,
    today: NaiveDate,
) -> String {
    let mut body = String::new();
    let name = escape(&site.name);

    let _ = write!(
        body,
        "<header class=\"nav\">\n\
         <a href=\"/\" class=\"logo\">{name}</a>\n\
         <nav><a href=\"#services\">Services</a> <a href=\"#portfolio\">Portfolio</a> <a href=\"#contact\">Contact</a></nav>\n\
         <a href=\"{book}\" data-testid=\"nav-book-btn\">Book Session</a>\n\
         </header>\n\
         <section id=\"hero\" class=\"hero\">\n\
         <h1>VISION IN MOTION</h1>\n\
         <p>Cinematic videography for weddings, events, brands and properties.</p>\n\
         <a href=\"{book}\" data-testid=\"hero-book-btn\">Book Your Session</a>\n\
         </section>\n",
        book = book_link(None),
    );

    body.push_str("<section id=\"services\">\n<p class=\"eyebrow\">WHAT WE DO</p>\n<h2>SERVICES</h2>\n");
    for service in ServiceType::ALL {
        let _ = writeln!(
            body,
            "<article class=\"service\" data-testid=\"service-card-{id}\">\n<h3>{}</h3>\n<p>{}</p>\n<a href=\"{}\" data-testid=\"book-service-{id}\">Book Now</a>\n</article>",
            service.label(),
            service.description(),
            book_link(Some(service)),
            id = service.as_str(),
        );
    }
    body.push_str("</section>\n");

    body.push_str(
        "<section id=\"portfolio\">\n<p class=\"eyebrow\">OUR WORK</p>\n<h2>PORTFOLIO</h2>\n\
         <p>A selection of our recent projects. Follow us on social media for more behind-the-scenes content.</p>\n<ul>\n",
    );
    for item in PORTFOLIO {
        let _ = writeln!(
            body,
            "<li><span class=\"category\">{}</span> {}</li>",
            item.category, item.title
        );
    }
    body.push_str("</ul>\n</section>\n");

    body.push_str(
        "<section id=\"quick-booking\">\n<p class=\"eyebrow\">Quick Booking</p>\n<h2>BOOK YOUR SESSION</h2>\n\
         <p>Select your service type and book your session in just 60 seconds</p>\n<ul>\n",
    );
    for (service, label) in QUICK_BOOKING {
        let _ = writeln!(
            body,
            "<li><a href=\"{}\" data-testid=\"quick-book-{}\">{label}</a></li>",
            book_link(Some(service)),
            service.as_str(),
        );
    }
    let _ = writeln!(
        body,
        "</ul>\n<a href=\"{}\" data-testid=\"quick-book-open\">Check Availability</a>\n</section>",
        book_link(None)
    );

    contact_section(&mut body, site, contact);

    let _ = writeln!(
        body,
        "<footer>&copy; {} {name}. All rights reserved. <a href=\"/admin\">Admin</a></footer>",
        today.year()
    );

    if page.is_booking_open() {
        if let Some(wizard) = wizard {
            body.push_str(&wizard::render(wizard, today));
        }
    }

    layout::page(&site.name, &body)
}

fn contact_section(body: &mut String, site: &SiteInfo, form: &ContactForm) {
    body.push_str(
        "<section id=\"contact\">\n<p class=\"eyebrow\">GET IN TOUCH</p>\n<h2>LET'S TALK</h2>\n\
         <p>Have a project in mind? Questions about our services? We'd love to hear from you.</p>\n<ul class=\"details\">\n",
    );
    if !site.phone.is_empty() {
        let _ = writeln!(
            body,
            "<li>Phone: <a href=\"tel:{phone}\" data-testid=\"contact-phone\">{phone}</a></li>",
            phone = escape(&site.phone)
        );
    }
    if !site.email.is_empty() {
        let _ = writeln!(
            body,
            "<li>Email: <a href=\"mailto:{email}\" data-testid=\"contact-email\">{email}</a></li>",
            email = escape(&site.email)
        );
    }
    if !site.location.is_empty() {
        let _ = writeln!(body, "<li>Location: {}</li>", escape(&site.location));
    }
    body.push_str("</ul>\n");
    body.push_str(&layout::notice(form.notice()));

    let _ = write!(
        body,
        "<form method=\"post\" action=\"/contact#contact\" data-testid=\"contact-form\">\n\
         <label for=\"name\">Your Name</label>\n\
         <input id=\"name\" type=\"text\" name=\"name\" value=\"{}\" placeholder=\"John Doe\" data-testid=\"contact-name-input\" required>\n\
         <label for=\"email\">Email Address</label>\n\
         <input id=\"email\" type=\"email\" name=\"email\" value=\"{}\" placeholder=\"john@example.com\" data-testid=\"contact-email-input\" required>\n\
         <label for=\"message\">Message</label>\n\
         <textarea id=\"message\" name=\"message\" placeholder=\"Tell us about your project...\" data-testid=\"contact-message-input\" required>{}</textarea>\n\
         <button type=\"submit\" data-testid=\"contact-submit-btn\">Send Message</button>\n\
         </form>\n</section>\n",
        escape(&form.name),
        escape(&form.email),
        escape(&form.message),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteInfo {
        SiteInfo {
            name: "Studio <Media>".to_string(),
            phone: String::new(),
            email: "hello@studio.example".to_string(),
            location: String::new(),
        }
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 20).unwrap()
    }

    #[test]
    fn test_book_link() {
        assert_eq!(book_link(None), "/book?start=true#booking");
        assert_eq!(
            book_link(Some(ServiceType::SocialMedia)),
            "/book?start=true&service=social_media#booking"
        );
    }

    #[test]
    fn test_closed_modal_is_not_rendered() {
        let wizard = BookingWizard::new(None);
        let html = render(
            &site(),
            &LandingPage::default(),
            Some(&wizard),
            &ContactForm::default(),
            day(),
        );
        assert!(!html.contains("booking-modal"));
        assert!(html.contains("Studio &lt;Media&gt;"));
        assert!(html.contains("mailto:hello@studio.example"));
        assert!(!html.contains("contact-phone"));
        assert!(html.contains("&copy; 2025"));
    }

    #[test]
    fn test_open_modal_is_rendered() {
        let mut page = LandingPage::default();
        let wizard = page.open_booking(Some(ServiceType::Event));
        let html = render(&site(), &page, Some(&wizard), &ContactForm::default(), day());
        assert!(html.contains("data-testid=\"booking-modal\""));
        assert!(html.contains("<option value=\"event\" selected>"));
    }
}
