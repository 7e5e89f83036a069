pub mod admin;
pub mod landing;
pub mod layout;
pub mod wizard;

use chrono::NaiveDate;
use reqwest::Url;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Site-relative link with every path segment and query pair
/// percent-encoded. Still needs `escape` inside an HTML attribute.
pub fn link(segments: &[&str], query: &[(&str, &str)]) -> String {
    let Ok(mut url) = Url::parse("http://site.invalid/") else {
        return "/".to_string();
    };
    if let Ok(mut path) = url.path_segments_mut() {
        path.clear().extend(segments);
    }
    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query);
    }
    match url.query() {
        Some(query) => format!("{}?{query}", url.path()),
        None => url.path().to_string(),
    }
}

/// Render a backend date or timestamp as "Jun 1, 2025". Values that don't
/// start with a `YYYY-MM-DD` date are shown as-is.
pub fn display_date(raw: &str) -> String {
    raw.get(..10)
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        .map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_link_encodes_segments_and_query() {
        assert_eq!(link(&["admin", "bookings", "b1", "delete"], &[]), "/admin/bookings/b1/delete");
        assert_eq!(
            link(&["admin", "messages", "a/b?c#d", "delete"], &[]),
            "/admin/messages/a%2Fb%3Fc%23d/delete"
        );
        assert_eq!(
            link(&["admin"], &[("tab", "bookings"), ("booking", "x&y=z")]),
            "/admin?tab=bookings&booking=x%26y%3Dz"
        );
    }

    #[test]
    fn test_display_date() {
        assert_eq!(display_date("2025-06-01"), "Jun 1, 2025");
        assert_eq!(display_date("2025-12-24T18:30:00+00:00"), "Dec 24, 2025");
        assert_eq!(display_date("next tuesday"), "next tuesday");
        assert_eq!(display_date(""), "");
    }
}
