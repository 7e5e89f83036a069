use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub backend_url: String,
    pub request_timeout_secs: u64,
    pub wizard_ttl_minutes: i64,
    pub wizard_capacity: usize,
    pub secure_cookies: bool,
    pub site: SiteInfo,
}

/// Business details shown on the public pages.
#[derive(Clone, Debug)]
pub struct SiteInfo {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub location: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            backend_url: env::var("BACKEND_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| "http://localhost:8001".to_string()),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(15),
            wizard_ttl_minutes: env::var("WIZARD_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            wizard_capacity: env::var("WIZARD_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),
            secure_cookies: env::var("SECURE_COOKIES")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            site: SiteInfo {
                name: env::var("SITE_NAME").unwrap_or_else(|_| "Studio Media".to_string()),
                phone: env::var("CONTACT_PHONE").unwrap_or_default(),
                email: env::var("CONTACT_EMAIL").unwrap_or_default(),
                location: env::var("CONTACT_LOCATION").unwrap_or_default(),
            },
        }
    }
}
