use super::ServiceType;

#[derive(Debug, Clone, Copy)]
pub struct PortfolioItem {
    pub title: &'static str,
    pub category: &'static str,
}

pub const PORTFOLIO: [PortfolioItem; 6] = [
    PortfolioItem { title: "Mountain Wedding", category: "Wedding" },
    PortfolioItem { title: "Brand Launch Event", category: "Commercial" },
    PortfolioItem { title: "Music Festival", category: "Event" },
    PortfolioItem { title: "Luxury Real Estate", category: "Real Estate" },
    PortfolioItem { title: "Product Showcase", category: "Commercial" },
    PortfolioItem { title: "Social Campaign", category: "Social Media" },
];

/// Shortcuts offered by the quick-booking section.
pub const QUICK_BOOKING: [(ServiceType, &str); 3] = [
    (ServiceType::Event, "Events"),
    (ServiceType::SocialMedia, "Social Media"),
    (ServiceType::Commercial, "Commercial"),
];
