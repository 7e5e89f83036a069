use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    Wedding,
    Event,
    Commercial,
    SocialMedia,
    RealEstate,
}

impl ServiceType {
    pub const ALL: [ServiceType; 5] = [
        ServiceType::Wedding,
        ServiceType::Event,
        ServiceType::Commercial,
        ServiceType::SocialMedia,
        ServiceType::RealEstate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Wedding => "wedding",
            ServiceType::Event => "event",
            ServiceType::Commercial => "commercial",
            ServiceType::SocialMedia => "social_media",
            ServiceType::RealEstate => "real_estate",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|service| service.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceType::Wedding => "Wedding Films",
            ServiceType::Event => "Event Coverage",
            ServiceType::Commercial => "Commercial Videos",
            ServiceType::SocialMedia => "Social Media Content",
            ServiceType::RealEstate => "Real Estate Tours",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ServiceType::Wedding => {
                "Cinematic storytelling of your most precious moments, crafted with emotion and artistry."
            }
            ServiceType::Event => {
                "Professional documentation of concerts, corporate events, and special occasions."
            }
            ServiceType::Commercial => {
                "High-impact brand content that tells your story and drives engagement."
            }
            ServiceType::SocialMedia => {
                "Scroll-stopping content optimized for Instagram, TikTok, and YouTube."
            }
            ServiceType::RealEstate => "Stunning property showcases that help close deals faster.",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 4] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::Completed,
        BookingStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Completed => "Completed",
            BookingStatus::Cancelled => "Cancelled",
        }
    }
}

/// A booking as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: String,
    pub service_type: ServiceType,
    pub booking_date: String,
    pub booking_time: String,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    #[serde(default)]
    pub message: Option<String>,
    pub status: BookingStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of `POST /api/bookings`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewBooking {
    pub service_type: ServiceType,
    pub booking_date: String,
    pub booking_time: String,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: BookingStatus,
}
