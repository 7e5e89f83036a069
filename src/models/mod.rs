pub mod auth;
pub mod booking;
pub mod catalog;
pub mod contact;
pub mod slots;

pub use auth::{LoginRequest, TokenResponse};
pub use booking::{Booking, BookingStatus, NewBooking, ServiceType, StatusUpdate};
pub use catalog::{PortfolioItem, PORTFOLIO, QUICK_BOOKING};
pub use contact::{ContactMessage, NewContactMessage};
pub use slots::{default_time_slots, AvailableTimes, DEFAULT_TIME_SLOTS};
