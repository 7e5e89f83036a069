#[cfg(test)]
pub mod fake;
pub mod http;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::errors::ApiError;
use crate::models::{Booking, BookingStatus, ContactMessage, NewBooking, NewContactMessage};
use crate::session::{BearerToken, Session};

#[async_trait]
pub trait AuthService: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<BearerToken, ApiError>;
    async fn verify(&self, session: &Session) -> Result<(), ApiError>;
}

#[async_trait]
pub trait BookingsService: Send + Sync {
    async fn available_times(&self, date: NaiveDate) -> Result<Vec<String>, ApiError>;
    async fn create(&self, booking: &NewBooking) -> Result<(), ApiError>;
    async fn list(&self, session: &Session) -> Result<Vec<Booking>, ApiError>;
    async fn update_status(
        &self,
        session: &Session,
        id: &str,
        status: BookingStatus,
    ) -> Result<(), ApiError>;
    async fn delete(&self, session: &Session, id: &str) -> Result<(), ApiError>;
}

#[async_trait]
pub trait ContactService: Send + Sync {
    async fn create(&self, message: &NewContactMessage) -> Result<(), ApiError>;
    async fn list(&self, session: &Session) -> Result<Vec<ContactMessage>, ApiError>;
    async fn delete(&self, session: &Session, id: &str) -> Result<(), ApiError>;
}

/// Backend collaborators handed to the controllers.
#[derive(Clone)]
pub struct Services {
    pub auth: Arc<dyn AuthService>,
    pub bookings: Arc<dyn BookingsService>,
    pub contact: Arc<dyn ContactService>,
}

impl Services {
    pub fn from_http(api: http::HttpApi) -> Self {
        let api = Arc::new(api);
        Self {
            auth: api.clone(),
            bookings: api.clone(),
            contact: api,
        }
    }
}
