//! In-memory backend used by controller unit tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;

use super::{AuthService, BookingsService, ContactService, Services};
use crate::errors::ApiError;
use crate::models::{
    Booking, BookingStatus, ContactMessage, NewBooking, NewContactMessage, ServiceType,
};
use crate::session::{BearerToken, Session};

pub const TOKEN: &str = "valid-token";
pub const EMAIL: &str = "admin@example.com";
pub const PASSWORD: &str = "secret";

#[derive(Default)]
pub struct FakeBackend {
    pub bookings: Mutex<Vec<Booking>>,
    pub messages: Mutex<Vec<ContactMessage>>,
    pub created_bookings: Mutex<Vec<NewBooking>>,
    pub created_messages: Mutex<Vec<NewContactMessage>>,
    pub calls: Mutex<Vec<String>>,
    /// `None` makes the slot lookup fail.
    pub slots: Mutex<Option<Vec<String>>>,
    pub fail_writes: AtomicBool,
    pub reject_detail: Mutex<Option<String>>,
    pub revoked: AtomicBool,
}

impl FakeBackend {
    pub fn seeded() -> Arc<Self> {
        let backend = Self::default();
        *backend.bookings.lock().unwrap() =
            vec![booking("b1", "Jane Doe"), booking("b2", "Sam Lee")];
        *backend.messages.lock().unwrap() = vec![message("m1", "Ana")];
        Arc::new(backend)
    }

    pub fn services(self: &Arc<Self>) -> Services {
        Services {
            auth: self.clone(),
            bookings: self.clone(),
            contact: self.clone(),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    fn check(&self, session: &Session) -> Result<(), ApiError> {
        match session.token() {
            Some(token) if token.as_str() == TOKEN && !self.revoked.load(Ordering::SeqCst) => {
                Ok(())
            }
            _ => Err(ApiError::Unauthorized),
        }
    }

    fn check_write(&self) -> Result<(), ApiError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(ApiError::Rejected {
                status: 500,
                detail: self.reject_detail.lock().unwrap().clone(),
            });
        }
        Ok(())
    }
}

pub fn booking(id: &str, name: &str) -> Booking {
    Booking {
        id: id.to_string(),
        service_type: ServiceType::Wedding,
        booking_date: "2025-06-01".to_string(),
        booking_time: "10:00 AM".to_string(),
        client_name: name.to_string(),
        client_email: "client@example.com".to_string(),
        client_phone: "5551234567".to_string(),
        message: None,
        status: BookingStatus::Pending,
        created_at: Some("2025-05-01T12:00:00Z".to_string()),
    }
}

pub fn message(id: &str, name: &str) -> ContactMessage {
    ContactMessage {
        id: id.to_string(),
        name: name.to_string(),
        email: "ana@example.com".to_string(),
        message: "Do you travel?".to_string(),
        created_at: Some("2025-05-02T08:30:00Z".to_string()),
    }
}

#[async_trait]
impl AuthService for FakeBackend {
    async fn login(&self, email: &str, password: &str) -> Result<BearerToken, ApiError> {
        self.record("login");
        if email == EMAIL && password == PASSWORD {
            Ok(BearerToken::new(TOKEN))
        } else {
            Err(ApiError::Rejected {
                status: 401,
                detail: Some("Invalid credentials".to_string()),
            })
        }
    }

    async fn verify(&self, session: &Session) -> Result<(), ApiError> {
        self.record("verify");
        self.check(session)
    }
}

#[async_trait]
impl BookingsService for FakeBackend {
    async fn available_times(&self, date: NaiveDate) -> Result<Vec<String>, ApiError> {
        self.record(format!("available_times {date}"));
        self.slots
            .lock()
            .unwrap()
            .clone()
            .ok_or(ApiError::Rejected {
                status: 503,
                detail: None,
            })
    }

    async fn create(&self, booking: &NewBooking) -> Result<(), ApiError> {
        self.record("create_booking");
        self.check_write()?;
        self.created_bookings.lock().unwrap().push(booking.clone());
        Ok(())
    }

    async fn list(&self, session: &Session) -> Result<Vec<Booking>, ApiError> {
        self.record("list_bookings");
        self.check(session)?;
        Ok(self.bookings.lock().unwrap().clone())
    }

    async fn update_status(
        &self,
        session: &Session,
        id: &str,
        status: BookingStatus,
    ) -> Result<(), ApiError> {
        self.record(format!("update_status {id} {}", status.as_str()));
        self.check(session)?;
        self.check_write()?;
        let mut bookings = self.bookings.lock().unwrap();
        let booking = bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(ApiError::Rejected {
                status: 404,
                detail: Some("Booking not found".to_string()),
            })?;
        booking.status = status;
        Ok(())
    }

    async fn delete(&self, session: &Session, id: &str) -> Result<(), ApiError> {
        self.record(format!("delete_booking {id}"));
        self.check(session)?;
        self.check_write()?;
        self.bookings.lock().unwrap().retain(|b| b.id != id);
        Ok(())
    }
}

#[async_trait]
impl ContactService for FakeBackend {
    async fn create(&self, message: &NewContactMessage) -> Result<(), ApiError> {
        self.record("create_message");
        self.check_write()?;
        self.created_messages.lock().unwrap().push(message.clone());
        Ok(())
    }

    async fn list(&self, session: &Session) -> Result<Vec<ContactMessage>, ApiError> {
        self.record("list_messages");
        self.check(session)?;
        Ok(self.messages.lock().unwrap().clone())
    }

    async fn delete(&self, session: &Session, id: &str) -> Result<(), ApiError> {
        self.record(format!("delete_message {id}"));
        self.check(session)?;
        self.check_write()?;
        self.messages.lock().unwrap().retain(|m| m.id != id);
        Ok(())
    }
}
