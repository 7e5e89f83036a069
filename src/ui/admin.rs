use serde::Deserialize;

use super::notice::Notice;
use crate::errors::ApiError;
use crate::models::{Booking, BookingStatus, ContactMessage};
use crate::services::Services;
use crate::session::Session;

pub const SESSION_EXPIRED: &str = "Session expired. Please log in again.";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const LOAD_FAILED: &str = "Failed to fetch data";
pub const CONFIRM_DELETE_BOOKING: &str = "Are you sure you want to delete this booking?";
pub const CONFIRM_DELETE_MESSAGE: &str = "Are you sure you want to delete this message?";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Bookings,
    Messages,
}

impl Tab {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Bookings => "bookings",
            Tab::Messages => "messages",
        }
    }
}

/// Answer to a destructive-action prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("Email and password are required.")]
    MissingCredentials,

    #[error("{0}")]
    LoginFailed(String),

    #[error("Session expired. Please log in again.")]
    SessionExpired,

    #[error("Please log in to continue.")]
    NotAuthenticated,

    #[error("booking {0} is not in the current list")]
    UnknownBooking(String),

    #[error("backend error: {0}")]
    Backend(#[source] ApiError),
}

/// Admin back office: login, booking and message triage.
pub struct AdminDashboard {
    services: Services,
    session: Session,
    bookings: Vec<Booking>,
    messages: Vec<ContactMessage>,
    loaded: bool,
    tab: Tab,
    selected: Option<String>,
    notice: Option<Notice>,
}

impl AdminDashboard {
    pub fn new(services: Services, session: Session) -> Self {
        Self {
            services,
            session,
            bookings: Vec::new(),
            messages: Vec::new(),
            loaded: false,
            tab: Tab::default(),
            selected: None,
            notice: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_valid()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn messages(&self) -> &[ContactMessage] {
        &self.messages
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn selected_booking(&self) -> Option<&Booking> {
        let id = self.selected.as_deref()?;
        self.bookings.iter().find(|b| b.id == id)
    }

    pub fn view_booking(&mut self, id: &str) -> Result<(), DashboardError> {
        if !self.bookings.iter().any(|b| b.id == id) {
            return Err(DashboardError::UnknownBooking(id.to_string()));
        }
        self.selected = Some(id.to_string());
        Ok(())
    }

    pub fn close_booking(&mut self) {
        self.selected = None;
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), DashboardError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            self.notice = Some(Notice::error(
                DashboardError::MissingCredentials.to_string(),
            ));
            return Err(DashboardError::MissingCredentials);
        }

        match self.services.auth.login(email, password).await {
            Ok(token) => {
                tracing::info!(email, "admin logged in");
                self.session = Session::Valid(token);
                self.notice = Some(Notice::success("Login successful!"));
                Ok(())
            }
            Err(e) => {
                tracing::warn!(email, error = %e, "admin login failed");
                let message = e.detail().unwrap_or(INVALID_CREDENTIALS).to_string();
                self.notice = Some(Notice::error(message.clone()));
                Err(DashboardError::LoginFailed(message))
            }
        }
    }

    pub fn logout(&mut self) {
        tracing::info!("admin logged out");
        self.session.clear();
        self.reset_data();
        self.notice = Some(Notice::info("You have been logged out."));
    }

    /// Check the stored token, then load both lists.
    pub async fn open(&mut self) -> Result<(), DashboardError> {
        self.require_session()?;
        if let Err(e) = self.services.auth.verify(&self.session).await {
            return Err(self.fail(e, LOAD_FAILED));
        }
        self.refresh().await
    }

    /// Fetch bookings and messages concurrently and wait for both.
    pub async fn refresh(&mut self) -> Result<(), DashboardError> {
        self.require_session()?;
        let result = tokio::try_join!(
            self.services.bookings.list(&self.session),
            self.services.contact.list(&self.session),
        );

        match result {
            Ok((bookings, messages)) => {
                tracing::debug!(
                    bookings = bookings.len(),
                    messages = messages.len(),
                    "dashboard loaded"
                );
                self.bookings = bookings;
                self.messages = messages;
                self.loaded = true;
                Ok(())
            }
            Err(e) => Err(self.fail(e, LOAD_FAILED)),
        }
    }

    /// Change a booking's status. The list shows the new status right away
    /// and is rolled back if the backend refuses.
    pub async fn update_status(
        &mut self,
        id: &str,
        status: BookingStatus,
    ) -> Result<(), DashboardError> {
        self.require_session()?;
        let booking = self
            .bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| DashboardError::UnknownBooking(id.to_string()))?;
        let previous = std::mem::replace(&mut booking.status, status);

        match self
            .services
            .bookings
            .update_status(&self.session, id, status)
            .await
        {
            Ok(()) => {
                tracing::info!(booking_id = id, status = status.as_str(), "booking status updated");
                self.notice = Some(Notice::success(format!(
                    "Booking status updated to {}",
                    status.as_str()
                )));
                Ok(())
            }
            Err(e) => {
                if let Some(booking) = self.bookings.iter_mut().find(|b| b.id == id) {
                    booking.status = previous;
                }
                Err(self.fail(e, "Failed to update status"))
            }
        }
    }

    /// Delete a booking. Returns whether anything was deleted; a declined
    /// confirmation issues no request.
    pub async fn delete_booking(
        &mut self,
        id: &str,
        confirmation: Confirmation,
    ) -> Result<bool, DashboardError> {
        if confirmation == Confirmation::Declined {
            return Ok(false);
        }
        self.require_session()?;

        match self.services.bookings.delete(&self.session, id).await {
            Ok(()) => {
                tracing::info!(booking_id = id, "booking deleted");
                self.bookings.retain(|b| b.id != id);
                if self.selected.as_deref() == Some(id) {
                    self.selected = None;
                }
                self.notice = Some(Notice::success("Booking deleted"));
                Ok(true)
            }
            Err(e) => Err(self.fail(e, "Failed to delete booking")),
        }
    }

    pub async fn delete_message(
        &mut self,
        id: &str,
        confirmation: Confirmation,
    ) -> Result<bool, DashboardError> {
        if confirmation == Confirmation::Declined {
            return Ok(false);
        }
        self.require_session()?;

        match self.services.contact.delete(&self.session, id).await {
            Ok(()) => {
                tracing::info!(message_id = id, "contact message deleted");
                self.messages.retain(|m| m.id != id);
                self.notice = Some(Notice::success("Message deleted"));
                Ok(true)
            }
            Err(e) => Err(self.fail(e, "Failed to delete message")),
        }
    }

    fn require_session(&self) -> Result<(), DashboardError> {
        match self.session {
            Session::Valid(_) => Ok(()),
            Session::Expired => Err(DashboardError::SessionExpired),
            Session::Absent => Err(DashboardError::NotAuthenticated),
        }
    }

    fn reset_data(&mut self) {
        self.bookings.clear();
        self.messages.clear();
        self.loaded = false;
        self.selected = None;
    }

    /// Record a failed backend call. A 401 ends the session.
    fn fail(&mut self, e: ApiError, message: &str) -> DashboardError {
        if e.is_unauthorized() {
            tracing::warn!("admin session rejected by backend");
            self.session.expire();
            self.reset_data();
            self.notice = Some(Notice::error(SESSION_EXPIRED));
            return DashboardError::SessionExpired;
        }
        tracing::error!(error = %e, "{message}");
        self.notice = Some(Notice::error(message));
        DashboardError::Backend(e)
    }
}
