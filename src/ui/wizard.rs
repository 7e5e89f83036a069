use chrono::NaiveDate;

use super::notice::Notice;
use crate::errors::ApiError;
use crate::models::{default_time_slots, NewBooking, ServiceType};
use crate::services::BookingsService;

pub const SUBMIT_SUCCEEDED: &str = "Booking submitted successfully!";
pub const SUBMIT_FAILED: &str = "Failed to submit booking. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Service,
    Schedule,
    Details,
    Complete,
}

impl WizardStep {
    pub fn number(&self) -> Option<u8> {
        match self {
            WizardStep::Service => Some(1),
            WizardStep::Schedule => Some(2),
            WizardStep::Details => Some(3),
            WizardStep::Complete => None,
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            WizardStep::Service => "SELECT SERVICE",
            WizardStep::Schedule => "CHOOSE DATE & TIME",
            WizardStep::Details => "YOUR DETAILS",
            WizardStep::Complete => "BOOKING COMPLETE",
        }
    }

    pub fn caption(&self) -> String {
        match self.number() {
            Some(n) => format!("STEP {n} OF 3"),
            None => "CONFIRMED".to_string(),
        }
    }
}

/// Everything the visitor has entered so far.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingForm {
    pub service_type: Option<ServiceType>,
    pub booking_date: Option<NaiveDate>,
    pub booking_time: Option<String>,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub message: String,
}

impl BookingForm {
    fn has_schedule(&self) -> bool {
        self.booking_date.is_some() && self.booking_time.is_some()
    }

    fn has_details(&self) -> bool {
        [&self.client_name, &self.client_email, &self.client_phone]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    fn to_new_booking(&self) -> Option<NewBooking> {
        let message = self.message.trim();
        Some(NewBooking {
            service_type: self.service_type?,
            booking_date: self.booking_date?.format("%Y-%m-%d").to_string(),
            booking_time: self.booking_time.clone()?,
            client_name: self.client_name.trim().to_string(),
            client_email: self.client_email.trim().to_string(),
            client_phone: self.client_phone.trim().to_string(),
            message: (!message.is_empty()).then(|| message.to_string()),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error("Please select a service to continue.")]
    ServiceRequired,

    #[error("Please choose a date and a time to continue.")]
    ScheduleRequired,

    #[error("Name, email and phone are required.")]
    DetailsRequired,

    #[error("{0} can't be booked. Please pick a date from tomorrow on.")]
    DateNotSelectable(NaiveDate),

    #[error("{0} is not an available time.")]
    UnknownSlot(String),

    #[error("That action isn't available on this step.")]
    WrongStep(WizardStep),

    #[error("Your booking is already being submitted.")]
    SubmissionInProgress,

    #[error("Failed to submit booking. Please try again.")]
    Submit(#[source] ApiError),
}

/// Three-step booking flow: service, then date and time, then contact
/// details, ending in a completion view.
#[derive(Debug, Clone)]
pub struct BookingWizard {
    step: WizardStep,
    form: BookingForm,
    available_times: Vec<String>,
    fallback_slots: bool,
    submitting: bool,
    notice: Option<Notice>,
}

impl BookingWizard {
    pub fn new(preselected: Option<ServiceType>) -> Self {
        Self {
            step: WizardStep::Service,
            form: BookingForm {
                service_type: preselected,
                ..BookingForm::default()
            },
            available_times: Vec::new(),
            fallback_slots: false,
            submitting: false,
            notice: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    pub fn available_times(&self) -> &[String] {
        &self.available_times
    }

    /// True when the slot list is the static default because the lookup failed.
    pub fn using_fallback_slots(&self) -> bool {
        self.fallback_slots
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    pub fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    /// Whether "Next" (or "Confirm Booking" on the last step) is enabled.
    pub fn can_proceed(&self) -> bool {
        match self.step {
            WizardStep::Service => self.form.service_type.is_some(),
            WizardStep::Schedule => self.form.has_schedule(),
            WizardStep::Details => self.can_submit(),
            WizardStep::Complete => false,
        }
    }

    pub fn can_submit(&self) -> bool {
        self.step == WizardStep::Details && self.form.has_details() && !self.submitting
    }

    pub fn service_label(&self) -> Option<&'static str> {
        self.form.service_type.map(|s| s.label())
    }

    /// Heading of the completion view.
    pub fn thank_you(&self) -> Option<String> {
        (self.step == WizardStep::Complete)
            .then(|| format!("THANK YOU, {}!", self.form.client_name.trim().to_uppercase()))
    }

    pub fn is_selectable_date(date: NaiveDate, today: NaiveDate) -> bool {
        date > today
    }

    pub fn select_service(&mut self, service: ServiceType) -> Result<(), WizardError> {
        self.require(WizardStep::Service)?;
        self.form.service_type = Some(service);
        Ok(())
    }

    pub fn next(&mut self) -> Result<WizardStep, WizardError> {
        self.step = match self.step {
            WizardStep::Service if self.form.service_type.is_none() => {
                return Err(WizardError::ServiceRequired)
            }
            WizardStep::Service => WizardStep::Schedule,
            WizardStep::Schedule if !self.form.has_schedule() => {
                return Err(WizardError::ScheduleRequired)
            }
            WizardStep::Schedule => WizardStep::Details,
            step => return Err(WizardError::WrongStep(step)),
        };
        Ok(self.step)
    }

    pub fn back(&mut self) -> WizardStep {
        self.step = match self.step {
            WizardStep::Schedule => WizardStep::Service,
            WizardStep::Details => WizardStep::Schedule,
            step => step,
        };
        self.step
    }

    /// Pick a booking date and load its free slots. Falls back to the
    /// default slot list when the lookup fails.
    pub async fn select_date(
        &mut self,
        date: NaiveDate,
        today: NaiveDate,
        bookings: &dyn BookingsService,
    ) -> Result<(), WizardError> {
        self.require(WizardStep::Schedule)?;
        if !Self::is_selectable_date(date, today) {
            return Err(WizardError::DateNotSelectable(date));
        }

        self.form.booking_date = Some(date);
        self.form.booking_time = None;

        match bookings.available_times(date).await {
            Ok(times) => {
                self.available_times = times;
                self.fallback_slots = false;
            }
            Err(e) => {
                // TODO: confirm with product whether a failed lookup should be surfaced instead.
                tracing::warn!(error = %e, %date, "available time lookup failed, offering default slots");
                self.available_times = default_time_slots();
                self.fallback_slots = true;
            }
        }
        Ok(())
    }

    pub fn select_time(&mut self, slot: &str) -> Result<(), WizardError> {
        self.require(WizardStep::Schedule)?;
        if self.form.booking_date.is_none() {
            return Err(WizardError::ScheduleRequired);
        }
        if !self.available_times.iter().any(|t| t == slot) {
            return Err(WizardError::UnknownSlot(slot.to_string()));
        }
        self.form.booking_time = Some(slot.to_string());
        Ok(())
    }

    pub fn update_details(
        &mut self,
        name: &str,
        email: &str,
        phone: &str,
        message: &str,
    ) -> Result<(), WizardError> {
        self.require(WizardStep::Details)?;
        self.form.client_name = name.to_string();
        self.form.client_email = email.to_string();
        self.form.client_phone = phone.to_string();
        self.form.message = message.to_string();
        Ok(())
    }

    /// Validate and lock the wizard for submission. Pair with `finish_submit`.
    pub fn begin_submit(&mut self) -> Result<NewBooking, WizardError> {
        self.require(WizardStep::Details)?;
        if self.submitting {
            return Err(WizardError::SubmissionInProgress);
        }
        if !self.form.has_details() {
            return Err(WizardError::DetailsRequired);
        }
        let booking = self
            .form
            .to_new_booking()
            .ok_or(WizardError::ScheduleRequired)?;
        self.submitting = true;
        Ok(booking)
    }

    pub fn finish_submit(&mut self, result: Result<(), ApiError>) -> Result<(), WizardError> {
        self.submitting = false;
        match result {
            Ok(()) => {
                tracing::info!(
                    service = self.form.service_type.map(|s| s.as_str()).unwrap_or_default(),
                    date = ?self.form.booking_date,
                    "booking submitted"
                );
                self.step = WizardStep::Complete;
                self.notice = Some(Notice::success(SUBMIT_SUCCEEDED));
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "booking submission failed");
                self.notice = Some(Notice::error(SUBMIT_FAILED));
                Err(WizardError::Submit(e))
            }
        }
    }

    pub async fn submit(&mut self, bookings: &dyn BookingsService) -> Result<(), WizardError> {
        let booking = self.begin_submit()?;
        let result = bookings.create(&booking).await;
        self.finish_submit(result)
    }

    fn require(&self, step: WizardStep) -> Result<(), WizardError> {
        if self.step != step {
            return Err(WizardError::WrongStep(self.step));
        }
        Ok(())
    }
}
