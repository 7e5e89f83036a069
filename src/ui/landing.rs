use super::wizard::BookingWizard;
use crate::models::ServiceType;

/// Landing page state: whether the booking modal is open and which
/// service it was opened for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LandingPage {
    booking_open: bool,
    preselected: Option<ServiceType>,
}

impl LandingPage {
    pub fn is_booking_open(&self) -> bool {
        self.booking_open
    }

    pub fn preselected(&self) -> Option<ServiceType> {
        self.preselected
    }

    /// Open the booking modal with a fresh wizard.
    pub fn open_booking(&mut self, service: Option<ServiceType>) -> BookingWizard {
        self.booking_open = true;
        self.preselected = service;
        BookingWizard::new(service)
    }

    /// Show an already running wizard.
    pub fn resume_booking(&mut self, wizard: &BookingWizard) {
        self.booking_open = true;
        self.preselected = wizard.form().service_type;
    }

    pub fn close_booking(&mut self) {
        self.booking_open = false;
        self.preselected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::wizard::WizardStep;

    #[test]
    fn test_open_and_close_booking() {
        let mut page = LandingPage::default();
        assert!(!page.is_booking_open());

        let wizard = page.open_booking(Some(ServiceType::SocialMedia));
        assert!(page.is_booking_open());
        assert_eq!(page.preselected(), Some(ServiceType::SocialMedia));
        assert_eq!(wizard.step(), WizardStep::Service);
        assert_eq!(wizard.form().service_type, Some(ServiceType::SocialMedia));

        page.close_booking();
        assert!(!page.is_booking_open());
        assert_eq!(page.preselected(), None);
    }

    #[test]
    fn test_generic_open_has_no_preselection() {
        let mut page = LandingPage::default();
        let wizard = page.open_booking(None);
        assert!(wizard.form().service_type.is_none());
        assert!(!wizard.can_proceed());
    }
}
