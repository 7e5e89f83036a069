pub mod admin;
pub mod contact;
pub mod landing;
pub mod notice;
pub mod wizard;

pub use admin::{AdminDashboard, Confirmation, DashboardError, Tab};
pub use contact::{ContactForm, FormError};
pub use landing::LandingPage;
pub use notice::{Notice, NoticeLevel};
pub use wizard::{BookingForm, BookingWizard, WizardError, WizardStep};
