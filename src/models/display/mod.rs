//! Display model implementations for table and JSON output
//!
//! Display models transform API response types into CLI-friendly formats
//! with appropriate column names and serialization.

mod appointment;
mod common;
mod earnings;
mod family;
mod notification;
mod practice;

pub use appointment::AppointmentDisplay;
pub use earnings::PaymentDisplay;
pub use family::FamilyDisplay;
pub use notification::NotificationDisplay;
pub use practice::{ChatDisplay, PatientRecordDisplay, RequestDisplay};
