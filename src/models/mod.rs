//! Display models for CLI output
//!
//! Converts API response types into CLI-friendly table rows.

pub mod display;

pub use display::{
    AppointmentDisplay, ChatDisplay, FamilyDisplay, NotificationDisplay, PatientRecordDisplay,
    PaymentDisplay, RequestDisplay,
};
