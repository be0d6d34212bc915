//! CareLink API data models
//!
//! Domain types exchanged with the CareLink backend, organized by resource.

mod appointment;
mod auth;
mod earnings;
mod family;
mod notification;
mod practice;

pub use appointment::{
    Appointment, AppointmentStats, AppointmentStatus, AppointmentUpdate, NewAppointment,
};
#[cfg(test)]
pub use auth::LoginUser;
pub use auth::{LoginResponse, MessageResponse, RefreshResponse, SignupRequest, UserProfile};
pub use earnings::{EarningsSummary, Payment, PaymentQuery, PaymentStatus};
pub use family::{FamilyMember, NewFamilyMember};
pub use notification::Notification;
pub use practice::{
    ChatMessage, ChatSender, LiveConsultation, OutgoingMessage, PatientRequest, PracticeRecords,
    RequestAction, RequestStatus, ScheduleEntry,
};
