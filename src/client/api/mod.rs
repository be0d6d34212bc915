//! API trait definitions split by resource
//!
//! - [`AuthApi`] - Login, signup, OTP and password flows
//! - [`AppointmentApi`] - Patient bookings and admin appointment views
//! - [`EarningsApi`] - Doctor earnings and payment history
//! - [`NotificationApi`] - Doctor notifications
//! - [`FamilyApi`] - Patient family members
//! - [`PracticeApi`] - Doctor request queue, schedule records, live consultation
//! - [`ChatApi`] - Doctor-patient chat
//!
//! The [`CareApi`](super::CareApi) super-trait combines all of them.
//! Every authenticated method takes the bearer token explicitly; clients
//! hold no session state of their own.

mod appointments;
mod auth;
mod chat;
mod earnings;
mod family;
mod notifications;
mod practice;

pub use appointments::AppointmentApi;
pub use auth::AuthApi;
pub use chat::ChatApi;
pub use earnings::EarningsApi;
pub use family::FamilyApi;
pub use notifications::NotificationApi;
pub use practice::PracticeApi;
