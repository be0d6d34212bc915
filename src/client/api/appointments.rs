//! Appointment API trait

use async_trait::async_trait;

use crate::client::models::{
    Appointment, AppointmentStats, AppointmentUpdate, MessageResponse, NewAppointment,
};
use crate::error::Result;

/// Appointment operations for patients and admins
#[async_trait]
pub trait AppointmentApi: Send + Sync {
    /// Book an appointment for the logged-in patient
    async fn create_appointment(&self, token: &str, request: &NewAppointment)
    -> Result<Appointment>;

    /// List the logged-in patient's appointments
    async fn list_my_appointments(&self, token: &str) -> Result<Vec<Appointment>>;

    /// Get a single appointment
    async fn get_appointment(&self, token: &str, id: i64) -> Result<Appointment>;

    /// Change status or reschedule
    async fn update_appointment(
        &self,
        token: &str,
        id: i64,
        update: &AppointmentUpdate,
    ) -> Result<Appointment>;

    /// Cancel an appointment
    async fn cancel_appointment(&self, token: &str, id: i64) -> Result<MessageResponse>;

    /// Admin: dashboard counters
    async fn admin_appointment_stats(&self, token: &str) -> Result<AppointmentStats>;

    /// Admin: all of today's appointments
    async fn admin_today_appointments(&self, token: &str) -> Result<Vec<Appointment>>;

    /// Admin: scheduled appointments after today
    async fn admin_upcoming_appointments(&self, token: &str) -> Result<Vec<Appointment>>;

    /// Admin: appointments before today
    async fn admin_past_appointments(&self, token: &str) -> Result<Vec<Appointment>>;
}
