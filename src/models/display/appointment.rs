//! Appointment display model

use serde::Serialize;
use tabled::Tabled;

use super::common::{or_empty, truncate_string};
use crate::client::models::Appointment;

/// Appointment row for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct AppointmentDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "DATE")]
    pub date: String,

    #[tabled(rename = "TIME")]
    pub time: String,

    #[tabled(rename = "PATIENT")]
    pub patient: String,

    #[tabled(rename = "DOCTOR")]
    pub doctor: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    /// Truncated to keep rows on one line
    #[tabled(rename = "REASON")]
    pub reason: String,
}

impl From<Appointment> for AppointmentDisplay {
    fn from(a: Appointment) -> Self {
        Self::from(&a)
    }
}

impl From<&Appointment> for AppointmentDisplay {
    fn from(a: &Appointment) -> Self {
        Self {
            id: a.id,
            date: a.appointment_date.format("%Y-%m-%d").to_string(),
            time: a.appointment_time.clone(),
            patient: or_empty(a.patient_name.as_deref()),
            doctor: or_empty(a.doctor_name.as_deref()),
            status: a.status.to_string(),
            reason: truncate_string(&or_empty(a.reason.as_deref()), 40),
        }
    }
}
