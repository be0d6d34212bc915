//! Appointment models

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Appointment status as reported by the backend.
///
/// The client only displays statuses; transitions are the server's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Scheduled,
    Confirmed,
    Completed,
    Cancelled,
    Rescheduled,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::Rescheduled => "rescheduled",
            AppointmentStatus::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Appointment resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,

    #[serde(default)]
    pub patient_id: Option<i64>,

    #[serde(default)]
    pub doctor_id: Option<i64>,

    #[serde(default)]
    pub patient_name: Option<String>,

    #[serde(default)]
    pub doctor_name: Option<String>,

    pub appointment_date: NaiveDate,

    /// Wall-clock time, "HH:MM"
    pub appointment_time: String,

    pub status: AppointmentStatus,

    #[serde(default)]
    pub reason: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Admin dashboard counters from `/api/admin/appointments/stats`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentStats {
    /// Scheduled appointments for today
    pub today: u32,
    pub upcoming: u32,
    pub completed: u32,
    pub cancelled: u32,
    pub rescheduled: u32,
    /// Appointments for today in any status
    pub total_today: u32,
}

/// Booking payload for `POST /api/appointments`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAppointment {
    pub doctor_id: i64,
    pub appointment_date: NaiveDate,
    pub appointment_time: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Patch payload for `PATCH /api/appointments/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentUpdate {
    pub status: AppointmentStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment_time: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_appointment() {
        let body = r#"{
            "id": 12,
            "patient_id": 3,
            "doctor_id": 4,
            "appointment_date": "2025-03-14",
            "appointment_time": "09:30",
            "status": "scheduled",
            "reason": null,
            "created_at": "2025-03-01T10:00:00",
            "updated_at": "2025-03-01T10:00:00",
            "patient_name": "alice",
            "doctor_name": "Dr. Bob"
        }"#;
        let appt: Appointment = serde_json::from_str(body).unwrap();
        assert_eq!(appt.id, 12);
        assert_eq!(appt.status, AppointmentStatus::Scheduled);
        assert_eq!(
            appt.appointment_date,
            NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
        );
        assert_eq!(appt.doctor_name.as_deref(), Some("Dr. Bob"));
    }

    #[test]
    fn test_unrecognized_status_maps_to_unknown() {
        let status: AppointmentStatus = serde_json::from_str("\"no_show\"").unwrap();
        assert_eq!(status, AppointmentStatus::Unknown);
    }

    #[test]
    fn test_update_omits_unset_fields() {
        let update = AppointmentUpdate {
            status: AppointmentStatus::Cancelled,
            appointment_date: None,
            appointment_time: None,
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"status":"cancelled"}"#);
    }
}
