//! Test fixtures for API model types
//!
//! Small constructors with sensible defaults. Import via
//! `use crate::client::fixtures::*` in test modules.

#![allow(dead_code)]

use chrono::NaiveDate;

use super::models::{
    Appointment, AppointmentStatus, ChatMessage, FamilyMember, LoginResponse, LoginUser,
    Notification, PatientRequest, Payment, PaymentStatus, ScheduleEntry,
};

/// Parse a `YYYY-MM-DD` literal. Panics on bad input; tests only.
pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("fixture date")
}

/// Appointment on `day` at 10:00 between patient 1 and doctor 2
pub fn appointment(id: i64, day: &str, status: AppointmentStatus) -> Appointment {
    Appointment {
        id,
        patient_id: Some(1),
        doctor_id: Some(2),
        patient_name: Some(format!("patient-{}", id)),
        doctor_name: Some("Dr. Rao".to_string()),
        appointment_date: date(day),
        appointment_time: "10:00".to_string(),
        status,
        reason: None,
        created_at: None,
        updated_at: None,
    }
}

pub fn payment(id: i64, amount: i64, status: PaymentStatus, created_at: &str) -> Payment {
    Payment {
        id,
        patient_name: format!("patient-{}", id),
        amount,
        method: "card".to_string(),
        status,
        created_at: created_at.to_string(),
    }
}

pub fn notification(id: i64, is_read: bool) -> Notification {
    Notification {
        id,
        kind: "appointment".to_string(),
        message: format!("Notification {}", id),
        redirect_to: None,
        is_read,
        created_at: "2025-03-01T09:00:00".to_string(),
    }
}

/// Pending request from `name` at 10:30 AM
pub fn patient_request(id: i64, name: &str) -> PatientRequest {
    PatientRequest {
        id,
        patient_name: Some(name.to_string()),
        issue: Some("Fever".to_string()),
        time: Some("10:30 AM".to_string()),
        status: None,
    }
}

/// Confirmed schedule row on `date` (a `YYYY-MM-DD` string or "today")
pub fn schedule_entry(id: i64, name: &str, date: Option<&str>) -> ScheduleEntry {
    ScheduleEntry {
        id,
        patient_name: Some(name.to_string()),
        time_slot: Some("11:00 AM".to_string()),
        kind: Some("Check-up".to_string()),
        status: Some("Confirmed".to_string()),
        date: date.map(str::to_string),
    }
}

pub fn chat_message(id: i64, sender: &str, text: &str) -> ChatMessage {
    ChatMessage {
        id,
        sender: sender.to_string(),
        text: text.to_string(),
        timestamp: Some("2025-03-14T10:05:00".to_string()),
    }
}

pub fn family_member(id: i64, name: &str) -> FamilyMember {
    FamilyMember {
        id,
        name: name.to_string(),
        relation: "child".to_string(),
        age: 8,
        gender: "female".to_string(),
    }
}

/// Login body as the backend returns it, with the given role string
pub fn login_response(username: &str, role: Option<&str>) -> LoginResponse {
    LoginResponse {
        access_token: format!("access-{}", username),
        refresh_token: format!("refresh-{}", username),
        token_type: Some("bearer".to_string()),
        user: Some(LoginUser {
            id: Some(1),
            username: Some(username.to_string()),
            email: Some(format!("{}@care.test", username)),
            role: role.map(str::to_string),
        }),
    }
}
