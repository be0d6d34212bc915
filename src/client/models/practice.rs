//! Doctor practice models: request queue, schedule records, live
//! consultation and chat

use std::fmt;

use serde::{Deserialize, Serialize};

/// Appointment request waiting on (or decided by) the doctor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientRequest {
    pub id: i64,

    #[serde(default)]
    pub patient_name: Option<String>,

    /// What the patient asked about; older backends call it `reason`
    #[serde(default, alias = "reason")]
    pub issue: Option<String>,

    /// Requested slot, e.g. "12:15 PM"
    #[serde(default, alias = "requested_time")]
    pub time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Request queue filter, sent as `?status=`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decision on a pending request, the last segment of
/// `POST /api/requests/{id}/{action}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestAction {
    Approve,
    Reject,
}

impl RequestAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestAction::Approve => "approve",
            RequestAction::Reject => "reject",
        }
    }

    /// Status the request ends up in
    pub fn outcome(&self) -> RequestStatus {
        match self {
            RequestAction::Approve => RequestStatus::Approved,
            RequestAction::Reject => RequestStatus::Rejected,
        }
    }
}

/// Row of the doctor's own schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: i64,

    #[serde(default)]
    pub patient_name: Option<String>,

    #[serde(default)]
    pub time_slot: Option<String>,

    #[serde(default, rename = "type")]
    pub kind: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    /// `YYYY-MM-DD`, or the literal "today" on seeded backends
    #[serde(default)]
    pub date: Option<String>,
}

/// Body of `GET /api/all-records`: the schedule plus requests already decided
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PracticeRecords {
    #[serde(default)]
    pub appointments: Vec<ScheduleEntry>,

    #[serde(default)]
    pub request_history: Vec<PatientRequest>,
}

/// Consultation in progress, from `GET /api/consultation/live`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LiveConsultation {
    #[serde(default)]
    pub patient_name: String,

    #[serde(default, rename = "type")]
    pub kind: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub timer_start: Option<String>,
}

/// Who wrote a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatSender {
    Doctor,
    Patient,
}

impl ChatSender {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatSender::Doctor => "doctor",
            ChatSender::Patient => "patient",
        }
    }
}

/// Stored chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: i64,

    pub sender: String,

    pub text: String,

    #[serde(default)]
    pub timestamp: Option<String>,
}

impl ChatMessage {
    /// Local stand-in shown until the server assigns an id
    pub fn draft(sender: ChatSender, text: &str) -> Self {
        Self {
            id: 0,
            sender: sender.as_str().to_string(),
            text: text.to_string(),
            timestamp: None,
        }
    }
}

/// Body of `POST /api/chat/send`
#[derive(Debug, Clone, Serialize)]
pub struct OutgoingMessage {
    #[serde(rename = "patientId")]
    pub patient_id: i64,

    pub sender: ChatSender,

    pub text: String,
}
