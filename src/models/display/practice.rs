//! Request queue, patient list and chat display models

use serde::Serialize;
use tabled::Tabled;

use super::common::{or_empty, truncate_string};
use crate::client::models::{ChatMessage, PatientRequest};
use crate::dashboard::insights::{PatientRecord, RecordSource};
use crate::output::formatters::format_timestamp;

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct RequestDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "PATIENT")]
    pub patient: String,

    #[tabled(rename = "ISSUE")]
    pub issue: String,

    #[tabled(rename = "TIME")]
    pub time: String,
}

impl From<&PatientRequest> for RequestDisplay {
    fn from(r: &PatientRequest) -> Self {
        Self {
            id: r.id,
            patient: or_empty(r.patient_name.as_deref()),
            issue: truncate_string(&or_empty(r.issue.as_deref()), 40),
            time: or_empty(r.time.as_deref()),
        }
    }
}

impl From<PatientRequest> for RequestDisplay {
    fn from(r: PatientRequest) -> Self {
        Self::from(&r)
    }
}

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct PatientRecordDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "PATIENT")]
    pub patient: String,

    #[tabled(rename = "DATE")]
    pub date: String,

    #[tabled(rename = "TIME")]
    pub time: String,

    #[tabled(rename = "REASON")]
    pub reason: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "FROM")]
    pub source: String,
}

impl From<&PatientRecord> for PatientRecordDisplay {
    fn from(r: &PatientRecord) -> Self {
        Self {
            id: r.id,
            patient: r.patient_name.clone(),
            date: r.date.format("%a %Y-%m-%d").to_string(),
            time: r.time.clone(),
            reason: truncate_string(&r.reason, 30),
            status: r.status.clone(),
            source: match r.source {
                RecordSource::Appointment => "schedule".to_string(),
                RecordSource::Request => "request".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ChatDisplay {
    #[tabled(rename = "FROM")]
    pub sender: String,

    #[tabled(rename = "MESSAGE")]
    pub text: String,

    #[tabled(rename = "SENT")]
    pub sent: String,
}

impl From<&ChatMessage> for ChatDisplay {
    fn from(m: &ChatMessage) -> Self {
        Self {
            sender: m.sender.clone(),
            text: truncate_string(&m.text, 70),
            sent: m
                .timestamp
                .as_deref()
                .map(format_timestamp)
                .unwrap_or_else(|| or_empty(None)),
        }
    }
}
