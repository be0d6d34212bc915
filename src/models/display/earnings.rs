//! Payment display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::{Payment, PaymentStatus};
use crate::output::formatters::{format_amount, format_timestamp};

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct PaymentDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "DATE")]
    pub date: String,

    #[tabled(rename = "PATIENT")]
    pub patient: String,

    #[tabled(rename = "AMOUNT")]
    pub amount: String,

    #[tabled(rename = "METHOD")]
    pub method: String,

    #[tabled(rename = "STATUS")]
    pub status: String,
}

impl From<Payment> for PaymentDisplay {
    fn from(p: Payment) -> Self {
        let status = match p.status {
            PaymentStatus::Completed => "completed",
            PaymentStatus::Pending => "pending",
            PaymentStatus::Unknown => "unknown",
        };

        Self {
            id: p.id,
            date: format_timestamp(&p.created_at),
            patient: p.patient_name,
            amount: format_amount(p.amount),
            method: p.method,
            status: status.to_string(),
        }
    }
}
