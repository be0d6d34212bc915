//! Earnings and payment models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Payment settlement status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
    #[serde(other)]
    Unknown,
}

/// Single payment in a doctor's history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: i64,
    pub patient_name: String,
    pub amount: i64,
    pub method: String,
    pub status: PaymentStatus,
    pub created_at: String,
}

/// Aggregate from `/api/doctor/earnings/summary`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EarningsSummary {
    pub total_amount: i64,
    pub completed_count: u32,
    pub pending_count: u32,
}

/// Optional date window forwarded as `from_date` / `to_date`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentQuery {
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
}

impl PaymentQuery {
    /// Window covering the `days` days up to and including `today`
    pub fn last_days(today: NaiveDate, days: u64) -> Self {
        Self {
            from_date: today.checked_sub_days(chrono::Days::new(days)),
            to_date: Some(today),
        }
    }

    /// Convert to query parameters, skipping unset bounds
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(from) = self.from_date {
            params.push(("from_date", from.format("%Y-%m-%d").to_string()));
        }
        if let Some(to) = self.to_date {
            params.push(("to_date", to.format("%Y-%m-%d").to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query() {
        assert!(PaymentQuery::default().to_query().is_empty());
    }

    #[test]
    fn test_last_thirty_days() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();
        let query = PaymentQuery::last_days(today, 30);
        assert_eq!(
            query.to_query(),
            vec![
                ("from_date", "2025-03-01".to_string()),
                ("to_date", "2025-03-31".to_string()),
            ]
        );
    }

    #[test]
    fn test_payment_status_parsing() {
        let p: Payment = serde_json::from_str(
            r#"{"id":1,"patient_name":"a","amount":500,"method":"card","status":"refunded","created_at":"2025-01-01T00:00:00"}"#,
        )
        .unwrap();
        assert_eq!(p.status, PaymentStatus::Unknown);
    }
}
