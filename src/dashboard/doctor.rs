//! Doctor dashboard: earnings card, notification feed, request queue, live
//! consultation and this week's patients

use chrono::NaiveDate;
use log::debug;
use serde::Serialize;

use super::insights::{self, EarningsBreakdown, PatientRecord};
use crate::client::models::{
    LiveConsultation, Notification, PatientRequest, Payment, PaymentQuery, RequestStatus,
};
use crate::client::{EarningsApi, NotificationApi, PracticeApi};
use crate::error::Result;
use crate::optimistic::Optimistic;

/// Days of payment history the earnings card covers
pub const EARNINGS_WINDOW_DAYS: u64 = 30;

#[derive(Debug, Clone, Serialize)]
pub struct DoctorDashboard {
    pub breakdown: EarningsBreakdown,
    pub payments: Vec<Payment>,
    pub notifications: NotificationFeed,
    /// Requests still waiting on a decision
    pub requests: Vec<PatientRequest>,
    pub live: Option<LiveConsultation>,
    pub this_week: Vec<PatientRecord>,
}

impl DoctorDashboard {
    /// Load payments, notifications, records, pending requests and the live
    /// consultation concurrently. Any failure fails the whole dashboard.
    pub async fn load<C>(client: &C, token: &str, today: NaiveDate) -> Result<Self>
    where
        C: EarningsApi + NotificationApi + PracticeApi + ?Sized,
    {
        let window = PaymentQuery::last_days(today, EARNINGS_WINDOW_DAYS);

        let (payments, notifications, records, requests, live) = futures::try_join!(
            client.payment_history(token, &window),
            client.list_notifications(token),
            client.practice_records(token),
            client.list_requests(token, RequestStatus::Pending),
            client.live_consultation(token),
        )?;

        debug!(
            "Doctor dashboard: {} payments, {} notifications, {} records, {} pending requests, live={}",
            payments.len(),
            notifications.len(),
            records.appointments.len() + records.request_history.len(),
            requests.len(),
            live.is_some()
        );

        Ok(Self {
            breakdown: insights::earnings_breakdown(&payments, today),
            payments,
            notifications: NotificationFeed::new(notifications),
            requests,
            live,
            this_week: insights::weekly_patients(&records, today),
        })
    }
}

/// Locally held notification list with optimistic read marking
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct NotificationFeed {
    items: Vec<Notification>,
}

impl NotificationFeed {
    pub fn new(items: Vec<Notification>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn unread_count(&self) -> usize {
        insights::unread_count(&self.items)
    }

    /// Flip `id` to read locally, then confirm with the server.
    ///
    /// The server is called even when `id` is not in the local list. On
    /// failure the local list is restored and the error returned.
    pub async fn mark_read<C>(&mut self, client: &C, token: &str, id: i64) -> Result<()>
    where
        C: NotificationApi + ?Sized,
    {
        let pending = Optimistic::apply(&mut self.items, |items| {
            for n in items.iter_mut().filter(|n| n.id == id) {
                n.is_read = true;
            }
        });
        pending.settle(client.mark_notification_read(token, id).await)
    }

    /// Flip every notification to read locally, then confirm with the server
    pub async fn mark_all_read<C>(&mut self, client: &C, token: &str) -> Result<()>
    where
        C: NotificationApi + ?Sized,
    {
        let pending = Optimistic::apply(&mut self.items, |items| {
            for n in items.iter_mut() {
                n.is_read = true;
            }
        });
        pending.settle(client.mark_all_notifications_read(token).await)
    }
}
