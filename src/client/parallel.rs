//! Parallel fetching for dashboard aggregates.
//!
//! Independent requests are issued together and joined all-or-nothing:
//! the first failure aborts the join and no partial result escapes.

use log::debug;
use serde::Serialize;

use super::api::AppointmentApi;
use super::models::{Appointment, AppointmentStats};
use crate::error::Result;

/// Everything the admin dashboard shows, fetched as one unit
#[derive(Debug, Clone, Serialize)]
pub struct AdminOverview {
    pub stats: AppointmentStats,
    pub today: Vec<Appointment>,
    pub upcoming: Vec<Appointment>,
    pub past: Vec<Appointment>,
}

/// Fetch stats, today, upcoming and past appointments concurrently.
///
/// No ordering is defined between the four requests. If any of them fails
/// the whole overview fails and the other results are dropped.
pub async fn fetch_admin_overview<C>(client: &C, token: &str) -> Result<AdminOverview>
where
    C: AppointmentApi + ?Sized,
{
    debug!("Fetching admin overview (stats, today, upcoming, past)");

    let (stats, today, upcoming, past) = futures::try_join!(
        client.admin_appointment_stats(token),
        client.admin_today_appointments(token),
        client.admin_upcoming_appointments(token),
        client.admin_past_appointments(token),
    )?;

    debug!(
        "Admin overview: {} today, {} upcoming, {} past",
        today.len(),
        upcoming.len(),
        past.len()
    );

    Ok(AdminOverview {
        stats,
        today,
        upcoming,
        past,
    })
}
