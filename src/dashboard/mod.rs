//! Role dashboards
//!
//! Each dashboard gathers its data with concurrent, all-or-nothing requests
//! and shapes it with [`insights`]. [`load`] picks the one the router chose.

pub mod chat;
pub mod doctor;
pub mod insights;
pub mod patient;

use chrono::NaiveDate;
use serde::Serialize;

use crate::client::{AdminOverview, CareApi, fetch_admin_overview};
use crate::error::Result;
use crate::router::View;

pub use chat::{ChatThread, sender_for};
pub use doctor::{DoctorDashboard, NotificationFeed};
pub use patient::PatientDashboard;

/// Data behind a dashboard view
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "view", rename_all = "kebab-case")]
pub enum Dashboard {
    Admin(AdminOverview),
    Doctor(DoctorDashboard),
    Patient(PatientDashboard),
}

/// Load the dashboard for `view`, or `None` for views that need no data
pub async fn load<C>(client: &C, view: View, token: &str, today: NaiveDate) -> Result<Option<Dashboard>>
where
    C: CareApi + ?Sized,
{
    let dashboard = match view {
        View::AdminDashboard => Dashboard::Admin(fetch_admin_overview(client, token).await?),
        View::DoctorDashboard => Dashboard::Doctor(DoctorDashboard::load(client, token, today).await?),
        View::PatientDashboard => {
            Dashboard::Patient(PatientDashboard::load(client, token, today).await?)
        }
        View::Login | View::Signup | View::ForgotPassword => return Ok(None),
    };
    Ok(Some(dashboard))
}
