//! Patient dashboard: own appointments and family members

use chrono::NaiveDate;
use serde::Serialize;

use super::insights::{self, AppointmentSplit};
use crate::client::models::FamilyMember;
use crate::client::{AppointmentApi, FamilyApi};
use crate::error::Result;

#[derive(Debug, Clone, Serialize)]
pub struct PatientDashboard {
    pub appointments: AppointmentSplit,
    pub family: Vec<FamilyMember>,
}

impl PatientDashboard {
    pub async fn load<C>(client: &C, token: &str, today: NaiveDate) -> Result<Self>
    where
        C: AppointmentApi + FamilyApi + ?Sized,
    {
        let (appointments, family) = futures::try_join!(
            client.list_my_appointments(token),
            client.list_family_members(token),
        )?;

        Ok(Self {
            appointments: insights::split_appointments(appointments, today),
            family,
        })
    }
}
