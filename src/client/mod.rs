//! CareLink API client

pub mod api;
pub mod care;
#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod parallel;

pub use api::{
    AppointmentApi, AuthApi, ChatApi, EarningsApi, FamilyApi, NotificationApi, PracticeApi,
};
pub use care::CareClient;
#[cfg(test)]
pub use mock::MockCareClient;
pub use parallel::{AdminOverview, fetch_admin_overview};

/// Combined CareLink API surface
///
/// Blanket-implemented for anything that provides every resource trait.
pub trait CareApi:
    AuthApi + AppointmentApi + EarningsApi + NotificationApi + FamilyApi + PracticeApi + ChatApi
{
}

impl<T> CareApi for T where
    T: AuthApi
        + AppointmentApi
        + EarningsApi
        + NotificationApi
        + FamilyApi
        + PracticeApi
        + ChatApi
{
}
