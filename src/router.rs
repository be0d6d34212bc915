//! Role router
//!
//! Maps the current session and a route fragment to exactly one top-level
//! view. Total and side-effect free: every input resolves, nothing errors.

use std::fmt;

use serde::Serialize;

use crate::session::{Role, Session};

pub const LOGIN_ROUTE: &str = "/login";
pub const SIGNUP_ROUTE: &str = "/signup";
pub const FORGOT_PASSWORD_ROUTE: &str = "/forgot-password";
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// Top-level views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    Login,
    Signup,
    ForgotPassword,
    AdminDashboard,
    DoctorDashboard,
    PatientDashboard,
}

impl View {
    /// Canonical route fragment for this view
    pub fn route(&self) -> &'static str {
        match self {
            View::Login => LOGIN_ROUTE,
            View::Signup => SIGNUP_ROUTE,
            View::ForgotPassword => FORGOT_PASSWORD_ROUTE,
            View::AdminDashboard | View::DoctorDashboard | View::PatientDashboard => {
                DASHBOARD_ROUTE
            }
        }
    }

    pub fn requires_session(&self) -> bool {
        matches!(
            self,
            View::AdminDashboard | View::DoctorDashboard | View::PatientDashboard
        )
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            View::Login => "login",
            View::Signup => "signup",
            View::ForgotPassword => "forgot password",
            View::AdminDashboard => "admin dashboard",
            View::DoctorDashboard => "doctor dashboard",
            View::PatientDashboard => "patient dashboard",
        };
        f.write_str(s)
    }
}

/// Normalise a fragment such as `#/signup?x=1` or `dashboard/` to `/signup`
/// or `/dashboard`. Empty input means the dashboard.
pub fn normalize(fragment: &str) -> String {
    let path = fragment.trim().trim_start_matches('#');
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let path = path.trim_matches('/');

    if path.is_empty() {
        DASHBOARD_ROUTE.to_string()
    } else {
        format!("/{}", path.to_lowercase())
    }
}

/// Dashboard for a role; absent or unrecognized roles get the patient view
pub fn dashboard_for(role: Option<Role>) -> View {
    match role {
        Some(Role::Admin) => View::AdminDashboard,
        Some(Role::Doctor) => View::DoctorDashboard,
        Some(Role::Patient) | None => View::PatientDashboard,
    }
}

/// Select the view for `session` at `fragment`.
///
/// Without a session only the auth screens are reachable and anything else
/// lands on login. With a session every route shows the role's dashboard.
pub fn resolve(session: Option<&Session>, fragment: &str) -> View {
    let route = normalize(fragment);

    match session {
        None => match route.as_str() {
            SIGNUP_ROUTE => View::Signup,
            FORGOT_PASSWORD_ROUTE => View::ForgotPassword,
            _ => View::Login,
        },
        Some(session) => dashboard_for(session.role),
    }
}
