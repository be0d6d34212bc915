//! Mock CareLink API client for testing
//!
//! Implements every API trait in memory so session, dashboard and
//! optimistic-update logic can be tested without a server.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::api::{
    AppointmentApi, AuthApi, ChatApi, EarningsApi, FamilyApi, NotificationApi, PracticeApi,
};
use super::models::{
    Appointment, AppointmentStats, AppointmentStatus, AppointmentUpdate, ChatMessage,
    EarningsSummary, FamilyMember, LiveConsultation, LoginResponse, MessageResponse,
    NewAppointment, NewFamilyMember, Notification, OutgoingMessage, PatientRequest, Payment,
    PaymentQuery, PracticeRecords, RefreshResponse, RequestAction, RequestStatus, SignupRequest,
    UserProfile,
};
use crate::error::{ApiError, AuthError, Error, Result};

/// Mock API client for testing.
///
/// Configure responses with the builder methods, then hand it to the code
/// under test.
///
/// # Example
/// ```ignore
/// let mock = MockCareClient::new()
///     .with_login(login_response("doc1", Some("doctor")))
///     .fail_on("admin_past_appointments", 500, "boom");
/// ```
#[derive(Default)]
pub struct MockCareClient {
    login: Option<LoginResponse>,
    refreshed_token: Option<String>,
    profile: Option<UserProfile>,
    stats: AppointmentStats,
    admin_today: Vec<Appointment>,
    admin_upcoming: Vec<Appointment>,
    admin_past: Vec<Appointment>,
    summary: EarningsSummary,
    payments: Vec<Payment>,
    records: PracticeRecords,
    live: Option<LiveConsultation>,
    /// Operation name -> (status, detail) returned on every call
    failures: HashMap<&'static str, (u16, String)>,
    appointments: Arc<Mutex<Vec<Appointment>>>,
    notifications: Arc<Mutex<Vec<Notification>>>,
    family: Arc<Mutex<Vec<FamilyMember>>>,
    /// Requests with their current status; `None` counts as pending
    requests: Arc<Mutex<Vec<PatientRequest>>>,
    /// Chat threads keyed by patient id
    chats: Arc<Mutex<HashMap<i64, Vec<ChatMessage>>>>,
    calls: Arc<Mutex<CallCounts>>,
    tokens_seen: Arc<Mutex<Vec<String>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub login: usize,
    pub refresh: usize,
    pub admin: usize,
    pub appointments: usize,
    pub earnings: usize,
    pub notifications: usize,
    pub family: usize,
    pub practice: usize,
    pub chat: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.login
            + self.refresh
            + self.admin
            + self.appointments
            + self.earnings
            + self.notifications
            + self.family
            + self.practice
            + self.chat
    }
}

impl MockCareClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_login(mut self, response: LoginResponse) -> Self {
        self.login = Some(response);
        self
    }

    pub fn with_refreshed_token(mut self, token: impl Into<String>) -> Self {
        self.refreshed_token = Some(token.into());
        self
    }

    pub fn with_profile(mut self, profile: UserProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn with_stats(mut self, stats: AppointmentStats) -> Self {
        self.stats = stats;
        self
    }

    pub fn with_admin_today(mut self, appointments: Vec<Appointment>) -> Self {
        self.admin_today = appointments;
        self
    }

    pub fn with_admin_upcoming(mut self, appointments: Vec<Appointment>) -> Self {
        self.admin_upcoming = appointments;
        self
    }

    pub fn with_admin_past(mut self, appointments: Vec<Appointment>) -> Self {
        self.admin_past = appointments;
        self
    }

    pub fn with_summary(mut self, summary: EarningsSummary) -> Self {
        self.summary = summary;
        self
    }

    pub fn with_payments(mut self, payments: Vec<Payment>) -> Self {
        self.payments = payments;
        self
    }

    pub fn with_appointments(self, appointments: Vec<Appointment>) -> Self {
        *self.appointments.try_lock().expect("unshared mock") = appointments;
        self
    }

    pub fn with_notifications(self, notifications: Vec<Notification>) -> Self {
        *self.notifications.try_lock().expect("unshared mock") = notifications;
        self
    }

    pub fn with_family(self, members: Vec<FamilyMember>) -> Self {
        *self.family.try_lock().expect("unshared mock") = members;
        self
    }

    pub fn with_requests(self, requests: Vec<PatientRequest>) -> Self {
        *self.requests.try_lock().expect("unshared mock") = requests;
        self
    }

    pub fn with_records(mut self, records: PracticeRecords) -> Self {
        self.records = records;
        self
    }

    pub fn with_live(mut self, live: LiveConsultation) -> Self {
        self.live = Some(live);
        self
    }

    pub fn with_chat(self, patient_id: i64, messages: Vec<ChatMessage>) -> Self {
        self.chats
            .try_lock()
            .expect("unshared mock")
            .insert(patient_id, messages);
        self
    }

    /// Make `operation` fail with `status` and a `detail` message on every call
    pub fn fail_on(mut self, operation: &'static str, status: u16, detail: &str) -> Self {
        self.failures.insert(operation, (status, detail.to_string()));
        self
    }

    pub async fn call_counts(&self) -> CallCounts {
        self.calls.lock().await.clone()
    }

    /// Server-side notification state
    pub async fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().await.clone()
    }

    /// Server-side request queue
    pub async fn requests(&self) -> Vec<PatientRequest> {
        self.requests.lock().await.clone()
    }

    /// Server-side chat thread for `patient_id`
    pub async fn chat(&self, patient_id: i64) -> Vec<ChatMessage> {
        self.chats
            .lock()
            .await
            .get(&patient_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Bearer tokens received, in call order
    pub async fn tokens_seen(&self) -> Vec<String> {
        self.tokens_seen.lock().await.clone()
    }

    fn check(&self, operation: &str) -> std::result::Result<(), ApiError> {
        match self.failures.get(operation) {
            Some((status, message)) => Err(ApiError::Request {
                status: *status,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }

    fn check_auth(&self, operation: &str) -> Result<()> {
        self.check(operation).map_err(|err| match err {
            ApiError::Request { message, .. } => Error::from(AuthError::Rejected(message)),
            other => other.into(),
        })
    }

    async fn record(&self, token: &str, bump: impl FnOnce(&mut CallCounts)) {
        bump(&mut *self.calls.lock().await);
        self.tokens_seen.lock().await.push(token.to_string());
    }
}

#[async_trait]
impl AuthApi for MockCareClient {
    async fn login(&self, _username: &str, _password: &str) -> Result<LoginResponse> {
        self.calls.lock().await.login += 1;
        self.check_auth("login")?;
        self.login
            .clone()
            .ok_or_else(|| AuthError::Rejected("Invalid credentials".to_string()).into())
    }

    async fn signup(&self, request: &SignupRequest) -> Result<UserProfile> {
        self.check_auth("signup")?;
        Ok(UserProfile {
            id: 1,
            username: request.username.clone(),
            email: request.email.clone(),
            phone: request.phone.clone(),
            role: request.role.clone(),
        })
    }

    async fn verify_otp(&self, _email: &str, _otp: &str) -> Result<MessageResponse> {
        self.check_auth("verify_otp")?;
        Ok(MessageResponse::default())
    }

    async fn resend_otp(&self, _email: &str) -> Result<MessageResponse> {
        self.check_auth("resend_otp")?;
        Ok(MessageResponse::default())
    }

    async fn forgot_password(&self, _email: &str) -> Result<MessageResponse> {
        self.check_auth("forgot_password")?;
        Ok(MessageResponse::default())
    }

    async fn reset_password(&self, _token: &str, _new_password: &str) -> Result<MessageResponse> {
        self.check_auth("reset_password")?;
        Ok(MessageResponse::default())
    }

    async fn refresh(&self, refresh_token: &str) -> Result<RefreshResponse> {
        self.record(refresh_token, |c| c.refresh += 1).await;
        self.check_auth("refresh")?;
        Ok(RefreshResponse {
            access_token: self
                .refreshed_token
                .clone()
                .unwrap_or_else(|| "refreshed-access".to_string()),
            token_type: Some("bearer".to_string()),
        })
    }

    async fn me(&self, token: &str) -> Result<UserProfile> {
        self.record(token, |_| ()).await;
        self.check("me")?;
        self.profile.clone().ok_or_else(|| {
            ApiError::Request {
                status: 404,
                message: "User not found".to_string(),
            }
            .into()
        })
    }
}

#[async_trait]
impl AppointmentApi for MockCareClient {
    async fn create_appointment(
        &self,
        token: &str,
        request: &NewAppointment,
    ) -> Result<Appointment> {
        self.record(token, |c| c.appointments += 1).await;
        self.check("create_appointment")?;
        let mut appointments = self.appointments.lock().await;
        let appointment = Appointment {
            id: appointments.len() as i64 + 1,
            patient_id: Some(1),
            doctor_id: Some(request.doctor_id),
            patient_name: None,
            doctor_name: None,
            appointment_date: request.appointment_date,
            appointment_time: request.appointment_time.clone(),
            status: AppointmentStatus::Scheduled,
            reason: request.reason.clone(),
            created_at: None,
            updated_at: None,
        };
        appointments.push(appointment.clone());
        Ok(appointment)
    }

    async fn list_my_appointments(&self, token: &str) -> Result<Vec<Appointment>> {
        self.record(token, |c| c.appointments += 1).await;
        self.check("list_my_appointments")?;
        Ok(self.appointments.lock().await.clone())
    }

    async fn get_appointment(&self, token: &str, id: i64) -> Result<Appointment> {
        self.record(token, |c| c.appointments += 1).await;
        self.check("get_appointment")?;
        self.appointments
            .lock()
            .await
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| not_found("Appointment not found"))
    }

    async fn update_appointment(
        &self,
        token: &str,
        id: i64,
        update: &AppointmentUpdate,
    ) -> Result<Appointment> {
        self.record(token, |c| c.appointments += 1).await;
        self.check("update_appointment")?;
        let mut appointments = self.appointments.lock().await;
        let appointment = appointments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| not_found("Appointment not found"))?;
        appointment.status = update.status;
        if let Some(day) = update.appointment_date {
            appointment.appointment_date = day;
        }
        if let Some(ref time) = update.appointment_time {
            appointment.appointment_time = time.clone();
        }
        Ok(appointment.clone())
    }

    async fn cancel_appointment(&self, token: &str, id: i64) -> Result<MessageResponse> {
        self.record(token, |c| c.appointments += 1).await;
        self.check("cancel_appointment")?;
        let mut appointments = self.appointments.lock().await;
        let appointment = appointments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| not_found("Appointment not found"))?;
        appointment.status = AppointmentStatus::Cancelled;
        Ok(MessageResponse {
            message: Some("Appointment cancelled successfully".to_string()),
            ..Default::default()
        })
    }

    async fn admin_appointment_stats(&self, token: &str) -> Result<AppointmentStats> {
        self.record(token, |c| c.admin += 1).await;
        self.check("admin_appointment_stats")?;
        Ok(self.stats.clone())
    }

    async fn admin_today_appointments(&self, token: &str) -> Result<Vec<Appointment>> {
        self.record(token, |c| c.admin += 1).await;
        self.check("admin_today_appointments")?;
        Ok(self.admin_today.clone())
    }

    async fn admin_upcoming_appointments(&self, token: &str) -> Result<Vec<Appointment>> {
        self.record(token, |c| c.admin += 1).await;
        self.check("admin_upcoming_appointments")?;
        Ok(self.admin_upcoming.clone())
    }

    async fn admin_past_appointments(&self, token: &str) -> Result<Vec<Appointment>> {
        self.record(token, |c| c.admin += 1).await;
        self.check("admin_past_appointments")?;
        Ok(self.admin_past.clone())
    }
}

#[async_trait]
impl EarningsApi for MockCareClient {
    async fn earnings_summary(
        &self,
        token: &str,
        _query: &PaymentQuery,
    ) -> Result<EarningsSummary> {
        self.record(token, |c| c.earnings += 1).await;
        self.check("earnings_summary")?;
        Ok(self.summary.clone())
    }

    async fn payment_history(&self, token: &str, _query: &PaymentQuery) -> Result<Vec<Payment>> {
        self.record(token, |c| c.earnings += 1).await;
        self.check("payment_history")?;
        Ok(self.payments.clone())
    }
}

#[async_trait]
impl NotificationApi for MockCareClient {
    async fn list_notifications(&self, token: &str) -> Result<Vec<Notification>> {
        self.record(token, |c| c.notifications += 1).await;
        self.check("list_notifications")?;
        Ok(self.notifications.lock().await.clone())
    }

    async fn mark_notification_read(&self, token: &str, id: i64) -> Result<()> {
        self.record(token, |c| c.notifications += 1).await;
        self.check("mark_notification_read")?;
        let mut notifications = self.notifications.lock().await;
        if let Some(n) = notifications.iter_mut().find(|n| n.id == id) {
            n.is_read = true;
        }
        Ok(())
    }

    async fn mark_all_notifications_read(&self, token: &str) -> Result<()> {
        self.record(token, |c| c.notifications += 1).await;
        self.check("mark_all_notifications_read")?;
        for n in self.notifications.lock().await.iter_mut() {
            n.is_read = true;
        }
        Ok(())
    }
}

#[async_trait]
impl FamilyApi for MockCareClient {
    async fn list_family_members(&self, token: &str) -> Result<Vec<FamilyMember>> {
        self.record(token, |c| c.family += 1).await;
        self.check("list_family_members")?;
        Ok(self.family.lock().await.clone())
    }

    async fn add_family_member(
        &self,
        token: &str,
        member: &NewFamilyMember,
    ) -> Result<FamilyMember> {
        self.record(token, |c| c.family += 1).await;
        self.check("add_family_member")?;
        let mut family = self.family.lock().await;
        let created = FamilyMember {
            id: family.len() as i64 + 1,
            name: member.name.clone(),
            relation: member.relation.clone(),
            age: member.age,
            gender: member.gender.clone(),
        };
        family.push(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl PracticeApi for MockCareClient {
    async fn list_requests(
        &self,
        token: &str,
        status: RequestStatus,
    ) -> Result<Vec<PatientRequest>> {
        self.record(token, |c| c.practice += 1).await;
        self.check("list_requests")?;
        Ok(self
            .requests
            .lock()
            .await
            .iter()
            .filter(|r| r.status.as_deref().unwrap_or("pending") == status.as_str())
            .cloned()
            .collect())
    }

    async fn decide_request(
        &self,
        token: &str,
        id: i64,
        action: RequestAction,
    ) -> Result<MessageResponse> {
        self.record(token, |c| c.practice += 1).await;
        self.check("decide_request")?;
        let mut requests = self.requests.lock().await;
        let request = requests
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| not_found("Request not found"))?;
        let outcome = action.outcome();
        request.status = Some(outcome.as_str().to_string());
        Ok(MessageResponse {
            message: Some(format!("Request {} successfully", outcome)),
            ..Default::default()
        })
    }

    async fn practice_records(&self, token: &str) -> Result<PracticeRecords> {
        self.record(token, |c| c.practice += 1).await;
        self.check("practice_records")?;
        Ok(self.records.clone())
    }

    async fn live_consultation(&self, token: &str) -> Result<Option<LiveConsultation>> {
        self.record(token, |c| c.practice += 1).await;
        self.check("live_consultation")?;
        Ok(self.live.clone())
    }
}

#[async_trait]
impl ChatApi for MockCareClient {
    async fn chat_history(&self, token: &str, patient_id: i64) -> Result<Vec<ChatMessage>> {
        self.record(token, |c| c.chat += 1).await;
        self.check("chat_history")?;
        Ok(self.chat(patient_id).await)
    }

    async fn send_chat_message(
        &self,
        token: &str,
        message: &OutgoingMessage,
    ) -> Result<ChatMessage> {
        self.record(token, |c| c.chat += 1).await;
        self.check("send_chat_message")?;
        let mut chats = self.chats.lock().await;
        let next_id = chats.values().map(Vec::len).sum::<usize>() as i64 + 1;
        let stored = ChatMessage {
            id: next_id,
            sender: message.sender.as_str().to_string(),
            text: message.text.clone(),
            timestamp: None,
        };
        chats
            .entry(message.patient_id)
            .or_default()
            .push(stored.clone());
        Ok(stored)
    }
}

fn not_found(message: &str) -> Error {
    ApiError::Request {
        status: 404,
        message: message.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_me_returns_configured_profile() {
        let mock = MockCareClient::new().with_profile(UserProfile {
            id: 4,
            username: "pat".to_string(),
            email: "pat@care.test".to_string(),
            phone: None,
            role: "patient".to_string(),
        });

        let profile = mock.me("tok").await.unwrap();
        assert_eq!(profile.username, "pat");
        assert_eq!(mock.tokens_seen().await, vec!["tok".to_string()]);
    }

    #[tokio::test]
    async fn test_me_without_profile_is_not_found() {
        let err = MockCareClient::new().me("tok").await.unwrap_err();
        assert!(matches!(
            err,
            Error::Api(ApiError::Request { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn test_summary_and_failure_injection() {
        let mock = MockCareClient::new()
            .with_summary(EarningsSummary {
                total_amount: 4500,
                completed_count: 3,
                pending_count: 1,
            })
            .fail_on("payment_history", 503, "unavailable");

        let summary = mock
            .earnings_summary("tok", &PaymentQuery::default())
            .await
            .unwrap();
        assert_eq!(summary.total_amount, 4500);

        let err = mock
            .payment_history("tok", &PaymentQuery::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Request failed (503): unavailable");
        assert_eq!(mock.call_counts().await.earnings, 2);
    }

    #[tokio::test]
    async fn test_decided_request_leaves_pending_queue() {
        use crate::client::fixtures::patient_request;

        let mock = MockCareClient::new()
            .with_requests(vec![patient_request(1, "Asha"), patient_request(2, "Vikram")]);

        mock.decide_request("tok", 1, RequestAction::Approve)
            .await
            .unwrap();

        let pending = mock.list_requests("tok", RequestStatus::Pending).await.unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, 2);
        let approved = mock
            .list_requests("tok", RequestStatus::Approved)
            .await
            .unwrap();
        assert_eq!(approved[0].id, 1);
        assert_eq!(mock.call_counts().await.practice, 3);
    }
}
