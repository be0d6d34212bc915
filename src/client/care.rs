//! CareLink API client implementation

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as HttpClient, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::api::{
    AppointmentApi, AuthApi, ChatApi, EarningsApi, FamilyApi, NotificationApi, PracticeApi,
};
use super::models::{
    Appointment, AppointmentStats, AppointmentUpdate, ChatMessage, EarningsSummary, FamilyMember,
    LiveConsultation, LoginResponse, MessageResponse, NewAppointment, NewFamilyMember,
    Notification, OutgoingMessage, PatientRequest, Payment, PaymentQuery, PracticeRecords,
    RefreshResponse, RequestAction, RequestStatus, SignupRequest, UserProfile,
};
use crate::error::{ApiError, AuthError, Error, Result};

/// HTTP client for the CareLink backend.
///
/// Stateless apart from the base URL: every call issues exactly one request,
/// never retries and never caches.
#[derive(Debug, Clone)]
pub struct CareClient {
    http: HttpClient,
    base_url: String,
}

/// Error body shape used by the backend: `{"detail": "..."}` or a
/// validation list `{"detail": [{"msg": "..."}]}`
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

/// Pull a human-readable message out of an error body, if there is one
pub(crate) fn extract_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        serde_json::Value::String(s) if !s.is_empty() => Some(s),
        serde_json::Value::Array(items) => {
            let msgs: Vec<String> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .map(str::to_string)
                .collect();
            if msgs.is_empty() {
                None
            } else {
                Some(msgs.join("; "))
            }
        }
        _ => None,
    }
}

/// Rejections from auth endpoints surface as [`AuthError`]; network
/// failures keep their own category.
fn auth_rejection(err: ApiError) -> Error {
    match err {
        ApiError::Request { message, .. } => AuthError::Rejected(message).into(),
        other => other.into(),
    }
}

impl CareClient {
    /// Create a client for the backend at `base_url`
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);
        self.http.request(method, url)
    }

    fn authed(&self, method: Method, path: &str, token: &str) -> RequestBuilder {
        self.request(method, path).bearer_auth(token)
    }

    /// Send a request and turn any non-2xx answer into [`ApiError::Request`]
    async fn execute(
        &self,
        request: RequestBuilder,
        fallback: &str,
    ) -> std::result::Result<Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        debug!("Request rejected with {}: {}", status, body);
        Err(ApiError::Request {
            status: status.as_u16(),
            message: extract_detail(&body).unwrap_or_else(|| fallback.to_string()),
        })
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> std::result::Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {}", e)))
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder, fallback: &str) -> Result<T> {
        let response = self.execute(request, fallback).await?;
        Ok(Self::parse(response).await?)
    }

    async fn fetch_auth<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        fallback: &str,
    ) -> Result<T> {
        let response = self.execute(request, fallback).await.map_err(auth_rejection)?;
        Ok(Self::parse(response).await?)
    }
}

#[derive(Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct OtpBody<'a> {
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    otp: Option<&'a str>,
}

#[async_trait]
impl AuthApi for CareClient {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let request = self
            .request(Method::POST, "/auth/login")
            .json(&Credentials { username, password });
        self.fetch_auth(request, "Login failed").await
    }

    async fn signup(&self, request: &SignupRequest) -> Result<UserProfile> {
        let request = self.request(Method::POST, "/auth/signup").json(request);
        self.fetch_auth(request, "Signup failed").await
    }

    async fn verify_otp(&self, email: &str, otp: &str) -> Result<MessageResponse> {
        let request = self.request(Method::POST, "/auth/verify-otp").json(&OtpBody {
            email,
            otp: Some(otp),
        });
        self.fetch_auth(request, "Invalid OTP").await
    }

    async fn resend_otp(&self, email: &str) -> Result<MessageResponse> {
        let request = self
            .request(Method::POST, "/auth/resend-otp")
            .json(&OtpBody { email, otp: None });
        self.fetch_auth(request, "Failed to resend code").await
    }

    async fn forgot_password(&self, email: &str) -> Result<MessageResponse> {
        let request = self
            .request(Method::POST, "/auth/forgot-password")
            .query(&[("email", email)]);
        self.fetch_auth(request, "Failed to request password reset")
            .await
    }

    async fn reset_password(&self, token: &str, new_password: &str) -> Result<MessageResponse> {
        let request = self
            .request(Method::POST, "/auth/reset-password")
            .query(&[("token", token), ("new_password", new_password)]);
        self.fetch_auth(request, "Failed to reset password").await
    }

    async fn refresh(&self, refresh_token: &str) -> Result<RefreshResponse> {
        let request = self
            .request(Method::POST, "/auth/refresh")
            .query(&[("token", refresh_token)]);
        self.fetch_auth(request, "Failed to refresh session").await
    }

    async fn me(&self, token: &str) -> Result<UserProfile> {
        let request = self.authed(Method::GET, "/auth/me", token);
        self.fetch(request, "Failed to fetch profile").await
    }
}

#[async_trait]
impl AppointmentApi for CareClient {
    async fn create_appointment(
        &self,
        token: &str,
        request: &NewAppointment,
    ) -> Result<Appointment> {
        let request = self
            .authed(Method::POST, "/api/appointments", token)
            .json(request);
        self.fetch(request, "Failed to create appointment").await
    }

    async fn list_my_appointments(&self, token: &str) -> Result<Vec<Appointment>> {
        let request = self.authed(Method::GET, "/api/appointments", token);
        self.fetch(request, "Failed to fetch appointments").await
    }

    async fn get_appointment(&self, token: &str, id: i64) -> Result<Appointment> {
        let path = format!("/api/appointments/{}", id);
        let request = self.authed(Method::GET, &path, token);
        self.fetch(request, "Failed to fetch appointment").await
    }

    async fn update_appointment(
        &self,
        token: &str,
        id: i64,
        update: &AppointmentUpdate,
    ) -> Result<Appointment> {
        let path = format!("/api/appointments/{}", id);
        let request = self.authed(Method::PATCH, &path, token).json(update);
        self.fetch(request, "Failed to update appointment").await
    }

    async fn cancel_appointment(&self, token: &str, id: i64) -> Result<MessageResponse> {
        let path = format!("/api/appointments/{}", id);
        let request = self.authed(Method::DELETE, &path, token);
        self.fetch(request, "Failed to cancel appointment").await
    }

    async fn admin_appointment_stats(&self, token: &str) -> Result<AppointmentStats> {
        let request = self.authed(Method::GET, "/api/admin/appointments/stats", token);
        self.fetch(request, "Failed to fetch appointment stats").await
    }

    async fn admin_today_appointments(&self, token: &str) -> Result<Vec<Appointment>> {
        let request = self.authed(Method::GET, "/api/admin/appointments/today", token);
        self.fetch(request, "Failed to fetch today's appointments")
            .await
    }

    async fn admin_upcoming_appointments(&self, token: &str) -> Result<Vec<Appointment>> {
        let request = self.authed(Method::GET, "/api/admin/appointments/upcoming", token);
        self.fetch(request, "Failed to fetch upcoming appointments")
            .await
    }

    async fn admin_past_appointments(&self, token: &str) -> Result<Vec<Appointment>> {
        let request = self.authed(Method::GET, "/api/admin/appointments/past", token);
        self.fetch(request, "Failed to fetch past appointments").await
    }
}

#[async_trait]
impl EarningsApi for CareClient {
    async fn earnings_summary(
        &self,
        token: &str,
        query: &PaymentQuery,
    ) -> Result<EarningsSummary> {
        let request = self
            .authed(Method::GET, "/api/doctor/earnings/summary", token)
            .query(&query.to_query());
        self.fetch(request, "Failed to fetch earnings summary").await
    }

    async fn payment_history(&self, token: &str, query: &PaymentQuery) -> Result<Vec<Payment>> {
        let request = self
            .authed(Method::GET, "/api/doctor/earnings/payments", token)
            .query(&query.to_query());
        self.fetch(request, "Failed to fetch payment history").await
    }
}

#[async_trait]
impl NotificationApi for CareClient {
    async fn list_notifications(&self, token: &str) -> Result<Vec<Notification>> {
        let request = self.authed(Method::GET, "/api/doctor/notifications", token);
        self.fetch(request, "Failed to fetch notifications").await
    }

    async fn mark_notification_read(&self, token: &str, id: i64) -> Result<()> {
        let path = format!("/api/doctor/notifications/{}/read", id);
        let request = self.authed(Method::PATCH, &path, token);
        self.execute(request, "Failed to mark notification read")
            .await?;
        Ok(())
    }

    async fn mark_all_notifications_read(&self, token: &str) -> Result<()> {
        let request = self.authed(Method::PATCH, "/api/doctor/notifications/read-all", token);
        self.execute(request, "Failed to mark all notifications read")
            .await?;
        Ok(())
    }
}

#[async_trait]
impl FamilyApi for CareClient {
    async fn list_family_members(&self, token: &str) -> Result<Vec<FamilyMember>> {
        let request = self.authed(Method::GET, "/api/family-member", token);
        self.fetch(request, "Failed to fetch family members").await
    }

    async fn add_family_member(
        &self,
        token: &str,
        member: &NewFamilyMember,
    ) -> Result<FamilyMember> {
        let request = self
            .authed(Method::POST, "/api/family-member", token)
            .json(member);
        self.fetch(request, "Failed to add member").await
    }
}

/// `{"active": false}` when idle, otherwise the session fields alongside
/// `"active": true`
#[derive(Deserialize)]
struct LiveStatus {
    #[serde(default)]
    active: bool,

    #[serde(flatten)]
    consultation: LiveConsultation,
}

#[async_trait]
impl PracticeApi for CareClient {
    async fn list_requests(
        &self,
        token: &str,
        status: RequestStatus,
    ) -> Result<Vec<PatientRequest>> {
        let request = self
            .authed(Method::GET, "/api/appointments/requests", token)
            .query(&[("status", status.as_str())]);
        self.fetch(request, "Failed to fetch requests").await
    }

    async fn decide_request(
        &self,
        token: &str,
        id: i64,
        action: RequestAction,
    ) -> Result<MessageResponse> {
        let path = format!("/api/requests/{}/{}", id, action.as_str());
        let request = self.authed(Method::POST, &path, token);
        self.fetch(request, &format!("Failed to {} request", action.as_str()))
            .await
    }

    async fn practice_records(&self, token: &str) -> Result<PracticeRecords> {
        let request = self.authed(Method::GET, "/api/all-records", token);
        self.fetch(request, "Failed to fetch records").await
    }

    async fn live_consultation(&self, token: &str) -> Result<Option<LiveConsultation>> {
        let request = self.authed(Method::GET, "/api/consultation/live", token);
        let status: LiveStatus = self
            .fetch(request, "Failed to fetch live consultation")
            .await?;
        Ok(status.active.then_some(status.consultation))
    }
}

#[async_trait]
impl ChatApi for CareClient {
    async fn chat_history(&self, token: &str, patient_id: i64) -> Result<Vec<ChatMessage>> {
        let path = format!("/api/chat/history/{}", patient_id);
        let request = self.authed(Method::GET, &path, token);
        self.fetch(request, "Failed to fetch chat history").await
    }

    async fn send_chat_message(
        &self,
        token: &str,
        message: &OutgoingMessage,
    ) -> Result<ChatMessage> {
        let request = self
            .authed(Method::POST, "/api/chat/send", token)
            .json(message);
        self.fetch(request, "Message failed to send").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    #[test]
    fn test_client_creation_trims_trailing_slash() {
        let client = CareClient::new("http://localhost:8000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_extract_detail_string() {
        assert_eq!(
            extract_detail(r#"{"detail":"Invalid credentials"}"#).as_deref(),
            Some("Invalid credentials")
        );
    }

    #[test]
    fn test_extract_detail_validation_list() {
        let body = r#"{"detail":[{"loc":["body","email"],"msg":"field required"},{"msg":"bad age"}]}"#;
        assert_eq!(
            extract_detail(body).as_deref(),
            Some("field required; bad age")
        );
    }

    #[test]
    fn test_extract_detail_missing_or_garbage() {
        assert!(extract_detail("{}").is_none());
        assert!(extract_detail("<html>502</html>").is_none());
        assert!(extract_detail(r#"{"detail":""}"#).is_none());
    }

    #[tokio::test]
    async fn test_login_posts_credentials() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/auth/login")
            .match_body(Matcher::Json(json!({"username": "doc1", "password": "x"})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"access_token":"acc","refresh_token":"ref","token_type":"bearer",
                    "user":{"id":1,"username":"doc1","email":"doc1@care.io","role":"doctor"}}"#,
            )
            .create_async()
            .await;

        let client = CareClient::new(server.url()).unwrap();
        let resp = client.login("doc1", "x").await.unwrap();

        mock.assert_async().await;
        assert_eq!(resp.access_token, "acc");
        assert_eq!(resp.user.unwrap().role.as_deref(), Some("doctor"));
    }

    #[tokio::test]
    async fn test_login_failure_uses_detail() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/auth/login")
            .with_status(401)
            .with_body(r#"{"detail":"Invalid credentials"}"#)
            .create_async()
            .await;

        let client = CareClient::new(server.url()).unwrap();
        let err = client.login("doc1", "wrong").await.unwrap_err();

        match err {
            Error::Auth(AuthError::Rejected(msg)) => assert_eq!(msg, "Invalid credentials"),
            other => panic!("Expected AuthError::Rejected, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_login_failure_without_detail_defaults() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/auth/login")
            .with_status(500)
            .with_body("Internal Server Error")
            .create_async()
            .await;

        let client = CareClient::new(server.url()).unwrap();
        let err = client.login("doc1", "x").await.unwrap_err();
        assert_eq!(err.to_string(), "Login failed");
    }

    #[tokio::test]
    async fn test_refresh_sends_token_as_query() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/auth/refresh")
            .match_query(Matcher::UrlEncoded("token".into(), "ref".into()))
            .with_status(200)
            .with_body(r#"{"access_token":"new-acc","token_type":"bearer"}"#)
            .create_async()
            .await;

        let client = CareClient::new(server.url()).unwrap();
        let resp = client.refresh("ref").await.unwrap();

        mock.assert_async().await;
        assert_eq!(resp.access_token, "new-acc");
    }

    #[tokio::test]
    async fn test_resource_calls_attach_bearer_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/doctor/notifications")
            .match_header("authorization", "Bearer tok")
            .with_status(200)
            .with_body(
                r#"[{"id":1,"type":"appointment","message":"New booking","redirect_to":null,
                     "is_read":false,"created_at":"2025-03-01T10:00:00"}]"#,
            )
            .create_async()
            .await;

        let client = CareClient::new(server.url()).unwrap();
        let notifications = client.list_notifications("tok").await.unwrap();

        mock.assert_async().await;
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].kind, "appointment");
        assert!(!notifications[0].is_read);
    }

    #[tokio::test]
    async fn test_non_2xx_becomes_request_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/admin/appointments/stats")
            .with_status(403)
            .with_body(r#"{"detail":"Admin access required"}"#)
            .create_async()
            .await;

        let client = CareClient::new(server.url()).unwrap();
        let err = client.admin_appointment_stats("tok").await.unwrap_err();

        match err {
            Error::Api(ApiError::Request { status, message }) => {
                assert_eq!(status, 403);
                assert_eq!(message, "Admin access required");
            }
            other => panic!("Expected ApiError::Request, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unauthorized_is_not_special_cased() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/appointments")
            .with_status(401)
            .with_body(r#"{"detail":"Invalid or expired token"}"#)
            .expect(1)
            .create_async()
            .await;

        let client = CareClient::new(server.url()).unwrap();
        let err = client.list_my_appointments("stale").await.unwrap_err();

        mock.assert_async().await;
        assert!(matches!(
            err,
            Error::Api(ApiError::Request { status: 401, .. })
        ));
    }

    #[tokio::test]
    async fn test_payment_history_forwards_date_window() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/doctor/earnings/payments")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("from_date".into(), "2025-03-01".into()),
                Matcher::UrlEncoded("to_date".into(), "2025-03-31".into()),
            ]))
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let client = CareClient::new(server.url()).unwrap();
        let today = chrono::NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();
        let payments = client
            .payment_history("tok", &PaymentQuery::last_days(today, 30))
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(payments.is_empty());
    }

    #[tokio::test]
    async fn test_mark_read_ignores_response_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PATCH", "/api/doctor/notifications/9/read")
            .with_status(204)
            .create_async()
            .await;

        let client = CareClient::new(server.url()).unwrap();
        client.mark_notification_read("tok", 9).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_invalid_json_is_invalid_response() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/family-member")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let client = CareClient::new(server.url()).unwrap();
        let err = client.list_family_members("tok").await.unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_list_requests_sends_status_filter() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/appointments/requests")
            .match_query(Matcher::UrlEncoded("status".into(), "pending".into()))
            .match_header("authorization", "Bearer tok")
            .with_status(200)
            .with_body(r#"[{"id":5,"patient_name":"Asha","issue":"Rash","time":"12:15 PM"}]"#)
            .create_async()
            .await;

        let client = CareClient::new(server.url()).unwrap();
        let requests = client
            .list_requests("tok", RequestStatus::Pending)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].patient_name.as_deref(), Some("Asha"));
    }

    #[tokio::test]
    async fn test_decide_request_posts_action_segment() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/requests/5/reject")
            .with_status(200)
            .with_body(r#"{"message":"Request rejected successfully"}"#)
            .create_async()
            .await;

        let client = CareClient::new(server.url()).unwrap();
        let resp = client
            .decide_request("tok", 5, RequestAction::Reject)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(resp.message.as_deref(), Some("Request rejected successfully"));
    }

    #[tokio::test]
    async fn test_decide_unknown_request_reports_detail() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/requests/99/approve")
            .with_status(404)
            .with_body(r#"{"detail":"Request not found"}"#)
            .create_async()
            .await;

        let client = CareClient::new(server.url()).unwrap();
        let err = client
            .decide_request("tok", 99, RequestAction::Approve)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Request failed (404): Request not found");
    }

    #[tokio::test]
    async fn test_live_consultation_active_and_idle() {
        let mut server = mockito::Server::new_async().await;
        let active = server
            .mock("GET", "/api/consultation/live")
            .with_status(200)
            .with_body(
                r#"{"active":true,"patient_name":"Rahul Sharma","type":"Follow-up",
                    "tags":["Migraine History"],"timer_start":"2025-03-14T10:00:00"}"#,
            )
            .create_async()
            .await;

        let client = CareClient::new(server.url()).unwrap();
        let live = client.live_consultation("tok").await.unwrap().unwrap();
        active.assert_async().await;
        assert_eq!(live.patient_name, "Rahul Sharma");
        assert_eq!(live.kind.as_deref(), Some("Follow-up"));
        assert_eq!(live.tags, vec!["Migraine History".to_string()]);

        active.remove_async().await;
        server
            .mock("GET", "/api/consultation/live")
            .with_status(200)
            .with_body(r#"{"active":false}"#)
            .create_async()
            .await;
        assert!(client.live_consultation("tok").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_send_chat_message_posts_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/chat/send")
            .match_body(Matcher::Json(json!({
                "patientId": 101,
                "sender": "doctor",
                "text": "How is the headache?"
            })))
            .with_status(200)
            .with_body(r#"{"id":12,"sender":"doctor","text":"How is the headache?","timestamp":null}"#)
            .create_async()
            .await;

        let client = CareClient::new(server.url()).unwrap();
        let sent = client
            .send_chat_message(
                "tok",
                &OutgoingMessage {
                    patient_id: 101,
                    sender: crate::client::models::ChatSender::Doctor,
                    text: "How is the headache?".to_string(),
                },
            )
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(sent.id, 12);
        assert!(sent.timestamp.is_none());
    }

    #[tokio::test]
    async fn test_connection_failure_is_network_error() {
        // Port 9 (discard) is almost never listening locally
        let client = CareClient::new("http://127.0.0.1:9").unwrap();
        let err = client.list_notifications("tok").await.unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::Network(_))));
    }
}
