//! Doctor practice API trait

use async_trait::async_trait;

use crate::client::models::{
    LiveConsultation, MessageResponse, PatientRequest, PracticeRecords, RequestAction,
    RequestStatus,
};
use crate::error::Result;

/// Request queue, schedule records and live consultation of a doctor
#[async_trait]
pub trait PracticeApi: Send + Sync {
    /// `GET /api/appointments/requests?status=`
    async fn list_requests(
        &self,
        token: &str,
        status: RequestStatus,
    ) -> Result<Vec<PatientRequest>>;

    /// Approve or reject a pending request
    async fn decide_request(
        &self,
        token: &str,
        id: i64,
        action: RequestAction,
    ) -> Result<MessageResponse>;

    /// Every schedule entry plus the requests already decided
    async fn practice_records(&self, token: &str) -> Result<PracticeRecords>;

    /// The consultation in progress, if any
    async fn live_consultation(&self, token: &str) -> Result<Option<LiveConsultation>>;
}
