//! Earnings API trait

use async_trait::async_trait;

use crate::client::models::{EarningsSummary, Payment, PaymentQuery};
use crate::error::Result;

/// Doctor earnings operations
#[async_trait]
pub trait EarningsApi: Send + Sync {
    /// Totals over the optional date window
    async fn earnings_summary(&self, token: &str, query: &PaymentQuery)
    -> Result<EarningsSummary>;

    /// Individual payments over the optional date window
    async fn payment_history(&self, token: &str, query: &PaymentQuery) -> Result<Vec<Payment>>;
}
