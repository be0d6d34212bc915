//! Family member API trait

use async_trait::async_trait;

use crate::client::models::{FamilyMember, NewFamilyMember};
use crate::error::Result;

/// Patient family member operations
#[async_trait]
pub trait FamilyApi: Send + Sync {
    async fn list_family_members(&self, token: &str) -> Result<Vec<FamilyMember>>;

    async fn add_family_member(&self, token: &str, member: &NewFamilyMember)
    -> Result<FamilyMember>;
}
