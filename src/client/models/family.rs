//! Family member models

use serde::{Deserialize, Serialize};

/// Family member attached to the logged-in patient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FamilyMember {
    pub id: i64,
    pub name: String,
    pub relation: String,
    pub age: u32,
    pub gender: String,
}

/// Payload for `POST /api/family-member`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFamilyMember {
    pub name: String,
    pub relation: String,
    pub age: u32,
    pub gender: String,
}
