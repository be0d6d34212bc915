//! Family member display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::FamilyMember;

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct FamilyDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "RELATION")]
    pub relation: String,

    #[tabled(rename = "AGE")]
    pub age: u32,

    #[tabled(rename = "GENDER")]
    pub gender: String,
}

impl From<FamilyMember> for FamilyDisplay {
    fn from(m: FamilyMember) -> Self {
        Self {
            id: m.id,
            name: m.name,
            relation: m.relation,
            age: m.age,
            gender: m.gender,
        }
    }
}
