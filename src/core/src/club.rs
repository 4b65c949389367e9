use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Club {
    pub id: u32,
    pub name: String,
    pub description: Option<String>,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub manager_id: u32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewClub {
    pub name: String,
    pub description: Option<String>,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub manager_id: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClubChanges {
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<Option<String>>,
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<Option<String>>,
}
