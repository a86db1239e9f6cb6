use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Open/closed gate controlling whether a session accepts new check-ins.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    #[sea_orm(string_value = "open")]
    Open,
    #[sea_orm(string_value = "closed")]
    Closed,
}

impl Default for SessionStatus {
    fn default() -> Self {
        SessionStatus::Open
    }
}

impl SessionStatus {
    #[inline]
    pub fn is_open(&self) -> bool {
        matches!(self, SessionStatus::Open)
    }
}

/// One attendance-taking event ("checkname") for a subject section.
///
/// `name` is the unique human-readable key every check-in and closure
/// operation resolves through. `passcodes` keeps the ordered history of
/// issued passcodes; validation deliberately works off the latest *recorded
/// check* instead (see `services::attendance`).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "check_sessions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub subject_id: String,
    #[sea_orm(unique)]
    pub name: String,
    pub date: DateTime<Utc>,
    pub status: SessionStatus,
    pub section: String,
    pub passcodes: Json,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::check_record::Entity")]
    Checks,
}

impl Related<super::check_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Checks.def()
    }
    fn via() -> Option<RelationDef> {
        None
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Ordered passcode history as plain strings.
    pub fn passcode_history(&self) -> Vec<String> {
        serde_json::from_value(self.passcodes.clone()).unwrap_or_default()
    }
}
