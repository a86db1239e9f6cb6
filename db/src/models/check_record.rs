use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::Serialize;
use strum::EnumIter;

/// One student's attendance submission within a check session.
///
/// Rows are append-only; the autoincrement `id` carries the append order.
/// `submitted_at` is an absolute UTC instant, shifted to the display zone
/// only when formatted for a response.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "check_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub session_id: i64,
    pub student_id: String,
    pub submitted_passcode: String,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::check_session::Entity",
        from = "Column::SessionId",
        to = "super::check_session::Column::Id"
    )]
    Session,
}

impl Related<super::check_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Session.def()
    }
    fn via() -> Option<RelationDef> {
        None
    }
}

impl ActiveModelBehavior for ActiveModel {}
