use sea_orm::entity::prelude::*;
use serde::Serialize;
use strum::EnumIter;

/// A subject offering. `sections` is the ordered list of section labels,
/// stored as a JSON array.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "subjects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub term: String,
    pub year: String,
    pub image: String,
    pub sections: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn section_labels(&self) -> Vec<String> {
        serde_json::from_value(self.sections.clone()).unwrap_or_default()
    }
}
