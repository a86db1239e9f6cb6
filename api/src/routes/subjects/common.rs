use db::models::subject;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct SubjectResponse {
    pub id: String,
    pub name: String,
    pub term: String,
    pub year: String,
    pub image: String,
    pub sections: Vec<String>,
}

impl From<subject::Model> for SubjectResponse {
    fn from(m: subject::Model) -> Self {
        let sections = m.section_labels();
        Self {
            id: m.id,
            name: m.name,
            term: m.term,
            year: m.year,
            image: m.image,
            sections,
        }
    }
}

/// The legacy wire name for the section list is `section`.
#[derive(Debug, Deserialize)]
pub struct CreateSubjectReq {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub term: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, alias = "section")]
    pub sections: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSubjectReq {
    pub name: Option<String>,
    pub term: Option<String>,
    pub year: Option<String>,
    pub image: Option<String>,
    #[serde(alias = "section")]
    pub sections: Option<Vec<String>>,
}
