use db::models::{user, user_subject};
use serde::{Deserialize, Serialize};

/// One subject enrollment as carried on a user payload. The legacy wire
/// name for the enrollment kind is `type`.
#[derive(Debug, Serialize, Deserialize)]
pub struct EnrollmentPayload {
    pub id: String,
    #[serde(default)]
    pub section: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub image: String,
}

impl From<user_subject::Model> for EnrollmentPayload {
    fn from(m: user_subject::Model) -> Self {
        Self {
            id: m.subject_id,
            section: m.section,
            kind: m.kind,
            image: m.image,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subjects: Vec<EnrollmentPayload>,
}

impl UserResponse {
    pub fn from_user(m: user::Model, enrollments: Vec<user_subject::Model>) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
            subjects: enrollments.into_iter().map(EnrollmentPayload::from).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateUserReq {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, alias = "subject")]
    pub subjects: Vec<EnrollmentPayload>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserReq {
    pub name: Option<String>,
    pub email: Option<String>,
}
