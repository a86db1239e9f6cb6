use chrono::{DateTime, SecondsFormat, Utc};
use util::format;
use db::models::{check_record, check_session, check_session::SessionStatus};
use serde::{Deserialize, Serialize};

/// One check record as returned to callers. `submitted_at` is rendered in
/// the UTC+7 display zone.
#[derive(Debug, Serialize)]
pub struct CheckRecordResponse {
    pub student_id: String,
    pub submitted_passcode: String,
    pub submitted_at: String,
}

impl From<check_record::Model> for CheckRecordResponse {
    fn from(m: check_record::Model) -> Self {
        Self {
            student_id: m.student_id,
            submitted_passcode: m.submitted_passcode,
            submitted_at: format::to_display_rfc3339(m.submitted_at),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CheckSessionResponse {
    pub sid: String,
    pub name: String,
    pub date: String,
    pub status: SessionStatus,
    pub section: String,
    pub passcodes: Vec<String>,
    pub checks: Vec<CheckRecordResponse>,
}

impl CheckSessionResponse {
    pub fn from_session(m: check_session::Model, checks: Vec<check_record::Model>) -> Self {
        let passcodes = m.passcode_history();
        Self {
            sid: m.subject_id,
            name: m.name,
            date: m.date.to_rfc3339_opts(SecondsFormat::Secs, true),
            status: m.status,
            section: m.section,
            passcodes,
            checks: checks.into_iter().map(CheckRecordResponse::from).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateCheckSessionReq {
    pub sid: String,
    pub name: String,
    pub date: Option<DateTime<Utc>>,
    pub status: Option<SessionStatus>,
    pub section: Option<String>,
    // The legacy clients send "passcode" for the issued-passcode history.
    #[serde(default, alias = "passcode")]
    pub passcodes: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct CheckInReq {
    // Field aliases accept the legacy wire names.
    #[serde(alias = "std")]
    pub student_id: String,
    #[serde(default, alias = "passcodecheck")]
    pub submitted_passcode: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusReq {
    pub status: SessionStatus,
}
