//! Attendance session engine.
//!
//! Three pieces layered over the `check_sessions` / `check_records` tables:
//! resolving a session by its unique name, validating a submitted passcode
//! against the latest recorded check, and appending/removing/listing check
//! records.
//!
//! The authoritative passcode is whatever the most recent *recorded check*
//! carries, not the session's issued-passcode history. A session with no
//! recorded checks (or whose newest check has an empty passcode) accepts any
//! submission, which anchors the baseline for everyone after it. Two
//! concurrent first submissions can therefore both validate against the same
//! empty baseline; `CheckinMode::Strict` closes that window by running
//! resolve-validate-append in one transaction, `CheckinMode::Legacy` keeps
//! the historical behavior.

use chrono::Utc;
use db::models::{check_record, check_session};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait, TransactionError,
};
use thiserror::Error;

pub use db::models::check_record::Model as CheckRecord;
pub use db::models::check_session::Model as CheckSession;

#[derive(Debug, Error)]
pub enum AttendanceError {
    #[error("check session not found")]
    NotFound,
    #[error(transparent)]
    Store(#[from] DbErr),
}

/// Outcome of passcode validation, before anything is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    Accept,
    RejectClosed,
    RejectPasscodeMismatch,
}

/// Outcome of a full check-in attempt.
#[derive(Debug)]
pub enum CheckOutcome {
    Recorded(check_record::Model),
    Closed,
    PasscodeMismatch,
}

/// How the read-then-append sequence of a check-in is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckinMode {
    /// Resolve, validate, and append as separate store operations. Matches
    /// the legacy deployment, including its accepted read-then-write race.
    Legacy,
    /// Same steps inside a single transaction, so the passcode baseline a
    /// request validated against is the one it appends after.
    Strict,
}

impl CheckinMode {
    /// Reads the mode from `CHECKIN_MODE`. Anything other than `strict`
    /// falls back to legacy.
    pub fn from_config() -> Self {
        match util::config::checkin_mode().as_str() {
            "strict" => CheckinMode::Strict,
            _ => CheckinMode::Legacy,
        }
    }
}

pub struct AttendanceService;

impl AttendanceService {
    /// Loads the session uniquely identified by `name`. No side effects.
    pub async fn resolve_by_name<C>(
        conn: &C,
        name: &str,
    ) -> Result<check_session::Model, AttendanceError>
    where
        C: ConnectionTrait,
    {
        check_session::Entity::find()
            .filter(check_session::Column::Name.eq(name))
            .one(conn)
            .await?
            .ok_or(AttendanceError::NotFound)
    }

    /// Loads the session for an owning subject id, mirroring the
    /// `GET /check/{sid}` surface.
    pub async fn resolve_by_subject<C>(
        conn: &C,
        subject_id: &str,
    ) -> Result<check_session::Model, AttendanceError>
    where
        C: ConnectionTrait,
    {
        check_session::Entity::find()
            .filter(check_session::Column::SubjectId.eq(subject_id))
            .one(conn)
            .await?
            .ok_or(AttendanceError::NotFound)
    }

    /// The most recently appended check for a session, if any.
    pub async fn latest_check<C>(
        conn: &C,
        session_id: i64,
    ) -> Result<Option<check_record::Model>, AttendanceError>
    where
        C: ConnectionTrait,
    {
        let latest = check_record::Entity::find()
            .filter(check_record::Column::SessionId.eq(session_id))
            .order_by_desc(check_record::Column::Id)
            .one(conn)
            .await?;
        Ok(latest)
    }

    /// Pure gate: closed-session check first, then an exact string compare
    /// against the latest recorded passcode when one exists.
    pub fn validate(
        session: &check_session::Model,
        latest_check: Option<&check_record::Model>,
        submitted: &str,
    ) -> Validation {
        if !session.status.is_open() {
            return Validation::RejectClosed;
        }

        if let Some(latest) = latest_check {
            if !latest.submitted_passcode.is_empty() && latest.submitted_passcode != submitted {
                return Validation::RejectPasscodeMismatch;
            }
        }

        Validation::Accept
    }

    /// Runs a full check-in: resolve the session by name, validate the
    /// submitted passcode, and append a record stamped with the current
    /// instant.
    pub async fn check_in(
        db: &DatabaseConnection,
        mode: CheckinMode,
        session_name: &str,
        student_id: &str,
        passcode: &str,
    ) -> Result<CheckOutcome, AttendanceError> {
        match mode {
            CheckinMode::Legacy => {
                Self::check_in_with(db, session_name, student_id, passcode).await
            }
            CheckinMode::Strict => {
                let name = session_name.to_owned();
                let student = student_id.to_owned();
                let code = passcode.to_owned();
                db.transaction::<_, CheckOutcome, AttendanceError>(move |txn| {
                    Box::pin(
                        async move { Self::check_in_with(txn, &name, &student, &code).await },
                    )
                })
                .await
                .map_err(|err| match err {
                    TransactionError::Connection(db_err) => AttendanceError::Store(db_err),
                    TransactionError::Transaction(app_err) => app_err,
                })
            }
        }
    }

    async fn check_in_with<C>(
        conn: &C,
        session_name: &str,
        student_id: &str,
        passcode: &str,
    ) -> Result<CheckOutcome, AttendanceError>
    where
        C: ConnectionTrait,
    {
        let session = Self::resolve_by_name(conn, session_name).await?;
        let latest = Self::latest_check(conn, session.id).await?;

        match Self::validate(&session, latest.as_ref(), passcode) {
            Validation::RejectClosed => {
                tracing::info!(session = %session.name, student = %student_id, "check-in rejected: session closed");
                return Ok(CheckOutcome::Closed);
            }
            Validation::RejectPasscodeMismatch => {
                tracing::info!(session = %session.name, student = %student_id, "check-in rejected: passcode mismatch");
                return Ok(CheckOutcome::PasscodeMismatch);
            }
            Validation::Accept => {}
        }

        let record = check_record::ActiveModel {
            session_id: Set(session.id),
            student_id: Set(student_id.to_owned()),
            submitted_passcode: Set(passcode.to_owned()),
            submitted_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(conn)
        .await?;

        tracing::info!(session = %session.name, student = %student_id, "check recorded");
        Ok(CheckOutcome::Recorded(record))
    }

    /// Removes every check record for `student_id` in the named session.
    /// Zero matches is a success no-op; only a missing session is an error.
    pub async fn remove_student<C>(
        conn: &C,
        session_name: &str,
        student_id: &str,
    ) -> Result<u64, AttendanceError>
    where
        C: ConnectionTrait,
    {
        let session = Self::resolve_by_name(conn, session_name).await?;

        let res = check_record::Entity::delete_many()
            .filter(check_record::Column::SessionId.eq(session.id))
            .filter(check_record::Column::StudentId.eq(student_id))
            .exec(conn)
            .await?;

        Ok(res.rows_affected)
    }

    /// Full check sequence for the named session, in append order.
    pub async fn list_checks<C>(
        conn: &C,
        session_name: &str,
    ) -> Result<Vec<check_record::Model>, AttendanceError>
    where
        C: ConnectionTrait,
    {
        let session = Self::resolve_by_name(conn, session_name).await?;

        let checks = check_record::Entity::find()
            .filter(check_record::Column::SessionId.eq(session.id))
            .order_by_asc(check_record::Column::Id)
            .all(conn)
            .await?;
        Ok(checks)
    }
}
