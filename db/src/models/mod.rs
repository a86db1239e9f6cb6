pub mod check_record;
pub mod check_session;
pub mod subject;
pub mod user;
pub mod user_subject;
