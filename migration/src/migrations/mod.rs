pub mod m202608270001_create_users;
pub mod m202608270002_create_subjects;
pub mod m202608270003_create_user_subjects;
pub mod m202608270004_create_check_sessions;
pub mod m202608270005_create_check_records;
