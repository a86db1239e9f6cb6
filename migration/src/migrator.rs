use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202608270001_create_users::Migration),
            Box::new(migrations::m202608270002_create_subjects::Migration),
            Box::new(migrations::m202608270003_create_user_subjects::Migration),
            Box::new(migrations::m202608270004_create_check_sessions::Migration),
            Box::new(migrations::m202608270005_create_check_records::Migration),
        ]
    }
}
