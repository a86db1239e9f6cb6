use colored::*;
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::prelude::*;
use std::time::Instant;

pub async fn run_all_migrations(url: &str) {
    let db: DatabaseConnection = Database::connect(url)
        .await
        .expect("DB connection failed");

    let pending = <migration::Migrator as MigratorTrait>::migrations();
    println!("Applying {} migration(s)...", pending.len());

    let schema_manager = SchemaManager::new(&db);
    for migration in pending {
        apply(&schema_manager, migration.as_ref()).await;
    }
}

async fn apply(schema_manager: &SchemaManager<'_>, migration: &dyn MigrationTrait) {
    let started = Instant::now();
    match migration.up(schema_manager).await {
        Ok(()) => {
            println!(
                "  {} {} {}",
                "ok".green(),
                migration.name().bold(),
                format!("({:.2?})", started.elapsed()).dimmed()
            );
        }
        Err(err) => {
            eprintln!("  {} {}: {err}", "failed".red(), migration.name().bold());
            std::process::exit(1);
        }
    }
}
