use std::error::Error;

use diesel::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use rocket::{fairing, Build, Rocket};
use rocket_sync_db_pools::database;

use crate::api::products::service as products;
use crate::settings::Settings;

#[database("pagly")]
pub struct DbConn(SqliteConnection);

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub fn run_migrations(c: &mut SqliteConnection) -> Result<(), Box<dyn Error + Send + Sync>> {
    c.run_pending_migrations(MIGRATIONS)?;
    Ok(())
}

pub(crate) async fn run_db_migrations(rocket: Rocket<Build>) -> fairing::Result {
    let Some(conn) = DbConn::get_one(&rocket).await else {
        tracing::error!("no database connection available for migrations");
        return Err(rocket);
    };

    match conn.run(run_migrations).await {
        Ok(()) => Ok(rocket),
        Err(err) => {
            tracing::error!(error = %err, "couldn't run migrations");
            Err(rocket)
        }
    }
}

pub(crate) async fn seed_products(rocket: Rocket<Build>) -> fairing::Result {
    let enabled = rocket
        .state::<Settings>()
        .map(|settings| settings.seed_products)
        .unwrap_or(false);
    if !enabled {
        return Ok(rocket);
    }

    let Some(conn) = DbConn::get_one(&rocket).await else {
        tracing::error!("no database connection available for seeding");
        return Err(rocket);
    };

    match conn.run(products::seed).await {
        Ok(0) => Ok(rocket),
        Ok(inserted) => {
            tracing::info!(inserted, "seeded initial products");
            Ok(rocket)
        }
        Err(err) => {
            tracing::error!(error = %err, "couldn't seed products");
            Err(rocket)
        }
    }
}
