use chrono::Utc;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::SqliteConnection;
use rstest::fixture;
use uuid::Uuid;

use crate::api::user_management::models::NewUser;
use crate::db::run_migrations;
use crate::schema::users;

/// Fresh in-memory database with the schema applied. Foreign keys are switched
/// on by hand here; pooled `DbConn` connections get the same pragma from
/// `rocket_sync_db_pools` on acquire.
#[fixture]
pub fn connection() -> SqliteConnection {
    let mut c = SqliteConnection::establish(":memory:").expect("in-memory sqlite");
    c.batch_execute("PRAGMA foreign_keys = ON;")
        .expect("enable foreign keys");
    run_migrations(&mut c).expect("migrations apply");
    c
}

pub fn insert_user(c: &mut SqliteConnection, email: &str) -> String {
    let id = Uuid::new_v4().to_string();
    let now = Utc::now().naive_utc();

    diesel::insert_into(users::table)
        .values(&NewUser {
            id: &id,
            name: "Test",
            email,
            password_hash: "not-a-real-hash",
            created_at: now,
            updated_at: now,
        })
        .execute(c)
        .expect("insert user");

    id
}
