#[macro_use]
extern crate rocket;

pub mod api;
pub mod db;
pub mod error;
pub mod money;
pub mod schema;
pub mod settings;
pub mod telemetry;

#[cfg(test)]
pub(crate) mod test_support;

use api::user_management::sessions::UserSession;
use db::DbConn;
use rocket::fairing::AdHoc;
use rocket::figment::Figment;
use rocket::{Build, Rocket};
use settings::Settings;
use std::time::Duration;

#[get("/")]
fn index() -> &'static str {
    "PAGLY backend is running"
}

/// Assembles the application on top of `figment`, which must provide
/// `databases.pagly.url`.
pub fn build(figment: Figment, settings: Settings) -> Rocket<Build> {
    rocket::custom(figment)
        .attach(DbConn::fairing())
        .attach(AdHoc::try_on_ignite("Run migrations", db::run_db_migrations))
        .attach(AdHoc::try_on_ignite("Seed products", db::seed_products))
        .manage(UserSession::new(Duration::from_secs(settings.session_ttl_secs)))
        .manage(settings)
        .register(
            "/",
            catchers![
                error::bad_request,
                error::unauthorized,
                error::not_found,
                error::unprocessable,
                error::internal_error,
            ],
        )
        .mount(
            "/",
            routes![
                index,
                api::user_management::register::register,
                api::user_management::login::login,
                api::user_management::login::logout,
                api::user_management::login::check_login,
                api::list_management::list::get_lists,
                api::list_management::get_list::get_list,
                api::list_management::create::create_list,
                api::list_management::delete::delete_list,
                api::list_management::add_item::add_item,
                api::list_management::remove_item::remove_item,
                api::finances::list::get_transactions,
                api::finances::balance::get_balance,
                api::finances::create::create_transaction,
                api::products::get_product::get_product,
            ],
        )
}
