use crate::api::user_management::models::{RegisterRequest, UserOut};
use crate::api::user_management::service;
use crate::db::DbConn;
use crate::error::ErrorResponse;
use rocket::serde::json::Json;

#[post("/auth/register", data = "<registration>")]
pub(crate) async fn register(
    registration: Json<RegisterRequest>,
    conn: DbConn,
) -> Result<Json<UserOut>, ErrorResponse> {
    let user = conn
        .run(move |c| service::register(c, &registration))
        .await?;

    tracing::info!(user_id = %user.id, "user registered");

    Ok(Json(user.into()))
}
