use crate::api::list_management::models::ListOut;
use crate::api::list_management::service;
use crate::api::user_management::models::UserLoggedIn;
use crate::db::DbConn;
use crate::error::ErrorResponse;
use rocket::serde::json::Json;

#[get("/lists/<id>")]
pub(crate) async fn get_list(
    id: String,
    user: UserLoggedIn,
    conn: DbConn,
) -> Result<Json<ListOut>, ErrorResponse> {
    let list = conn
        .run(move |c| service::find_one(c, &id, &user.0.id))
        .await?;

    Ok(Json(list))
}
