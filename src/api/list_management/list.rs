use crate::api::list_management::models::ListOut;
use crate::api::list_management::service;
use crate::api::user_management::models::UserLoggedIn;
use crate::db::DbConn;
use crate::error::ErrorResponse;
use rocket::serde::json::Json;

#[get("/lists")]
pub(crate) async fn get_lists(
    user: UserLoggedIn,
    conn: DbConn,
) -> Result<Json<Vec<ListOut>>, ErrorResponse> {
    let lists = conn
        .run(move |c| service::find_all(c, &user.0.id))
        .await?;

    Ok(Json(lists))
}
