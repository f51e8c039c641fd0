use crate::api::list_management::models::{CreateListRequest, ListOut};
use crate::api::list_management::service;
use crate::api::user_management::models::UserLoggedIn;
use crate::db::DbConn;
use crate::error::ErrorResponse;
use rocket::serde::json::Json;

#[post("/lists", data = "<new_list>")]
pub(crate) async fn create_list(
    new_list: Json<CreateListRequest>,
    user: UserLoggedIn,
    conn: DbConn,
) -> Result<Json<ListOut>, ErrorResponse> {
    let list = conn
        .run(move |c| service::create(c, &new_list.title, &user.0.id))
        .await?;

    Ok(Json(list))
}
