use crate::api::list_management::models::{AddItemRequest, ListItemOut};
use crate::api::list_management::service;
use crate::api::user_management::models::UserLoggedIn;
use crate::db::DbConn;
use crate::error::ErrorResponse;
use rocket::serde::json::Json;

#[post("/lists/<list_id>/items", data = "<new_item>")]
pub(crate) async fn add_item(
    list_id: String,
    new_item: Json<AddItemRequest>,
    user: UserLoggedIn,
    conn: DbConn,
) -> Result<Json<ListItemOut>, ErrorResponse> {
    let item = conn
        .run(move |c| service::add_item(c, &list_id, &new_item, &user.0.id))
        .await?;

    Ok(Json(item.into()))
}
