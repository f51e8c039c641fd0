use crate::api::list_management::service;
use crate::api::user_management::models::UserLoggedIn;
use crate::db::DbConn;
use crate::error::ErrorResponse;

#[delete("/lists/<list_id>/items/<item_id>")]
pub(crate) async fn remove_item(
    list_id: String,
    item_id: String,
    user: UserLoggedIn,
    conn: DbConn,
) -> Result<(), ErrorResponse> {
    conn.run(move |c| service::remove_item(c, &list_id, &item_id, &user.0.id))
        .await?;

    Ok(())
}
