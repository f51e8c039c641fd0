use crate::api::list_management::service;
use crate::api::user_management::models::UserLoggedIn;
use crate::db::DbConn;
use crate::error::ErrorResponse;

#[delete("/lists/<id>")]
pub(crate) async fn delete_list(
    id: String,
    user: UserLoggedIn,
    conn: DbConn,
) -> Result<(), ErrorResponse> {
    conn.run(move |c| service::delete(c, &id, &user.0.id))
        .await?;

    Ok(())
}
