use crate::api::finances::models::TransactionOut;
use crate::api::finances::service;
use crate::api::user_management::models::UserLoggedIn;
use crate::db::DbConn;
use crate::error::ErrorResponse;
use rocket::serde::json::Json;

#[get("/finances")]
pub(crate) async fn get_transactions(
    user: UserLoggedIn,
    conn: DbConn,
) -> Result<Json<Vec<TransactionOut>>, ErrorResponse> {
    let history = conn
        .run(move |c| service::find_all(c, &user.0.id))
        .await?;

    Ok(Json(history.into_iter().map(TransactionOut::from).collect()))
}
