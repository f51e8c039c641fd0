use crate::api::finances::models::BalanceOut;
use crate::api::finances::service;
use crate::api::user_management::models::UserLoggedIn;
use crate::db::DbConn;
use crate::error::ErrorResponse;
use rocket::serde::json::Json;

#[get("/finances/balance")]
pub(crate) async fn get_balance(
    user: UserLoggedIn,
    conn: DbConn,
) -> Result<Json<BalanceOut>, ErrorResponse> {
    let balance = conn
        .run(move |c| service::get_balance(c, &user.0.id))
        .await?;

    Ok(Json(BalanceOut { balance }))
}
