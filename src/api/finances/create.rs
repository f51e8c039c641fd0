use crate::api::finances::models::{CreateTransactionRequest, TransactionOut};
use crate::api::finances::service;
use crate::api::user_management::models::UserLoggedIn;
use crate::db::DbConn;
use crate::error::ErrorResponse;
use rocket::serde::json::Json;

#[post("/finances", data = "<new_transaction>")]
pub(crate) async fn create_transaction(
    new_transaction: Json<CreateTransactionRequest>,
    user: UserLoggedIn,
    conn: DbConn,
) -> Result<Json<TransactionOut>, ErrorResponse> {
    let transaction = conn
        .run(move |c| service::create(c, &new_transaction, &user.0.id))
        .await?;

    Ok(Json(transaction.into()))
}
