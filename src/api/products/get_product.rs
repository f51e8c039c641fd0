use crate::api::products::models::ProductOut;
use crate::api::products::service;
use crate::db::DbConn;
use crate::error::{ErrorResponse, ServiceError};
use rocket::serde::json::Json;

#[get("/products/<barcode>")]
pub(crate) async fn get_product(
    barcode: String,
    conn: DbConn,
) -> Result<Json<ProductOut>, ErrorResponse> {
    let product = conn
        .run(move |c| service::find_by_barcode(c, &barcode))
        .await?
        .ok_or(ServiceError::NotFound("Product"))?;

    Ok(Json(product.into()))
}
