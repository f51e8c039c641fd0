use diesel::prelude::*;
use diesel::SqliteConnection;

use super::models::Product;
use crate::error::ServiceError;
use crate::schema::products;

/// Starter catalogue: barcode, name, price in cents, image.
const SEED_PRODUCTS: [(&str, &str, i64, &str); 3] = [
    (
        "7891000053508",
        "Coca-Cola 2L",
        950,
        "https://img.clubeextra.com.br/img/uploads/1/350/579350.png",
    ),
    (
        "7891000100103",
        "Leite Integral 1L",
        480,
        "https://m.media-amazon.com/images/I/61k1Jk+V1+L._AC_SX679_.jpg",
    ),
    (
        "7896003700021",
        "Pão de Forma Visconti",
        690,
        "https://static.paodeacucar.com/img/uploads/1/640/538640.png",
    ),
];

/// A miss is `Ok(None)`, not an error.
pub fn find_by_barcode(
    c: &mut SqliteConnection,
    barcode: &str,
) -> Result<Option<Product>, ServiceError> {
    Ok(products::table
        .find(barcode)
        .first::<Product>(c)
        .optional()?)
}

/// Fills an empty catalogue. Returns how many rows were inserted; zero when
/// the table already had products.
pub fn seed(c: &mut SqliteConnection) -> Result<usize, ServiceError> {
    let count = products::table.count().get_result::<i64>(c)?;
    if count > 0 {
        return Ok(0);
    }

    let rows: Vec<Product> = SEED_PRODUCTS
        .iter()
        .map(|&(barcode, name, price_cents, image)| Product {
            barcode: barcode.to_string(),
            name: name.to_string(),
            price_cents,
            image: Some(image.to_string()),
        })
        .collect();

    Ok(diesel::insert_into(products::table)
        .values(&rows)
        .execute(c)?)
}
