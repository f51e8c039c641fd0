use crate::schema::products;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Queryable, Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = products)]
pub struct Product {
    pub barcode: String,
    pub name: String,
    pub price_cents: i64,
    pub image: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProductOut {
    pub barcode: String,
    pub name: String,
    #[serde(with = "crate::money::cents")]
    pub price: i64,
    pub image: Option<String>,
}

impl From<Product> for ProductOut {
    fn from(product: Product) -> Self {
        ProductOut {
            barcode: product.barcode,
            name: product.name,
            price: product.price_cents,
            image: product.image,
        }
    }
}
