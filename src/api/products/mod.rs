pub mod get_product;
pub mod models;
pub mod service;
