pub mod finances;
pub mod list_management;
pub mod products;
pub mod user_management;
