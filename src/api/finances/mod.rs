pub mod balance;
pub mod create;
pub mod list;
pub mod models;
pub mod service;
