pub mod login;
pub mod models;
pub mod register;
pub mod service;
pub mod sessions;
