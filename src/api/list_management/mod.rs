pub mod add_item;
pub mod create;
pub mod delete;
pub mod get_list;
pub mod list;
pub mod models;
pub mod remove_item;
pub mod service;
