use crate::schema::{list_items, lists};
use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = lists)]
pub struct List {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub created_at: NaiveDateTime,
}

#[derive(Queryable, Identifiable, Associations, Insertable, Debug, Clone, PartialEq)]
#[diesel(belongs_to(List))]
#[diesel(table_name = list_items)]
pub struct ListItem {
    pub id: String,
    pub list_id: String,
    pub name: String,
    pub qty: i32,
    pub price_cents: i64,
    pub checked: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = lists)]
pub(crate) struct NewList<'a> {
    pub id: &'a str,
    pub user_id: &'a str,
    pub title: &'a str,
    pub created_at: NaiveDateTime,
}

#[derive(Deserialize, Debug)]
pub struct CreateListRequest {
    pub title: String,
}

fn default_qty() -> i32 {
    1
}

#[derive(Deserialize, Debug)]
pub struct AddItemRequest {
    pub name: String,
    #[serde(default = "default_qty")]
    pub qty: i32,
    #[serde(default, with = "crate::money::cents")]
    pub price: i64,
    #[serde(default)]
    pub checked: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ListItemOut {
    pub id: String,
    pub name: String,
    pub qty: i32,
    #[serde(with = "crate::money::cents")]
    pub price: i64,
    pub checked: bool,
}

impl From<ListItem> for ListItemOut {
    fn from(item: ListItem) -> Self {
        ListItemOut {
            id: item.id,
            name: item.name,
            qty: item.qty,
            price: item.price_cents,
            checked: item.checked,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListOut {
    pub id: String,
    pub title: String,
    pub created_at: NaiveDateTime,
    pub items: Vec<ListItemOut>,
}

impl ListOut {
    pub fn new(list: List, items: Vec<ListItem>) -> Self {
        ListOut {
            id: list.id,
            title: list.title,
            created_at: list.created_at,
            items: items.into_iter().map(ListItemOut::from).collect(),
        }
    }
}
