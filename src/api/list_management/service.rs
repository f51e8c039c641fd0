use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use uuid::Uuid;

use super::models::{AddItemRequest, List, ListItem, ListOut, NewList};
use crate::error::ServiceError;
use crate::money::check_amount;
use crate::schema::{list_items, lists};

/// All lists owned by `owner`, newest first, items embedded in insertion order.
pub fn find_all(c: &mut SqliteConnection, owner: &str) -> Result<Vec<ListOut>, ServiceError> {
    let owned = lists::table
        .filter(lists::user_id.eq(owner))
        .order(lists::created_at.desc())
        .load::<List>(c)?;

    let items = ListItem::belonging_to(&owned)
        .order((list_items::created_at.asc(), list_items::id.asc()))
        .load::<ListItem>(c)?
        .grouped_by(&owned);

    Ok(owned
        .into_iter()
        .zip(items)
        .map(|(list, items)| ListOut::new(list, items))
        .collect())
}

pub fn find_one(c: &mut SqliteConnection, id: &str, owner: &str) -> Result<ListOut, ServiceError> {
    let list = find_owned(c, id, owner)?;
    let items = ListItem::belonging_to(&list)
        .order((list_items::created_at.asc(), list_items::id.asc()))
        .load::<ListItem>(c)?;

    Ok(ListOut::new(list, items))
}

pub fn create(c: &mut SqliteConnection, title: &str, owner: &str) -> Result<ListOut, ServiceError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ServiceError::Validation("Title is required".to_string()));
    }

    let id = Uuid::new_v4().to_string();
    let new_list = NewList {
        id: &id,
        user_id: owner,
        title,
        created_at: Utc::now().naive_utc(),
    };

    diesel::insert_into(lists::table)
        .values(&new_list)
        .execute(c)?;

    let list = lists::table.find(&id).first::<List>(c)?;
    Ok(ListOut::new(list, Vec::new()))
}

pub fn add_item(
    c: &mut SqliteConnection,
    list_id: &str,
    request: &AddItemRequest,
    owner: &str,
) -> Result<ListItem, ServiceError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(ServiceError::Validation("Item name is required".to_string()));
    }
    if request.qty < 0 {
        return Err(ServiceError::Validation(
            "Quantity can't be negative".to_string(),
        ));
    }
    check_amount(request.price, "Price")?;

    let list = find_owned(c, list_id, owner)?;
    let item = ListItem {
        id: Uuid::new_v4().to_string(),
        list_id: list.id,
        name: name.to_string(),
        qty: request.qty,
        price_cents: request.price,
        checked: request.checked,
        created_at: Utc::now().naive_utc(),
    };

    diesel::insert_into(list_items::table)
        .values(&item)
        .execute(c)?;

    Ok(item)
}

/// Removes one item, going through the owning list so foreign lists stay untouched.
pub fn remove_item(
    c: &mut SqliteConnection,
    list_id: &str,
    item_id: &str,
    owner: &str,
) -> Result<(), ServiceError> {
    let list = find_owned(c, list_id, owner)?;

    let removed = diesel::delete(
        list_items::table.filter(list_items::id.eq(item_id).and(list_items::list_id.eq(&list.id))),
    )
    .execute(c)?;

    if removed == 0 {
        return Err(ServiceError::NotFound("List item"));
    }

    Ok(())
}

/// Deletes the list and its items in one transaction.
pub fn delete(c: &mut SqliteConnection, id: &str, owner: &str) -> Result<(), ServiceError> {
    c.transaction::<_, ServiceError, _>(|c| {
        let list = find_owned(c, id, owner)?;

        diesel::delete(list_items::table.filter(list_items::list_id.eq(&list.id))).execute(c)?;
        diesel::delete(lists::table.find(&list.id)).execute(c)?;

        Ok(())
    })
}

fn find_owned(c: &mut SqliteConnection, id: &str, owner: &str) -> Result<List, ServiceError> {
    lists::table
        .filter(lists::id.eq(id).and(lists::user_id.eq(owner)))
        .first::<List>(c)
        .optional()?
        .ok_or(ServiceError::NotFound("List"))
}
