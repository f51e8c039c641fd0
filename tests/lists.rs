mod common;

use common::{bearer, TestApp};
use rocket::http::{ContentType, Status};
use serde_json::{json, Value};

fn create_list(app: &TestApp, token: &str, title: &str) -> Value {
    let response = app
        .client
        .post("/lists")
        .header(ContentType::JSON)
        .header(bearer(token))
        .body(json!({ "title": title }).to_string())
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    response.into_json().unwrap()
}

fn add_item(app: &TestApp, token: &str, list_id: &str, body: Value) -> Status {
    app.client
        .post(format!("/lists/{}/items", list_id))
        .header(ContentType::JSON)
        .header(bearer(token))
        .body(body.to_string())
        .dispatch()
        .status()
}

#[test]
fn create_list_and_add_items() {
    let app = TestApp::new();
    let token = app.sign_up("ana@example.com");

    let list = create_list(&app, &token, "Groceries");
    let id = list["id"].as_str().unwrap();
    assert_eq!(list["title"], "Groceries");
    assert_eq!(list["items"], json!([]));

    let response = app
        .client
        .post(format!("/lists/{}/items", id))
        .header(ContentType::JSON)
        .header(bearer(&token))
        .body(json!({"name": "Milk", "qty": 2, "price": 4.8}).to_string())
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    let item: Value = response.into_json().unwrap();
    assert_eq!(item["qty"], 2);
    assert_eq!(item["price"], json!(4.8));
    assert_eq!(item["checked"], false);

    assert_eq!(add_item(&app, &token, id, json!({"name": "Bread"})), Status::Ok);

    let fetched: Value = app
        .client
        .get(format!("/lists/{}", id))
        .header(bearer(&token))
        .dispatch()
        .into_json()
        .unwrap();
    let items = fetched["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1]["qty"], 1);
    assert_eq!(items[1]["price"], json!(0.0));

    let all: Value = app
        .client
        .get("/lists")
        .header(bearer(&token))
        .dispatch()
        .into_json()
        .unwrap();
    assert_eq!(all.as_array().unwrap().len(), 1);
}

#[test]
fn deleting_a_list_removes_it_and_its_items() {
    let app = TestApp::new();
    let token = app.sign_up("ana@example.com");
    let list = create_list(&app, &token, "Party");
    let id = list["id"].as_str().unwrap();
    assert_eq!(add_item(&app, &token, id, json!({"name": "Chips"})), Status::Ok);

    let response = app
        .client
        .delete(format!("/lists/{}", id))
        .header(bearer(&token))
        .dispatch();
    assert_eq!(response.status(), Status::Ok);

    let response = app
        .client
        .get(format!("/lists/{}", id))
        .header(bearer(&token))
        .dispatch();
    assert_eq!(response.status(), Status::NotFound);

    let response = app
        .client
        .delete(format!("/lists/{}", id))
        .header(bearer(&token))
        .dispatch();
    assert_eq!(response.status(), Status::NotFound);
}

#[test]
fn lists_are_private_to_their_owner() {
    let app = TestApp::new();
    let ana = app.sign_up("ana@example.com");
    let bob = app.sign_up("bob@example.com");
    let list = create_list(&app, &ana, "Ana's");
    let id = list["id"].as_str().unwrap();

    let response = app
        .client
        .get(format!("/lists/{}", id))
        .header(bearer(&bob))
        .dispatch();
    assert_eq!(response.status(), Status::NotFound);
    let body: Value = response.into_json().unwrap();
    assert_eq!(body["err"], "List not found");

    assert_eq!(add_item(&app, &bob, id, json!({"name": "Eggs"})), Status::NotFound);

    let response = app
        .client
        .delete(format!("/lists/{}", id))
        .header(bearer(&bob))
        .dispatch();
    assert_eq!(response.status(), Status::NotFound);

    let bobs: Value = app
        .client
        .get("/lists")
        .header(bearer(&bob))
        .dispatch()
        .into_json()
        .unwrap();
    assert_eq!(bobs, json!([]));

    let response = app
        .client
        .get(format!("/lists/{}", id))
        .header(bearer(&ana))
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
}

#[test]
fn removes_a_single_item() {
    let app = TestApp::new();
    let token = app.sign_up("ana@example.com");
    let list = create_list(&app, &token, "Groceries");
    let id = list["id"].as_str().unwrap();

    let item: Value = app
        .client
        .post(format!("/lists/{}/items", id))
        .header(ContentType::JSON)
        .header(bearer(&token))
        .body(json!({"name": "Milk"}).to_string())
        .dispatch()
        .into_json()
        .unwrap();
    let item_id = item["id"].as_str().unwrap();

    let response = app
        .client
        .delete(format!("/lists/{}/items/{}", id, item_id))
        .header(bearer(&token))
        .dispatch();
    assert_eq!(response.status(), Status::Ok);

    let fetched: Value = app
        .client
        .get(format!("/lists/{}", id))
        .header(bearer(&token))
        .dispatch()
        .into_json()
        .unwrap();
    assert_eq!(fetched["items"], json!([]));
}

#[test]
fn invalid_bodies_are_rejected() {
    let app = TestApp::new();
    let token = app.sign_up("ana@example.com");

    let missing_title = app
        .client
        .post("/lists")
        .header(ContentType::JSON)
        .header(bearer(&token))
        .body("{}")
        .dispatch();
    assert_eq!(missing_title.status(), Status::UnprocessableEntity);

    let blank_title = app
        .client
        .post("/lists")
        .header(ContentType::JSON)
        .header(bearer(&token))
        .body(json!({"title": "  "}).to_string())
        .dispatch();
    assert_eq!(blank_title.status(), Status::UnprocessableEntity);

    let list = create_list(&app, &token, "Groceries");
    let id = list["id"].as_str().unwrap();
    assert_eq!(
        add_item(&app, &token, id, json!({"name": "Milk", "qty": -3})),
        Status::UnprocessableEntity
    );
    assert_eq!(
        add_item(&app, &token, id, json!({"name": "Yacht", "price": 100_000_000.0})),
        Status::UnprocessableEntity
    );
    assert_eq!(
        add_item(&app, &token, id, json!({"name": "Yacht", "price": 99_999_999.99})),
        Status::Ok
    );
}
