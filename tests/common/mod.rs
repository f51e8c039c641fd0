#![allow(dead_code)]

use pagly_backend::settings::Settings;
use rocket::figment::util::map;
use rocket::http::{ContentType, Header, Status};
use rocket::local::blocking::Client;
use serde_json::{json, Value};
use tempfile::TempDir;

pub struct TestApp {
    pub client: Client,
    _dir: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_settings(Settings {
            session_ttl_secs: 3600,
            seed_products: true,
        })
    }

    pub fn with_settings(settings: Settings) -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let db_path = dir.path().join("pagly-test.sqlite");
        let url = db_path.to_string_lossy().into_owned();

        let figment = rocket::Config::figment()
            .merge(("databases", map!["pagly" => map!["url" => url]]))
            .merge(("log_level", "off"));

        let client = Client::tracked(pagly_backend::build(figment, settings))
            .expect("valid rocket instance");

        TestApp { client, _dir: dir }
    }

    /// Registers a user and returns a bearer token for them.
    pub fn sign_up(&self, email: &str) -> String {
        let response = self
            .client
            .post("/auth/register")
            .header(ContentType::JSON)
            .body(json!({"name": "Test", "email": email, "password": "hunter2hunter2"}).to_string())
            .dispatch();
        assert_eq!(response.status(), Status::Ok);

        self.login(email, "hunter2hunter2")
    }

    pub fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .client
            .post("/auth/login")
            .header(ContentType::JSON)
            .body(json!({"email": email, "password": password}).to_string())
            .dispatch();
        assert_eq!(response.status(), Status::Ok);

        let body: Value = response.into_json().expect("login body");
        body["access_token"]
            .as_str()
            .expect("access token")
            .to_string()
    }
}

pub fn bearer(token: &str) -> Header<'static> {
    Header::new("Authorization", format!("Bearer {}", token))
}
