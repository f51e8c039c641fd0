use crate::api::user_management::models::{LoginOut, LoginRequest, UserLoggedIn, UserOut};
use crate::api::user_management::service;
use crate::api::user_management::sessions::{BearerToken, UserSession};
use crate::db::DbConn;
use crate::error::ErrorResponse;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::State;

#[get("/auth/me")]
pub(crate) async fn check_login(user: UserLoggedIn) -> Json<UserOut> {
    Json(user.0)
}

#[post("/auth/login", data = "<credentials>")]
pub(crate) async fn login(
    credentials: Json<LoginRequest>,
    tokens: &State<UserSession>,
    conn: DbConn,
) -> Result<Json<LoginOut>, ErrorResponse> {
    let LoginRequest { email, password } = credentials.into_inner();

    let user = conn
        .run(move |c| service::authenticate(c, &email, &password))
        .await?;

    let access_token = tokens
        .issue(&user.id)
        .map_err(|_| {
            ErrorResponse::new(
                Status { code: 500 },
                "Couldn't update user session".to_string(),
            )
        })?;

    tracing::info!(user_id = %user.id, "user logged in");

    Ok(Json(LoginOut {
        access_token,
        user: user.into(),
    }))
}

#[post("/auth/logout")]
pub(crate) async fn logout(
    user: UserLoggedIn,
    token: BearerToken,
    tokens: &State<UserSession>,
) -> Result<(), ErrorResponse> {
    tokens.revoke(&token.0).map_err(|_| {
        ErrorResponse::new(
            Status { code: 500 },
            "Couldn't update user session".to_string(),
        )
    })?;

    tracing::info!(user_id = %user.0.id, "user logged out");

    Ok(())
}
