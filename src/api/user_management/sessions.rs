use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};
use rocket::http::Status;
use rocket::request::{self, FromRequest, Outcome};
use rocket::Request;

use super::models::UserLoggedIn;
use super::service;
use crate::db::DbConn;
use crate::error::ApiError;

struct Session {
    user_id: String,
    created: Instant,
}

/// Bearer tokens issued by `/auth/login`, kept in memory only.
pub struct UserSession {
    sessions: Mutex<HashMap<String, Session>>,
    max_age: Duration,
}

impl UserSession {
    /// Tokens older than `max_age` stop resolving.
    pub fn new(max_age: Duration) -> UserSession {
        UserSession {
            sessions: Mutex::new(HashMap::new()),
            max_age,
        }
    }

    /// Issues a fresh token for `user_id`. Expired sessions are swept first,
    /// so the map holds at most the tokens issued within one `max_age`.
    pub fn issue(&self, user_id: &str) -> Result<String, ApiError> {
        let session_key = generate_session_key();
        let mut sessions = self
            .sessions
            .lock()
            .map_err(|_| ApiError::new("Couldn't update user session".to_string()))?;

        sessions.retain(|_, session| session.created.elapsed() <= self.max_age);
        sessions.insert(
            session_key.clone(),
            Session {
                user_id: user_id.to_string(),
                created: Instant::now(),
            },
        );

        Ok(session_key)
    }

    /// Returns the owner of `token` if it exists and hasn't expired.
    /// Expired tokens are dropped on sight.
    pub fn resolve(&self, token: &str) -> Result<Option<String>, ApiError> {
        let mut sessions = self
            .sessions
            .lock()
            .map_err(|_| ApiError::new("Couldn't get user sessions".to_string()))?;

        let Some(session) = sessions.get(token) else {
            return Ok(None);
        };
        if session.created.elapsed() <= self.max_age {
            return Ok(Some(session.user_id.clone()));
        }

        sessions.remove(token);
        Ok(None)
    }

    pub fn revoke(&self, token: &str) -> Result<bool, ApiError> {
        let removed = self
            .sessions
            .lock()
            .map_err(|_| ApiError::new("Couldn't update user session".to_string()))?
            .remove(token)
            .is_some();

        Ok(removed)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.sessions.lock().map(|s| s.len()).unwrap_or(0)
    }
}

fn generate_session_key() -> String {
    const LEN: usize = 32;

    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(LEN)
        .map(char::from)
        .collect()
}

/// Raw token from an `Authorization: Bearer <token>` header.
pub struct BearerToken(pub String);

#[rocket::async_trait]
impl<'r> FromRequest<'r> for BearerToken {
    type Error = ApiError;

    async fn from_request(req: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let Some(header) = req.headers().get_one("Authorization") else {
            return Outcome::Error((
                Status { code: 401 },
                ApiError::new("No bearer token set".to_string()),
            ));
        };

        match header.split_once(' ') {
            Some((scheme, token))
                if scheme.eq_ignore_ascii_case("bearer") && !token.trim().is_empty() =>
            {
                Outcome::Success(BearerToken(token.trim().to_string()))
            }
            _ => Outcome::Error((
                Status { code: 401 },
                ApiError::new("Malformed authorization header".to_string()),
            )),
        }
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for UserLoggedIn {
    type Error = ApiError;

    async fn from_request(req: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let token = match req.guard::<BearerToken>().await {
            Outcome::Success(token) => token,
            Outcome::Error(failure) => return Outcome::Error(failure),
            Outcome::Forward(status) => return Outcome::Forward(status),
        };

        let Some(sessions) = req.rocket().state::<UserSession>() else {
            return Outcome::Error((
                Status { code: 500 },
                ApiError::new("Couldn't get UserSession".to_string()),
            ));
        };

        let user_id = match sessions.resolve(&token.0) {
            Ok(Some(user_id)) => user_id,
            Ok(None) => {
                return Outcome::Error((
                    Status { code: 401 },
                    ApiError::new("No session found".to_string()),
                ))
            }
            Err(err) => return Outcome::Error((Status { code: 500 }, err)),
        };

        let conn = match req.guard::<DbConn>().await {
            Outcome::Success(conn) => conn,
            _ => {
                return Outcome::Error((
                    Status { code: 500 },
                    ApiError::new("Couldn't get database connection".to_string()),
                ))
            }
        };

        match conn.run(move |c| service::find_by_id(c, &user_id)).await {
            Ok(Some(user)) => Outcome::Success(UserLoggedIn(user.into())),
            Ok(None) => Outcome::Error((
                Status { code: 401 },
                ApiError::new("User not in database".to_string()),
            )),
            Err(err) => {
                tracing::error!(error = %err, "couldn't load user for session");
                Outcome::Error((
                    Status { code: 500 },
                    ApiError::new("Couldn't load user from database".to_string()),
                ))
            }
        }
    }
}
