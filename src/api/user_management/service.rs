use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use chrono::Utc;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::SqliteConnection;
use uuid::Uuid;

use super::models::{NewUser, RegisterRequest, User};
use crate::error::ServiceError;
use crate::schema::users;

const MIN_PASSWORD_LEN: usize = 8;

pub fn register(c: &mut SqliteConnection, request: &RegisterRequest) -> Result<User, ServiceError> {
    let name = request.name.trim();
    let email = request.email.trim().to_lowercase();

    if name.is_empty() {
        return Err(ServiceError::Validation("Name is required".to_string()));
    }
    if !email.contains('@') {
        return Err(ServiceError::Validation("Email is invalid".to_string()));
    }
    if request.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ServiceError::Validation(format!(
            "Password must have at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }

    let taken = users::table
        .filter(users::email.eq(&email))
        .count()
        .get_result::<i64>(c)?;
    if taken > 0 {
        return Err(ServiceError::Conflict("Email already registered".to_string()));
    }

    let password_hash = hash_password(&request.password)?;
    let id = Uuid::new_v4().to_string();
    let now = Utc::now().naive_utc();

    let new_user = NewUser {
        id: &id,
        name,
        email: &email,
        password_hash: &password_hash,
        created_at: now,
        updated_at: now,
    };

    diesel::insert_into(users::table)
        .values(&new_user)
        .execute(c)
        .map_err(|err| match err {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                ServiceError::Conflict("Email already registered".to_string())
            }
            other => ServiceError::Database(other),
        })?;

    Ok(users::table.find(&id).first::<User>(c)?)
}

/// Checks credentials. Unknown email and wrong password are indistinguishable.
pub fn authenticate(
    c: &mut SqliteConnection,
    email: &str,
    password: &str,
) -> Result<User, ServiceError> {
    let email = email.trim().to_lowercase();
    let user = users::table
        .filter(users::email.eq(&email))
        .first::<User>(c)
        .optional()?
        .ok_or(ServiceError::Unauthorized)?;

    let parsed = PasswordHash::new(&user.password_hash).map_err(|_| ServiceError::PasswordHash)?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| ServiceError::Unauthorized)?;

    Ok(user)
}

pub fn find_by_id(c: &mut SqliteConnection, user_id: &str) -> Result<Option<User>, ServiceError> {
    Ok(users::table.find(user_id).first::<User>(c).optional()?)
}

fn hash_password(password: &str) -> Result<String, ServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| ServiceError::PasswordHash)
}
