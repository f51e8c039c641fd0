use rocket::response::{Responder, Response};
use rocket::{
    http::{ContentType, Status},
    response,
    serde::json::Json,
    Request,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Serialize, Debug)]
pub struct ApiError {
    err: String,
}

impl ApiError {
    pub(crate) fn new(err: String) -> ApiError {
        ApiError { err }
    }
}

#[derive(Debug)]
pub struct ErrorResponse<T = ApiError> {
    json: Json<T>,
    status: Status,
}

impl ErrorResponse<ApiError> {
    pub(crate) fn new(status: Status, err: String) -> ErrorResponse<ApiError> {
        ErrorResponse {
            json: Json(ApiError { err }),
            status,
        }
    }
}

impl<'r, T: serde::Serialize> Responder<'r, 'static> for ErrorResponse<T> {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        Response::build_from(self.json.respond_to(req)?)
            .status(self.status)
            .header(ContentType::JSON)
            .ok()
    }
}

/// Failures raised below the HTTP layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error("Invalid email or password")]
    Unauthorized,
    #[error("Couldn't hash password")]
    PasswordHash,
    #[error("Database error: {0}")]
    Database(#[from] diesel::result::Error),
}

impl ServiceError {
    pub fn status(&self) -> Status {
        match self {
            ServiceError::NotFound(_) => Status { code: 404 },
            ServiceError::Validation(_) => Status { code: 422 },
            ServiceError::Conflict(_) => Status { code: 409 },
            ServiceError::Unauthorized => Status { code: 401 },
            ServiceError::PasswordHash | ServiceError::Database(_) => Status { code: 500 },
        }
    }
}

impl From<ServiceError> for ErrorResponse {
    fn from(err: ServiceError) -> Self {
        let status = err.status();
        if status.code >= 500 {
            tracing::error!(error = %err, "request failed");
            return ErrorResponse::new(status, "Internal server error".to_string());
        }

        ErrorResponse::new(status, err.to_string())
    }
}

#[catch(400)]
pub(crate) fn bad_request() -> ErrorResponse {
    ErrorResponse::new(Status { code: 400 }, "Malformed request".to_string())
}

#[catch(401)]
pub(crate) fn unauthorized() -> ErrorResponse {
    ErrorResponse::new(Status { code: 401 }, "Login required".to_string())
}

#[catch(404)]
pub(crate) fn not_found() -> ErrorResponse {
    ErrorResponse::new(Status { code: 404 }, "Not found".to_string())
}

#[catch(422)]
pub(crate) fn unprocessable() -> ErrorResponse {
    ErrorResponse::new(
        Status { code: 422 },
        "Request body is missing required fields".to_string(),
    )
}

#[catch(500)]
pub(crate) fn internal_error() -> ErrorResponse {
    ErrorResponse::new(Status { code: 500 }, "Internal server error".to_string())
}
