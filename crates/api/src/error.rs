use actix_web::{http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeabooError {
    #[error("Internal server error")]
    InternalError,
    #[error("Invalid data provided: {0}")]
    BadClientData(String),
    #[error("The request conflicts with the current state: {0}")]
    Conflict(String),
    #[error("Unauthorized request: {0}")]
    Unauthorized(String),
    #[error("Unidentifiable client. Must include the `seaboo-account` header: {0}")]
    UnidentifiableClient(String),
    #[error("Not found: {0}")]
    NotFound(String),
}

impl SeabooError {
    /// Stable machine readable name of the error, sent next to the message
    pub fn code(&self) -> &'static str {
        match self {
            Self::InternalError => "internal",
            Self::BadClientData(_) => "badRequest",
            Self::Conflict(_) => "conflict",
            Self::Unauthorized(_) => "unauthorized",
            Self::UnidentifiableClient(_) => "unidentifiableClient",
            Self::NotFound(_) => "notFound",
        }
    }
}

impl actix_web::error::ResponseError for SeabooError {
    fn status_code(&self) -> StatusCode {
        match *self {
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadClientData(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) | Self::UnidentifiableClient(_) => StatusCode::UNAUTHORIZED,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "error": self.code(),
            "message": self.to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{body::to_bytes, ResponseError};

    #[actix_web::test]
    async fn conflict_is_sent_as_json() {
        let err = SeabooError::Conflict("The nights are already booked".into());
        let res = err.error_response();
        assert_eq!(res.status(), StatusCode::CONFLICT);

        let body = to_bytes(res.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"], "conflict");
        assert_eq!(
            body["message"],
            "The request conflicts with the current state: The nights are already booked"
        );
    }

    #[test]
    fn unidentifiable_client_is_unauthorized() {
        assert_eq!(
            SeabooError::UnidentifiableClient("missing header".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(SeabooError::InternalError.code(), "internal");
    }
}
