//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::response::{IntoResponse, Response};

use crate::{
    alert::Alert,
    error_pages::{InternalServerError, NotFoundError},
};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A form was submitted with a missing field or a value that could not be
    /// coerced into the expected type.
    #[error("invalid form data: {0}")]
    Validation(String),

    /// The transaction ID in the request does not match any stored transaction.
    #[error("the transaction \"{0}\" could not be found")]
    TransactionNotFound(String),

    /// The store file exists but its contents could not be parsed as a list of
    /// transactions.
    #[error("the transaction store is corrupt: {0}")]
    CorruptStore(String),

    /// The store file could not be read or written.
    ///
    /// The string holds the original I/O error and should only be logged on
    /// the server.
    #[error("could not access the transaction store: {0}")]
    Io(String),

    /// The transactions could not be written as CSV.
    #[error("could not export transactions: {0}")]
    Export(String),

    /// Could not acquire the store lock
    #[error("could not acquire the store lock")]
    StoreLock,

    /// The user provided an invalid combination of username and password.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// The session token cookie is missing from the cookie jar in the request.
    #[error("no cookies in the cookie jar :(")]
    CookieMissing,

    /// The session token cookie could not be parsed or serialized.
    #[error("invalid session token: {0}")]
    InvalidToken(String),

    /// The requested page was not found.
    #[error("the requested resource could not be found")]
    NotFound,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => NotFoundError.into_response(),
            Error::CorruptStore(_) => {
                tracing::error!("{self}");
                InternalServerError {
                    description: "Could not read your transactions",
                    fix: "The data file is not valid JSON. Fix or move the file and try again.",
                }
                .into_response()
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an alert that can be flashed to the user on the next page.
    pub fn into_alert(self) -> Alert {
        match self {
            Error::Validation(details) => Alert::Error {
                message: "Invalid transaction".to_owned(),
                details,
            },
            Error::TransactionNotFound(_) => Alert::ErrorSimple {
                message: "Transaction not found!".to_owned(),
            },
            Error::CorruptStore(_) => Alert::Error {
                message: "Could not read your transactions".to_owned(),
                details: "The data file is not valid JSON. Check the server logs for more details."
                    .to_owned(),
            },
            Error::Io(_) => Alert::Error {
                message: "Could not save your transactions".to_owned(),
                details: "The data file could not be written. \
                    Check the server logs for more details."
                    .to_owned(),
            },
            Error::Export(_) => Alert::Error {
                message: "Could not export your transactions".to_owned(),
                details: "Check the server logs for more details.".to_owned(),
            },
            Error::InvalidCredentials => Alert::ErrorSimple {
                message: "Invalid credentials!".to_owned(),
            },
            Error::NotFound => Alert::ErrorSimple {
                message: "The requested page could not be found.".to_owned(),
            },
            _ => Alert::Error {
                message: "Something went wrong".to_owned(),
                details: "An unexpected error occurred, check the server logs for more details."
                    .to_owned(),
            },
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::Io(value.to_string())
    }
}
