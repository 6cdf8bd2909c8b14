//! Error types for the book store API client.
//!
//! # Design
//! The service reports failures as a JSON body `{code, message}` alongside
//! the HTTP status; `ErrorResponse` carries that triple because callers
//! assert on all three parts. Non-2xx responses without a decodable error
//! body land in `HttpError` with the raw status code and body for debugging.
//! `UserServiceError` is separate: it covers the fixture-provisioning
//! contract, where any unexpected status is fatal for the test run.

use std::fmt;

/// Errors returned by the `BookClient` parse methods.
#[derive(Debug)]
pub enum ApiError {
    /// The server returned an unexpected status with a structured
    /// `{code, message}` error body.
    ErrorResponse {
        status: u16,
        code: u32,
        message: String,
    },

    /// The server returned an unexpected status and the body was not a
    /// structured error object.
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    SerializationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::ErrorResponse {
                status,
                code,
                message,
            } => {
                write!(f, "HTTP {status}, code {code}: {message}")
            }
            ApiError::HttpError { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Errors returned by `UserService` when provisioning the test fixture.
///
/// Each variant corresponds to one provisioning step; the carried status is
/// whatever the server actually returned.
#[derive(Debug)]
pub enum UserServiceError {
    /// User creation did not return 201.
    CreateUser { status: u16 },

    /// Token generation did not return 200.
    Authorize { status: u16 },

    /// Token generation returned 200 but the service rejected the login.
    LoginRejected { status: String, result: String },

    /// User removal did not return 200.
    RemoveUser { status: u16 },

    /// A provisioning response body could not be decoded.
    UnexpectedBody(String),
}

impl fmt::Display for UserServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserServiceError::CreateUser { status } => {
                write!(f, "creating user failed: HTTP {status}")
            }
            UserServiceError::Authorize { status } => {
                write!(f, "authorization failed: HTTP {status}")
            }
            UserServiceError::LoginRejected { status, result } => {
                write!(f, "login rejected: {status} ({result})")
            }
            UserServiceError::RemoveUser { status } => {
                write!(f, "removing user failed: HTTP {status}")
            }
            UserServiceError::UnexpectedBody(msg) => {
                write!(f, "unexpected provisioning response body: {msg}")
            }
        }
    }
}

impl std::error::Error for UserServiceError {}
