//! Synchronous API client core for a book store service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - `UserClient` / `BookClient` are stateless — they hold only an
//!   `ApiConfig` naming the base URL and the two service path roots.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - `UserService` layers the fixture-provisioning contract on top of the
//!   account builders; it is the only place that treats a status code as
//!   fatal.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod service;
pub mod types;

pub use client::{BookClient, UserClient};
pub use config::ApiConfig;
pub use error::{ApiError, UserServiceError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use service::UserService;
pub use types::{
    AddBooks, Book, BookList, CreatedUser, Credentials, DeleteBook, ErrorBody, IsbnItem,
    ReplaceIsbn, TokenResponse, UserAccount,
};
