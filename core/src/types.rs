//! Wire schemas for the account and book store endpoints.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently;
//! integration tests catch any drift between the two crates. Field names
//! reproduce the service's wire spelling exactly — note that the account
//! creation response writes `userID` while the account view writes `userId`.
//! That inconsistency is part of the observed contract and is kept.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Login/signup credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub user_name: String,
    pub password: String,
}

/// Response payload of a successful user creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreatedUser {
    #[serde(rename = "userID")]
    pub user_id: Uuid,
    pub user_name: String,
    pub books: Vec<Book>,
}

/// Response payload of a token generation attempt.
///
/// `token` is `null` and `status` is `"Failed"` when the credentials are
/// rejected; the HTTP status is 200 either way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: Option<String>,
    pub status: String,
    pub result: String,
}

/// Request payload for adding books to a user's collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddBooks {
    pub user_id: Uuid,
    pub collection_of_isbns: Vec<IsbnItem>,
}

/// A single ISBN reference, as used in collection payloads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IsbnItem {
    pub isbn: String,
}

/// Response payload of a successful book creation: the ISBNs that were
/// added to the collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookList {
    pub books: Vec<IsbnItem>,
}

/// A catalog entry, as returned by the single-book lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub pages: u32,
}

/// A user account with its full book collection, as returned by the
/// collection update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub user_id: Uuid,
    pub user_name: String,
    pub books: Vec<Book>,
}

/// Request payload for replacing one ISBN in a user's collection. The `isbn`
/// field carries the replacement; the ISBN being replaced travels in the URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceIsbn {
    pub user_id: Uuid,
    pub isbn: String,
}

/// Request payload for removing one book from a user's collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteBook {
    pub isbn: String,
    pub user_id: Uuid,
}

/// Structured error body the service attaches to failed requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub code: u32,
    pub message: String,
}
