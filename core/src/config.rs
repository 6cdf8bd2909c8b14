//! Endpoint configuration for the two remote services.
//!
//! # Design
//! The account and book store endpoints live under separate path roots of
//! one base URL. `ApiConfig` carries all three segments explicitly and is
//! passed to the clients at construction time; `from_env` is a thin loader
//! for deployments that configure through the process environment.

/// Base URL and path roots for the account and book store services.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
    user_path: String,
    book_path: String,
}

impl ApiConfig {
    pub fn new(base_url: &str, user_path: &str, book_path: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            user_path: user_path.trim_matches('/').to_string(),
            book_path: book_path.trim_matches('/').to_string(),
        }
    }

    /// Read `BASE_URL`, `API_USER_PATH` and `API_BOOK_PATH` from the process
    /// environment, falling back to a local server with the default roots.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let user_path = std::env::var("API_USER_PATH").unwrap_or_else(|_| "Account/v1".to_string());
        let book_path =
            std::env::var("API_BOOK_PATH").unwrap_or_else(|_| "BookStore/v1".to_string());
        Self::new(&base_url, &user_path, &book_path)
    }

    /// Full URL for an account-service endpoint.
    pub(crate) fn user_url(&self, endpoint: &str) -> String {
        format!("{}/{}/{}", self.base_url, self.user_path, endpoint)
    }

    /// Full URL for a book-store endpoint.
    pub(crate) fn book_url(&self, endpoint: &str) -> String {
        format!("{}/{}/{}", self.base_url, self.book_path, endpoint)
    }
}
