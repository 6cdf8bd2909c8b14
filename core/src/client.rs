//! Stateless HTTP request builders and response parsers for the account and
//! book store endpoints.
//!
//! # Design
//! `UserClient` and `BookClient` hold only an `ApiConfig` and carry no
//! mutable state between calls. Every operation has a `build_*` method that
//! produces an `HttpRequest`; the book operations also have a `parse_*`
//! method that consumes an `HttpResponse`. The caller executes the actual
//! HTTP round-trip, keeping the core deterministic and free of I/O
//! dependencies. All request construction funnels through one constructor
//! so the default headers and the optional bearer token are merged in a
//! single place.

use uuid::Uuid;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{
    AddBooks, Book, BookList, Credentials, DeleteBook, ErrorBody, ReplaceIsbn, UserAccount,
};

/// Request builders for the account endpoints.
///
/// This layer never interprets responses; provisioning checks live in
/// `UserService`.
#[derive(Debug, Clone)]
pub struct UserClient {
    config: ApiConfig,
}

impl UserClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn build_create(&self, credentials: &Credentials) -> Result<HttpRequest, ApiError> {
        let body = to_body(credentials)?;
        Ok(request(
            HttpMethod::Post,
            self.config.user_url("User"),
            None,
            Some(body),
        ))
    }

    pub fn build_login(&self, credentials: &Credentials) -> Result<HttpRequest, ApiError> {
        let body = to_body(credentials)?;
        Ok(request(
            HttpMethod::Post,
            self.config.user_url("GenerateToken"),
            None,
            Some(body),
        ))
    }

    pub fn build_remove(&self, token: Option<&str>, user_id: Uuid) -> HttpRequest {
        request(
            HttpMethod::Delete,
            self.config.user_url(&format!("GenerateToken/{user_id}")),
            token,
            None,
        )
    }
}

/// Request builders and response parsers for the book store endpoints.
///
/// `token` is optional on every builder so callers can exercise the
/// unauthorized paths; the service rejects tokenless calls with 401.
#[derive(Debug, Clone)]
pub struct BookClient {
    config: ApiConfig,
}

impl BookClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn build_create(
        &self,
        token: Option<&str>,
        input: &AddBooks,
    ) -> Result<HttpRequest, ApiError> {
        let body = to_body(input)?;
        Ok(request(
            HttpMethod::Post,
            self.config.book_url("Books"),
            token,
            Some(body),
        ))
    }

    pub fn build_get_by_isbn(&self, token: Option<&str>, isbn: &str) -> HttpRequest {
        request(
            HttpMethod::Get,
            self.config.book_url(&format!("Book/?ISBN={isbn}")),
            token,
            None,
        )
    }

    pub fn build_update(
        &self,
        token: Option<&str>,
        isbn: &str,
        input: &ReplaceIsbn,
    ) -> Result<HttpRequest, ApiError> {
        let body = to_body(input)?;
        Ok(request(
            HttpMethod::Put,
            self.config.book_url(&format!("Books/{isbn}")),
            token,
            Some(body),
        ))
    }

    pub fn build_delete(
        &self,
        token: Option<&str>,
        input: &DeleteBook,
    ) -> Result<HttpRequest, ApiError> {
        let body = to_body(input)?;
        Ok(request(
            HttpMethod::Delete,
            self.config.book_url("Book"),
            token,
            Some(body),
        ))
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<BookList, ApiError> {
        check_status(&response, 201)?;
        response.json()
    }

    pub fn parse_get_by_isbn(&self, response: HttpResponse) -> Result<Book, ApiError> {
        check_status(&response, 200)?;
        response.json()
    }

    pub fn parse_update(&self, response: HttpResponse) -> Result<UserAccount, ApiError> {
        check_status(&response, 200)?;
        response.json()
    }

    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)?;
        Ok(())
    }
}

fn to_body<T: serde::Serialize>(input: &T) -> Result<String, ApiError> {
    serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))
}

/// Assemble a request with the default headers, merging in the bearer token
/// when one is supplied.
fn request(
    method: HttpMethod,
    url: String,
    token: Option<&str>,
    body: Option<String>,
) -> HttpRequest {
    let mut headers = vec![
        ("content-type".to_string(), "application/json".to_string()),
        ("accept".to_string(), "*/*".to_string()),
    ];
    if let Some(token) = token {
        headers.push(("authorization".to_string(), format!("Bearer {token}")));
    }
    HttpRequest {
        method,
        path: url,
        headers,
        body,
    }
}

/// Map unexpected status codes to the appropriate `ApiError` variant. The
/// service attaches a `{code, message}` body to its failures; when that body
/// decodes, the full triple is surfaced.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if let Ok(error) = response.json::<ErrorBody>() {
        return Err(ApiError::ErrorResponse {
            status: response.status,
            code: error.code,
            message: error.message,
        });
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::IsbnItem;

    fn config() -> ApiConfig {
        ApiConfig::new("http://localhost:3000", "Account/v1", "BookStore/v1")
    }

    fn credentials() -> Credentials {
        Credentials {
            user_name: "testuser".to_string(),
            password: "P@ssw0rd".to_string(),
        }
    }

    #[test]
    fn build_create_user_produces_correct_request() {
        let req = UserClient::new(config()).build_create(&credentials()).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/Account/v1/User");
        assert_eq!(req.header("content-type"), Some("application/json"));
        assert_eq!(req.header("accept"), Some("*/*"));
        assert!(req.header("authorization").is_none());
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["userName"], "testuser");
        assert_eq!(body["password"], "P@ssw0rd");
    }

    #[test]
    fn build_login_targets_generate_token() {
        let req = UserClient::new(config()).build_login(&credentials()).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/Account/v1/GenerateToken");
        assert!(req.header("authorization").is_none());
    }

    #[test]
    fn build_remove_user_carries_bearer_token() {
        let id = Uuid::nil();
        let req = UserClient::new(config()).build_remove(Some("tok-123"), id);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(
            req.path,
            "http://localhost:3000/Account/v1/GenerateToken/00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(req.header("authorization"), Some("Bearer tok-123"));
        assert!(req.body.is_none());
    }

    #[test]
    fn build_create_books_produces_correct_request() {
        let input = AddBooks {
            user_id: Uuid::nil(),
            collection_of_isbns: vec![IsbnItem {
                isbn: "9781449325862".to_string(),
            }],
        };
        let req = BookClient::new(config())
            .build_create(Some("tok-123"), &input)
            .unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/BookStore/v1/Books");
        assert_eq!(req.header("authorization"), Some("Bearer tok-123"));
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["userId"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(body["collectionOfIsbns"][0]["isbn"], "9781449325862");
    }

    #[test]
    fn build_create_books_without_token_omits_authorization() {
        let input = AddBooks {
            user_id: Uuid::nil(),
            collection_of_isbns: Vec::new(),
        };
        let req = BookClient::new(config()).build_create(None, &input).unwrap();
        assert!(req.header("authorization").is_none());
    }

    #[test]
    fn build_get_by_isbn_uses_query_parameter() {
        let req = BookClient::new(config()).build_get_by_isbn(Some("tok-123"), "9781449325862");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(
            req.path,
            "http://localhost:3000/BookStore/v1/Book/?ISBN=9781449325862"
        );
        assert!(req.body.is_none());
    }

    #[test]
    fn build_update_puts_replacement_in_body() {
        let input = ReplaceIsbn {
            user_id: Uuid::nil(),
            isbn: "9781449331818".to_string(),
        };
        let req = BookClient::new(config())
            .build_update(Some("tok-123"), "9781449325862", &input)
            .unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(
            req.path,
            "http://localhost:3000/BookStore/v1/Books/9781449325862"
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["userId"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(body["isbn"], "9781449331818");
    }

    #[test]
    fn build_delete_sends_isbn_and_user_in_body() {
        let input = DeleteBook {
            isbn: "9781449325862".to_string(),
            user_id: Uuid::nil(),
        };
        let req = BookClient::new(config())
            .build_delete(Some("tok-123"), &input)
            .unwrap();
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:3000/BookStore/v1/Book");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["isbn"], "9781449325862");
        assert_eq!(body["userId"], "00000000-0000-0000-0000-000000000000");
    }

    #[test]
    fn parse_create_success() {
        let response = HttpResponse {
            status: 201,
            headers: Vec::new(),
            body: r#"{"books":[{"isbn":"9781449325862"}]}"#.to_string(),
        };
        let list = BookClient::new(config()).parse_create(response).unwrap();
        assert_eq!(list.books[0].isbn, "9781449325862");
    }

    #[test]
    fn parse_create_unauthorized_surfaces_error_triple() {
        let response = HttpResponse {
            status: 401,
            headers: Vec::new(),
            body: r#"{"code":1200,"message":"User not authorized!"}"#.to_string(),
        };
        let err = BookClient::new(config()).parse_create(response).unwrap_err();
        match err {
            ApiError::ErrorResponse {
                status,
                code,
                message,
            } => {
                assert_eq!(status, 401);
                assert_eq!(code, 1200);
                assert_eq!(message, "User not authorized!");
            }
            other => panic!("expected ErrorResponse, got {other:?}"),
        }
    }

    #[test]
    fn parse_get_by_isbn_success() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: r#"{"isbn":"9781449325862","title":"Git Pocket Guide","author":"Richard E. Silverman","publisher":"O'Reilly Media","pages":234}"#.to_string(),
        };
        let book = BookClient::new(config()).parse_get_by_isbn(response).unwrap();
        assert_eq!(book.isbn, "9781449325862");
        assert_eq!(book.title, "Git Pocket Guide");
    }

    #[test]
    fn parse_get_by_isbn_unknown_isbn() {
        let response = HttpResponse {
            status: 400,
            headers: Vec::new(),
            body: r#"{"code":1205,"message":"ISBN supplied is not available in Books Collection!"}"#
                .to_string(),
        };
        let err = BookClient::new(config())
            .parse_get_by_isbn(response)
            .unwrap_err();
        assert!(matches!(
            err,
            ApiError::ErrorResponse {
                status: 400,
                code: 1205,
                ..
            }
        ));
    }

    #[test]
    fn parse_update_success() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: r#"{"userId":"00000000-0000-0000-0000-000000000000","userName":"testuser","books":[{"isbn":"9781449331818","title":"Learning JavaScript Design Patterns","author":"Addy Osmani","publisher":"O'Reilly Media","pages":254}]}"#.to_string(),
        };
        let account = BookClient::new(config()).parse_update(response).unwrap();
        assert_eq!(account.user_id, Uuid::nil());
        assert_eq!(account.books[0].isbn, "9781449331818");
    }

    #[test]
    fn parse_delete_success() {
        let response = HttpResponse {
            status: 204,
            headers: Vec::new(),
            body: String::new(),
        };
        assert!(BookClient::new(config()).parse_delete(response).is_ok());
    }

    #[test]
    fn parse_delete_missing_isbn() {
        let response = HttpResponse {
            status: 400,
            headers: Vec::new(),
            body: r#"{"code":1206,"message":"ISBN supplied is not available in User's Collection!"}"#
                .to_string(),
        };
        let err = BookClient::new(config()).parse_delete(response).unwrap_err();
        assert!(matches!(
            err,
            ApiError::ErrorResponse {
                status: 400,
                code: 1206,
                ..
            }
        ));
    }

    #[test]
    fn undecodable_error_body_falls_back_to_http_error() {
        let response = HttpResponse {
            status: 500,
            headers: Vec::new(),
            body: "internal error".to_string(),
        };
        let err = BookClient::new(config()).parse_create(response).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn parse_create_bad_json_on_success_status() {
        let response = HttpResponse {
            status: 201,
            headers: Vec::new(),
            body: "not json".to_string(),
        };
        let err = BookClient::new(config()).parse_create(response).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }
}
