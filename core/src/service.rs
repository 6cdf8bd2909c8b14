//! Fixture provisioning helper for test setup and teardown.
//!
//! # Design
//! `UserService` wraps the raw `UserClient` builders with the fixed contract
//! the test harness relies on: user creation must return 201, token
//! generation must return 200 with a `"Success"` payload, user removal must
//! return 200. Anything else becomes a typed `UserServiceError` so the
//! harness can abort the run instead of continuing with a broken fixture.

use uuid::Uuid;

use crate::client::UserClient;
use crate::config::ApiConfig;
use crate::error::{ApiError, UserServiceError};
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{CreatedUser, Credentials, TokenResponse};

/// Provisioning wrapper over the account endpoints.
#[derive(Debug, Clone)]
pub struct UserService {
    client: UserClient,
}

impl UserService {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: UserClient::new(config),
        }
    }

    pub fn build_create_user(&self, credentials: &Credentials) -> Result<HttpRequest, ApiError> {
        self.client.build_create(credentials)
    }

    pub fn parse_create_user(
        &self,
        response: HttpResponse,
    ) -> Result<CreatedUser, UserServiceError> {
        if response.status != 201 {
            return Err(UserServiceError::CreateUser {
                status: response.status,
            });
        }
        decode(&response)
    }

    pub fn build_authorize(&self, credentials: &Credentials) -> Result<HttpRequest, ApiError> {
        self.client.build_login(credentials)
    }

    /// Extract the session token from a login response.
    pub fn parse_authorize(&self, response: HttpResponse) -> Result<String, UserServiceError> {
        if response.status != 200 {
            return Err(UserServiceError::Authorize {
                status: response.status,
            });
        }
        let parsed: TokenResponse = decode(&response)?;
        match parsed.token {
            Some(token) if parsed.status == "Success" => Ok(token),
            _ => Err(UserServiceError::LoginRejected {
                status: parsed.status,
                result: parsed.result,
            }),
        }
    }

    pub fn build_remove_user(&self, token: &str, user_id: Uuid) -> HttpRequest {
        self.client.build_remove(Some(token), user_id)
    }

    pub fn parse_remove_user(&self, response: HttpResponse) -> Result<(), UserServiceError> {
        if response.status != 200 {
            return Err(UserServiceError::RemoveUser {
                status: response.status,
            });
        }
        Ok(())
    }
}

fn decode<T: serde::de::DeserializeOwned>(response: &HttpResponse) -> Result<T, UserServiceError> {
    serde_json::from_str(&response.body).map_err(|e| UserServiceError::UnexpectedBody(e.to_string()))
}
