use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub user_name: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedUser {
    #[serde(rename = "userID")]
    pub user_id: Uuid,
    pub user_name: String,
    pub books: Vec<Book>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: Option<String>,
    pub status: String,
    pub result: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddBooks {
    pub user_id: Uuid,
    pub collection_of_isbns: Vec<IsbnItem>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IsbnItem {
    pub isbn: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BookList {
    pub books: Vec<IsbnItem>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub pages: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub user_id: Uuid,
    pub user_name: String,
    pub books: Vec<Book>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceIsbn {
    pub user_id: Uuid,
    pub isbn: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteBook {
    pub isbn: String,
    pub user_id: Uuid,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: u32,
    pub message: String,
}

#[derive(Debug)]
struct UserRecord {
    user_name: String,
    password: String,
    isbns: Vec<String>,
}

/// In-memory service state: accounts, issued session tokens, and the fixed
/// book catalog users borrow from.
#[derive(Debug)]
pub struct Store {
    users: HashMap<Uuid, UserRecord>,
    tokens: HashMap<String, Uuid>,
    catalog: Vec<Book>,
}

impl Store {
    fn seeded() -> Self {
        Self {
            users: HashMap::new(),
            tokens: HashMap::new(),
            catalog: catalog(),
        }
    }
}

pub type Db = Arc<RwLock<Store>>;

/// The books the store knows about. Collection operations only accept ISBNs
/// from this list.
pub fn catalog() -> Vec<Book> {
    vec![
        Book {
            isbn: "9781449325862".to_string(),
            title: "Git Pocket Guide".to_string(),
            author: "Richard E. Silverman".to_string(),
            publisher: "O'Reilly Media".to_string(),
            pages: 234,
        },
        Book {
            isbn: "9781449331818".to_string(),
            title: "Learning JavaScript Design Patterns".to_string(),
            author: "Addy Osmani".to_string(),
            publisher: "O'Reilly Media".to_string(),
            pages: 254,
        },
        Book {
            isbn: "9781449365035".to_string(),
            title: "Speaking JavaScript".to_string(),
            author: "Axel Rauschmayer".to_string(),
            publisher: "O'Reilly Media".to_string(),
            pages: 460,
        },
        Book {
            isbn: "9781491904244".to_string(),
            title: "You Don't Know JS".to_string(),
            author: "Kyle Simpson".to_string(),
            publisher: "O'Reilly Media".to_string(),
            pages: 278,
        },
        Book {
            isbn: "9781593275846".to_string(),
            title: "Eloquent JavaScript, Second Edition".to_string(),
            author: "Marijn Haverbeke".to_string(),
            publisher: "No Starch Press".to_string(),
            pages: 472,
        },
    ]
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::seeded()));
    Router::new()
        .route("/Account/v1/User", post(create_user))
        .route("/Account/v1/GenerateToken", post(generate_token))
        .route("/Account/v1/GenerateToken/{user_id}", delete(remove_user))
        .route("/BookStore/v1/Books", post(add_books))
        .route("/BookStore/v1/Books/{isbn}", put(replace_isbn))
        .route("/BookStore/v1/Book/", get(get_book))
        .route("/BookStore/v1/Book", delete(delete_book))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

type ApiFailure = (StatusCode, Json<ErrorBody>);

fn failure(status: StatusCode, code: u32, message: &str) -> ApiFailure {
    (
        status,
        Json(ErrorBody {
            code,
            message: message.to_string(),
        }),
    )
}

/// Reject the request unless it carries a bearer token issued by
/// `generate_token` and not yet revoked.
async fn require_token(db: &Db, headers: &HeaderMap) -> Result<(), ApiFailure> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));
    let valid = match token {
        Some(token) => db.read().await.tokens.contains_key(token),
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(failure(
            StatusCode::UNAUTHORIZED,
            1200,
            "User not authorized!",
        ))
    }
}

async fn create_user(
    State(db): State<Db>,
    Json(input): Json<Credentials>,
) -> Result<(StatusCode, Json<CreatedUser>), ApiFailure> {
    if input.user_name.is_empty() || input.password.is_empty() {
        return Err(failure(
            StatusCode::BAD_REQUEST,
            1200,
            "UserName and Password required.",
        ));
    }
    let mut store = db.write().await;
    if store
        .users
        .values()
        .any(|user| user.user_name == input.user_name)
    {
        return Err(failure(StatusCode::NOT_ACCEPTABLE, 1204, "User exists!"));
    }
    let user_id = Uuid::new_v4();
    store.users.insert(
        user_id,
        UserRecord {
            user_name: input.user_name.clone(),
            password: input.password,
            isbns: Vec::new(),
        },
    );
    let created = CreatedUser {
        user_id,
        user_name: input.user_name,
        books: Vec::new(),
    };
    Ok((StatusCode::CREATED, Json(created)))
}

async fn generate_token(
    State(db): State<Db>,
    Json(input): Json<Credentials>,
) -> Result<Json<TokenResponse>, ApiFailure> {
    if input.user_name.is_empty() || input.password.is_empty() {
        return Err(failure(
            StatusCode::BAD_REQUEST,
            1200,
            "UserName and Password required.",
        ));
    }
    let mut store = db.write().await;
    let matched = store
        .users
        .iter()
        .find(|(_, user)| user.user_name == input.user_name && user.password == input.password)
        .map(|(id, _)| *id);
    let response = match matched {
        Some(user_id) => {
            let token = Uuid::new_v4().to_string();
            store.tokens.insert(token.clone(), user_id);
            TokenResponse {
                token: Some(token),
                status: "Success".to_string(),
                result: "User authorized successfully.".to_string(),
            }
        }
        None => TokenResponse {
            token: None,
            status: "Failed".to_string(),
            result: "User authorization failed.".to_string(),
        },
    };
    Ok(Json(response))
}

async fn remove_user(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(user_id): Path<Uuid>,
) -> Result<StatusCode, ApiFailure> {
    require_token(&db, &headers).await?;
    let mut store = db.write().await;
    if store.users.remove(&user_id).is_none() {
        return Err(failure(
            StatusCode::BAD_REQUEST,
            1207,
            "User Id not correct!",
        ));
    }
    store.tokens.retain(|_, owner| *owner != user_id);
    Ok(StatusCode::OK)
}

async fn add_books(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(input): Json<AddBooks>,
) -> Result<(StatusCode, Json<BookList>), ApiFailure> {
    require_token(&db, &headers).await?;
    let mut store = db.write().await;
    let unknown_isbn = input
        .collection_of_isbns
        .iter()
        .any(|item| !store.catalog.iter().any(|book| book.isbn == item.isbn));
    let Some(user) = store.users.get_mut(&input.user_id) else {
        return Err(failure(
            StatusCode::BAD_REQUEST,
            1207,
            "User Id not correct!",
        ));
    };
    if unknown_isbn {
        return Err(failure(
            StatusCode::BAD_REQUEST,
            1205,
            "ISBN supplied is not available in Books Collection!",
        ));
    }
    for item in &input.collection_of_isbns {
        if user.isbns.contains(&item.isbn) {
            return Err(failure(
                StatusCode::BAD_REQUEST,
                1210,
                "ISBN already present in the User's Collection!",
            ));
        }
    }
    for item in &input.collection_of_isbns {
        user.isbns.push(item.isbn.clone());
    }
    Ok((
        StatusCode::CREATED,
        Json(BookList {
            books: input.collection_of_isbns,
        }),
    ))
}

async fn get_book(
    State(db): State<Db>,
    headers: HeaderMap,
    Query(query): Query<BookQuery>,
) -> Result<Json<Book>, ApiFailure> {
    require_token(&db, &headers).await?;
    let store = db.read().await;
    store
        .catalog
        .iter()
        .find(|book| book.isbn == query.isbn)
        .cloned()
        .map(Json)
        .ok_or_else(|| {
            failure(
                StatusCode::BAD_REQUEST,
                1205,
                "ISBN supplied is not available in Books Collection!",
            )
        })
}

#[derive(Deserialize)]
struct BookQuery {
    #[serde(rename = "ISBN")]
    isbn: String,
}

async fn replace_isbn(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(isbn): Path<String>,
    Json(input): Json<ReplaceIsbn>,
) -> Result<Json<UserAccount>, ApiFailure> {
    require_token(&db, &headers).await?;
    let mut store = db.write().await;
    let replacement_known = store.catalog.iter().any(|book| book.isbn == input.isbn);
    let Some(user) = store.users.get_mut(&input.user_id) else {
        return Err(failure(
            StatusCode::BAD_REQUEST,
            1207,
            "User Id not correct!",
        ));
    };
    let Some(position) = user.isbns.iter().position(|owned| owned == &isbn) else {
        return Err(failure(
            StatusCode::BAD_REQUEST,
            1206,
            "ISBN supplied is not available in User's Collection!",
        ));
    };
    if user.isbns.contains(&input.isbn) {
        return Err(failure(
            StatusCode::BAD_REQUEST,
            1206,
            "ISBN supplied is not available in User's Collection!",
        ));
    }
    if !replacement_known {
        return Err(failure(
            StatusCode::BAD_REQUEST,
            1205,
            "ISBN supplied is not available in Books Collection!",
        ));
    }
    user.isbns[position] = input.isbn.clone();
    let user_name = user.user_name.clone();
    let isbns = user.isbns.clone();
    let books = isbns
        .iter()
        .filter_map(|owned| store.catalog.iter().find(|book| &book.isbn == owned))
        .cloned()
        .collect();
    Ok(Json(UserAccount {
        user_id: input.user_id,
        user_name,
        books,
    }))
}

async fn delete_book(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(input): Json<DeleteBook>,
) -> Result<StatusCode, ApiFailure> {
    require_token(&db, &headers).await?;
    let mut store = db.write().await;
    let Some(user) = store.users.get_mut(&input.user_id) else {
        return Err(failure(
            StatusCode::BAD_REQUEST,
            1207,
            "User Id not correct!",
        ));
    };
    let Some(position) = user.isbns.iter().position(|owned| owned == &input.isbn) else {
        return Err(failure(
            StatusCode::BAD_REQUEST,
            1206,
            "ISBN supplied is not available in User's Collection!",
        ));
    };
    user.isbns.remove(position);
    Ok(StatusCode::NO_CONTENT)
}
