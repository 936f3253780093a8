//! In-process posts API used by integration tests and runnable as a bin.
//!
//! Ids are integers allocated as max(existing)+1, so they stay stable and
//! human-readable across a test run. Validation failures and unknown ids
//! answer with a JSON `{"error": …}` body; a successful delete answers 200
//! with a JSON `{"message": …}` body, because clients read a body on that
//! path.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
}

/// Incoming create/update body. Both fields optional so validation can
/// answer 400 with a field-specific message instead of a generic 422.
#[derive(Debug, Deserialize)]
pub struct PostBody {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub sort: Option<String>,
    pub direction: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub title: Option<String>,
    pub content: Option<String>,
}

pub type Db = Arc<RwLock<Vec<Post>>>;

type ErrorResponse = (StatusCode, Json<serde_json::Value>);

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/search", get(search_posts))
        .route("/posts/{id}", axum::routing::put(update_post).delete(delete_post))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn error_json(message: impl Into<String>) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "error": message.into() }))
}

fn bad_request(message: &str) -> ErrorResponse {
    (StatusCode::BAD_REQUEST, error_json(message))
}

fn not_found(id: i64) -> ErrorResponse {
    (
        StatusCode::NOT_FOUND,
        error_json(format!("Post with id {id} not found")),
    )
}

/// Trim both fields and reject blanks, title first.
fn validate(input: &PostBody) -> Result<(String, String), ErrorResponse> {
    let title = input.title.as_deref().unwrap_or("").trim();
    if title.is_empty() {
        return Err(bad_request("Title must not be empty"));
    }
    let content = input.content.as_deref().unwrap_or("").trim();
    if content.is_empty() {
        return Err(bad_request("Content must not be empty"));
    }
    Ok((title.to_string(), content.to_string()))
}

async fn list_posts(State(db): State<Db>, Query(params): Query<ListParams>) -> Json<Vec<Post>> {
    let mut posts = db.read().await.clone();

    // An unrecognized sort value is ignored rather than rejected.
    if let Some(sort) = params.sort.as_deref() {
        if matches!(sort, "title" | "content") {
            posts.sort_by_cached_key(|p| match sort {
                "title" => p.title.to_lowercase(),
                _ => p.content.to_lowercase(),
            });
            if params.direction.as_deref() == Some("desc") {
                posts.reverse();
            }
        }
    }
    Json(posts)
}

async fn search_posts(
    State(db): State<Db>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<Post>> {
    let title_query = params.title.unwrap_or_default().trim().to_lowercase();
    let content_query = params.content.unwrap_or_default().trim().to_lowercase();

    let posts = db.read().await;
    let matches = posts
        .iter()
        .filter(|p| {
            (title_query.is_empty() || p.title.to_lowercase().contains(&title_query))
                && (content_query.is_empty() || p.content.to_lowercase().contains(&content_query))
        })
        .cloned()
        .collect();
    Json(matches)
}

async fn create_post(
    State(db): State<Db>,
    Json(input): Json<PostBody>,
) -> Result<(StatusCode, Json<Post>), ErrorResponse> {
    let (title, content) = validate(&input)?;

    let mut posts = db.write().await;
    let id = posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;
    let post = Post { id, title, content };
    posts.push(post.clone());
    Ok((StatusCode::CREATED, Json(post)))
}

async fn update_post(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<PostBody>,
) -> Result<Json<Post>, ErrorResponse> {
    let mut posts = db.write().await;
    let post = posts
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or_else(|| not_found(id))?;

    // Merge, then validate the merged result the same way as a create.
    let merged = PostBody {
        title: Some(input.title.unwrap_or_else(|| post.title.clone())),
        content: Some(input.content.unwrap_or_else(|| post.content.clone())),
    };
    let (title, content) = validate(&merged)?;
    post.title = title;
    post.content = content;
    Ok(Json(post.clone()))
}

async fn delete_post(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, ErrorResponse> {
    let mut posts = db.write().await;
    let index = posts
        .iter()
        .position(|p| p.id == id)
        .ok_or_else(|| not_found(id))?;
    posts.remove(index);
    Ok(Json(serde_json::json!({
        "message": format!("Post with id {id} has been deleted successfully")
    })))
}
