//! Stateless HTTP request builder and response parser for the posts API.
//!
//! # Design
//! `PostClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! [`HttpRequest`] and a `parse_*` method that consumes an [`HttpResponse`].
//! The caller executes the actual round trip, keeping this layer
//! deterministic and free of I/O dependencies.
//!
//! Validation runs inside `build_create_post` / `build_update_post`, so a
//! blank field never produces a request at all.

use serde::Deserialize;
use url::form_urlencoded;

use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{ListSort, NewPost, Post, PostPatch, SearchQuery};

/// Synchronous, stateless client for the posts API.
///
/// Builds [`HttpRequest`] values and parses [`HttpResponse`] values without
/// touching the network. The workflow layer constructs one per operation
/// from whatever base URL the user has configured at that moment.
#[derive(Debug, Clone)]
pub struct PostClient {
    base_url: String,
}

impl PostClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_posts(&self, sort: Option<&ListSort>) -> HttpRequest {
        let mut url = format!("{}/posts", self.base_url);
        if let Some(sort) = sort {
            let query = form_urlencoded::Serializer::new(String::new())
                .append_pair("sort", sort.field.as_str())
                .append_pair("direction", sort.direction.as_str())
                .finish();
            url.push('?');
            url.push_str(&query);
        }
        HttpRequest {
            method: HttpMethod::Get,
            url,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_search_posts(&self, query: &SearchQuery) -> HttpRequest {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if let Some(title) = &query.title {
            serializer.append_pair("title", title);
        }
        if let Some(content) = &query.content {
            serializer.append_pair("content", content);
        }
        let encoded = serializer.finish();

        let mut url = format!("{}/posts/search", self.base_url);
        if !encoded.is_empty() {
            url.push('?');
            url.push_str(&encoded);
        }
        HttpRequest {
            method: HttpMethod::Get,
            url,
            headers: Vec::new(),
            body: None,
        }
    }

    /// Validates `input` first; a blank field fails without building any
    /// request.
    pub fn build_create_post(&self, input: &NewPost) -> Result<HttpRequest, ClientError> {
        input.validate()?;
        let body =
            serde_json::to_string(input).map_err(|e| ClientError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/posts", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// Validates provided fields first; a patch that supplies a blank value
    /// fails without building any request.
    pub fn build_update_post(&self, id: i64, patch: &PostPatch) -> Result<HttpRequest, ClientError> {
        patch.validate()?;
        let body =
            serde_json::to_string(patch).map_err(|e| ClientError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            url: format!("{}/posts/{id}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_post(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: format!("{}/posts/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Any status other than 200 is a load failure; the body is not
    /// inspected on that path.
    pub fn parse_list_posts(&self, response: HttpResponse) -> Result<Vec<Post>, ClientError> {
        if response.status != 200 {
            return Err(ClientError::Load {
                status: response.status,
            });
        }
        serde_json::from_str(&response.body).map_err(|e| ClientError::Deserialization(e.to_string()))
    }

    pub fn parse_search_posts(&self, response: HttpResponse) -> Result<Vec<Post>, ClientError> {
        self.parse_list_posts(response)
    }

    /// Accepts 200 or 201. On other statuses the error body is read for a
    /// server-supplied `{"error": …}` message, falling back to a generic one
    /// when the body is not JSON or lacks the field.
    pub fn parse_create_post(&self, response: HttpResponse) -> Result<Post, ClientError> {
        if !matches!(response.status, 200 | 201) {
            return Err(api_error(&response, "Error creating post"));
        }
        serde_json::from_str(&response.body).map_err(|e| ClientError::Deserialization(e.to_string()))
    }

    pub fn parse_update_post(&self, response: HttpResponse) -> Result<Post, ClientError> {
        if response.status != 200 {
            return Err(api_error(&response, "Error updating post"));
        }
        serde_json::from_str(&response.body).map_err(|e| ClientError::Deserialization(e.to_string()))
    }

    /// A 200 must carry a JSON `{"message": …}` body; a bare 204 is also
    /// accepted as success. Anything else is a delete failure with a generic
    /// message.
    pub fn parse_delete_post(&self, response: HttpResponse) -> Result<Option<String>, ClientError> {
        match response.status {
            200 => {
                #[derive(Deserialize)]
                struct DeleteAck {
                    message: String,
                }
                serde_json::from_str::<DeleteAck>(&response.body)
                    .map(|ack| Some(ack.message))
                    .map_err(|e| ClientError::Deserialization(e.to_string()))
            }
            204 => Ok(None),
            status => Err(ClientError::Delete { status }),
        }
    }
}

/// Pull the server's `{"error": …}` message out of a failure body.
fn api_error(response: &HttpResponse, fallback: &str) -> ClientError {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: String,
    }
    let message = serde_json::from_str::<ErrorBody>(&response.body)
        .map(|b| b.error)
        .unwrap_or_else(|_| fallback.to_string());
    ClientError::Api {
        status: response.status,
        message,
    }
}
