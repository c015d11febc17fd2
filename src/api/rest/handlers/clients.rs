//! Client CRUD handlers

use crate::api::rest::state::AppState;
use crate::error::{ApiError, ApiResult};
use crate::model::{self, Client};
use axum::{
    extract::{Path, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

/// Create/update request body
#[derive(Debug, Deserialize)]
pub struct ClientPayload {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

/// JSON body carrying the original API's text/plain content type
fn plain_json<T: serde::Serialize>(value: &T) -> Response {
    let mut response = Json(value).into_response();
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    response
}

/// Name-length validation shared by create and update; violations answer 422
fn validate_names(payload: &ClientPayload) -> ApiResult<()> {
    model::validate_name("first_name", &payload.first_name)
        .map_err(|e| ApiError::Validation(e.to_string()))?;
    model::validate_name("last_name", &payload.last_name)
        .map_err(|e| ApiError::Validation(e.to_string()))?;
    Ok(())
}

/// List all clients
pub async fn list_clients(State(state): State<AppState>) -> ApiResult<Response> {
    let clients = state.storage.list_clients().await?;
    Ok(plain_json(&clients))
}

/// Look up a single client by id
pub async fn find_client(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let client = state
        .storage
        .find_client(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Client {} not found", id)))?;

    Ok(plain_json(&client))
}

/// Create a new client
///
/// A duplicate or malformed id answers 404, matching the published
/// contract, which does not distinguish rejection from absence.
pub async fn create_client(
    State(state): State<AppState>,
    Json(payload): Json<ClientPayload>,
) -> ApiResult<Response> {
    validate_names(&payload)?;
    model::validate_id(&payload.id)
        .map_err(|_| ApiError::NotFound("Client not created".to_string()))?;

    let client = Client {
        id: payload.id,
        first_name: payload.first_name,
        last_name: payload.last_name,
    };

    let created = state
        .storage
        .create_client(client)
        .await
        .map_err(|_| ApiError::NotFound("Client not created".to_string()))?;

    tracing::info!(client_id = %created.id, "Created client");

    Ok(plain_json(&created))
}

/// Update an existing client's names; the id is immutable
pub async fn update_client(
    State(state): State<AppState>,
    Json(payload): Json<ClientPayload>,
) -> ApiResult<Response> {
    validate_names(&payload)?;

    let updated = state
        .storage
        .update_client(&payload.id, payload.first_name, payload.last_name)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Client {} not found", payload.id)))?;

    tracing::info!(client_id = %updated.id, "Updated client");

    Ok(plain_json(&updated))
}

/// Delete a client by id
pub async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let deleted = state
        .storage
        .delete_client(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Client {} not found", id)))?;

    tracing::info!(client_id = %id, "Deleted client");

    Ok(plain_json(&deleted))
}

#[cfg(test)]
mod tests {
    use crate::api::create_router;
    use crate::api::rest::state::AppState;
    use crate::storage::InMemoryStore;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_router() -> Router {
        create_router(AppState::new(Arc::new(InMemoryStore::new())))
    }

    fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn delete_request(uri: &str) -> Request<Body> {
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn ana() -> serde_json::Value {
        serde_json::json!({"id": "123", "first_name": "Ana", "last_name": "Diaz"})
    }

    #[tokio::test]
    async fn full_crud_flow() {
        let app = test_router();

        // Create
        let response = app
            .clone()
            .oneshot(json_request("POST", "/clientes/crear/", ana()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, ana());

        // Duplicate create
        let response = app
            .clone()
            .oneshot(json_request("POST", "/clientes/crear/", ana()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // Search
        let response = app
            .clone()
            .oneshot(get_request("/clientes/buscar/123"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, ana());

        // Delete
        let response = app
            .clone()
            .oneshot(delete_request("/clientes/borrar/123/"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, ana());

        // Gone
        let response = app
            .clone()
            .oneshot(get_request("/clientes/buscar/123"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // Second delete fails too
        let response = app
            .oneshot(delete_request("/clientes/borrar/123/"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn create_with_malformed_id_is_404() {
        let app = test_router();

        for id in ["12", "1234", ""] {
            let body =
                serde_json::json!({"id": id, "first_name": "Ana", "last_name": "Diaz"});
            let response = app
                .clone()
                .oneshot(json_request("POST", "/clientes/crear/", body))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "id {:?}", id);
        }

        // Nothing reached the store
        let response = app.oneshot(get_request("/clientes/")).await.unwrap();
        assert_eq!(body_json(response).await, serde_json::json!([]));
    }

    #[tokio::test]
    async fn bad_name_lengths_are_422() {
        let app = test_router();

        let short = serde_json::json!({"id": "123", "first_name": "A", "last_name": "Diaz"});
        let response = app
            .clone()
            .oneshot(json_request("POST", "/clientes/crear/", short))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let long = serde_json::json!({
            "id": "123",
            "first_name": "Ana",
            "last_name": "a".repeat(31),
        });
        let response = app
            .clone()
            .oneshot(json_request("PUT", "/clientes/actualziar/", long))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn update_changes_names_but_not_id() {
        let app = test_router();

        app.clone()
            .oneshot(json_request("POST", "/clientes/crear/", ana()))
            .await
            .unwrap();

        let update = serde_json::json!({
            "id": "123",
            "first_name": "Anna",
            "last_name": "Diaz Lopez",
        });
        let response = app
            .clone()
            .oneshot(json_request("PUT", "/clientes/actualziar/", update.clone()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, update);

        let response = app
            .oneshot(get_request("/clientes/buscar/123"))
            .await
            .unwrap();
        assert_eq!(body_json(response).await, update);
    }

    #[tokio::test]
    async fn update_missing_client_is_404() {
        let app = test_router();

        let response = app
            .oneshot(json_request("PUT", "/clientes/actualziar/", ana()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let app = test_router();

        for (id, first, last) in [("111", "Ana", "Diaz"), ("222", "Bo", "Liu"), ("333", "Eva", "Marin")] {
            let body =
                serde_json::json!({"id": id, "first_name": first, "last_name": last});
            app.clone()
                .oneshot(json_request("POST", "/clientes/crear/", body))
                .await
                .unwrap();
        }

        let response = app.oneshot(get_request("/clientes/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let ids: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["111", "222", "333"]);
    }

    #[tokio::test]
    async fn success_responses_carry_plain_text_content_type() {
        let app = test_router();

        let response = app
            .clone()
            .oneshot(json_request("POST", "/clientes/crear/", ana()))
            .await
            .unwrap();
        assert_eq!(
            response.headers()["content-type"],
            "text/plain; charset=utf-8"
        );

        let response = app.oneshot(get_request("/clientes/")).await.unwrap();
        assert_eq!(
            response.headers()["content-type"],
            "text/plain; charset=utf-8"
        );
    }

    #[tokio::test]
    async fn health_endpoint_reports_healthy() {
        let app = test_router();

        let response = app.oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
    }
}
