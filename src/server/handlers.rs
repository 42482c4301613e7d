//! HTTP handlers for the contact API.

use crate::agenda::Agenda;
use crate::models::{ContactRecord, ListOrder, NewContact};
use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error};

/// One agenda shared by every request.
pub type SharedAgenda = Arc<Mutex<Agenda>>;

/// State handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub agenda: SharedAgenda,
}

/// Build the router: `GET /contacts` and `POST /contacts`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/contacts", get(list_contacts).post(create_contact))
        .with_state(state)
}

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    order: Option<String>,
}

async fn list_contacts(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<Vec<ContactRecord>> {
    let order = params
        .order
        .as_deref()
        .map_or(ListOrder::Name, |o| o.parse().unwrap_or_default());

    let agenda = state.agenda.lock().await;
    let records = agenda
        .list(order)
        .iter()
        .map(|c| c.to_record())
        .collect();
    Json(records)
}

async fn create_contact(State(state): State<AppState>, body: Bytes) -> Response {
    let payload: NewContact = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(e) => {
            debug!(error = %e, "Request body is not a contact object");
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "error": format!("Invalid request body: {}", e) })),
            )
                .into_response();
        }
    };

    let mut agenda = state.agenda.lock().await;
    match agenda.add(payload) {
        Ok(contact) => (StatusCode::CREATED, Json(contact.to_record())).into_response(),
        Err(e) if e.is_client_error() => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": e.to_string() })),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Failed to add contact");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::JsonFileStore;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::Value;
    use tempfile::TempDir;
    use tower::ServiceExt as _;

    fn create_test_router(dir: &TempDir) -> (Router, SharedAgenda) {
        let store = JsonFileStore::open(dir.path().join("contacts.json")).unwrap();
        let agenda = Arc::new(Mutex::new(Agenda::with_store(Box::new(store)).unwrap()));
        let app = router(AppState {
            agenda: agenda.clone(),
        });
        (app, agenda)
    }

    async fn body_json(response: Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn post(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/contacts")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_post_creates_contact() {
        let dir = TempDir::new().unwrap();
        let (app, agenda) = create_test_router(&dir);

        let response = app
            .oneshot(post(
                r#"{"name":"Ana Silva","phone":"27 99999-0000","email":"ana@exemplo.com","birthday":"1995-03-10"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = body_json(response).await;
        assert_eq!(json["phone"], "27999990000");
        assert_eq!(json["birthday"], "1995-03-10");
        assert_eq!(agenda.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn test_post_invalid_returns_422() {
        let dir = TempDir::new().unwrap();
        let (app, agenda) = create_test_router(&dir);

        let response = app
            .oneshot(post(r#"{"name":"Ana","phone":"abc","email":"ana@x.com"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = body_json(response).await;
        assert!(json["error"].as_str().unwrap().contains("Invalid phone"));
        assert!(agenda.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_post_malformed_body_returns_422() {
        let dir = TempDir::new().unwrap();
        let (app, _) = create_test_router(&dir);

        let response = app.oneshot(post("not json")).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = body_json(response).await;
        assert!(json["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid request body"));
    }

    #[tokio::test]
    async fn test_post_numeric_birthday_is_dropped() {
        let dir = TempDir::new().unwrap();
        let (app, agenda) = create_test_router(&dir);

        let response = app
            .oneshot(post(
                r#"{"name":"Ana","phone":"27999990000","email":"a@x.com","birthday":19950310}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = body_json(response).await;
        assert_eq!(json["name"], "Ana");
        assert!(json.get("birthday").is_none());
        assert_eq!(agenda.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn test_get_lists_in_requested_order() {
        let dir = TempDir::new().unwrap();
        let (app, agenda) = create_test_router(&dir);
        {
            let mut agenda = agenda.lock().await;
            agenda
                .add(NewContact::new("Bruno", "27988881111", "b@x.com").with_birthday("1992-01-05"))
                .unwrap();
            agenda
                .add(NewContact::new("Ana", "27999990000", "a@x.com").with_birthday("1995-03-10"))
                .unwrap();
        }

        let request = Request::builder()
            .uri("/contacts")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json[0]["name"], "Ana");
        assert_eq!(json[1]["name"], "Bruno");

        let request = Request::builder()
            .uri("/contacts?order=birthday")
            .body(Body::empty())
            .unwrap();
        let json = body_json(app.oneshot(request).await.unwrap()).await;
        assert_eq!(json[0]["name"], "Bruno");
        assert_eq!(json[1]["name"], "Ana");
    }
}
