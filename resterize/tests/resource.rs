//! End-to-end tests for the generic resource router
//!
//! Drives the generated CRUD handlers over a real in-memory collection with
//! a minimal "note" entity, plus a failing collection for the opaque-error
//! path.

use std::sync::Arc;

use axum::body::Body;
use axum::Router;
use chrono::{DateTime, TimeZone, Utc};
use http::{header, Method, Request, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};
use tower::ServiceExt;

use resterize::resource::{self, Clock, EntityConfig, FieldError};
use resterize::store::{
    Collection, Document, Filter, MemoryCollection, StoreError, StoreOperation, StoreResult,
    ID_FIELD,
};

const TEXT_MAX: usize = 10;

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Debug, Deserialize)]
struct NoteDraft {
    text: Option<String>,
}

struct NoteConfig {
    clock: Arc<dyn Clock>,
}

impl EntityConfig for NoteConfig {
    type Input = NoteDraft;
    type Public = Value;

    fn name(&self) -> &'static str {
        "note"
    }

    fn validate(&self, input: &NoteDraft, _creating: bool) -> Vec<FieldError> {
        match &input.text {
            Some(text) if text.chars().count() > TEXT_MAX => {
                vec![FieldError::too_long("text", TEXT_MAX)]
            }
            _ => vec![],
        }
    }

    fn prepare(&self, input: NoteDraft, creating: bool) -> Document {
        let now = self.clock.now();
        let mut fields = Document::new();
        if creating {
            fields.insert("createdAt".to_string(), json!(now));
        }
        fields.insert("modifiedAt".to_string(), json!(now));
        if let Some(text) = input.text {
            fields.insert("text".to_string(), Value::String(text));
        }
        fields
    }

    fn publicize(&self, record: Document) -> Value {
        let mut view = serde_json::Map::new();
        if let Some(id) = record.get(ID_FIELD) {
            view.insert("id".to_string(), id.clone());
        }
        for key in ["createdAt", "modifiedAt", "text"] {
            if let Some(value) = record.get(key) {
                view.insert(key.to_string(), value.clone());
            }
        }
        Value::Object(view)
    }
}

fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 5, 4, 3, 2, 1).unwrap()
}

fn app(collection: impl Collection + 'static) -> Router {
    let config = NoteConfig {
        clock: Arc::new(FixedClock(fixed_time())),
    };
    Router::new().nest("/notes", resource::router(collection, config))
}

fn doc(value: Value) -> Document {
    value.as_object().cloned().unwrap()
}

fn request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

async fn send_json(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, req).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn list_returns_only_publicized_fields() {
    let collection = MemoryCollection::new();
    collection
        .create(doc(json!({"_id": "1", "secret": 42, "text": "one"})))
        .await
        .unwrap();
    collection
        .create(doc(json!({"_id": "2", "secret": 42})))
        .await
        .unwrap();

    let app = app(collection);
    let (status, body) = send_json(&app, request(Method::GET, "/notes", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"id": "1", "text": "one"},
            {"id": "2"},
        ])
    );
}

#[tokio::test]
async fn create_stamps_equal_timestamps_and_returns_the_view() {
    let app = app(MemoryCollection::new());
    let (status, body) = send_json(
        &app,
        request(Method::POST, "/notes", Some(json!({"text": "hi"}))),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["id"].is_string());
    let stamp = serde_json::to_value(fixed_time()).unwrap();
    assert_eq!(body["createdAt"], stamp);
    assert_eq!(body["modifiedAt"], stamp);
    assert_eq!(body["text"], json!("hi"));
}

#[tokio::test]
async fn create_validation_failure_is_400_and_writes_nothing() {
    let app = app(MemoryCollection::new());
    let (status, body) = send_json(
        &app,
        request(
            Method::POST,
            "/notes",
            Some(json!({"text": "way too long for a note"})),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["field"], json!("text"));
    assert_eq!(body["errors"][0]["code"], json!("MAX_LENGTH"));

    // the rejected payload never reached the store
    let (_, listed) = send_json(&app, request(Method::GET, "/notes", None)).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn fetch_unknown_id_is_404_with_empty_body() {
    let app = app(MemoryCollection::new());
    let (status, bytes) = send(&app, request(Method::GET, "/notes/42", None)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn update_merges_fields_and_preserves_creation_time() {
    let collection = MemoryCollection::new();
    collection
        .create(doc(json!({
            "_id": "n1",
            "createdAt": "2019-01-01T00:00:00Z",
            "modifiedAt": "2019-01-01T00:00:00Z",
            "text": "old",
            "secret": 42,
        })))
        .await
        .unwrap();

    let app = app(collection);
    let (status, body) = send_json(
        &app,
        request(Method::PUT, "/notes/n1", Some(json!({"text": "new"}))),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": "n1",
            "createdAt": "2019-01-01T00:00:00Z",
            "modifiedAt": serde_json::to_value(fixed_time()).unwrap(),
            "text": "new",
        })
    );
}

#[tokio::test]
async fn update_unknown_id_is_404() {
    let app = app(MemoryCollection::new());
    let (status, bytes) = send(
        &app,
        request(Method::PUT, "/notes/42", Some(json!({"text": "new"}))),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn remove_returns_the_deleted_view_then_404() {
    let collection = MemoryCollection::new();
    collection
        .create(doc(json!({"_id": "n1", "text": "bye", "secret": 42})))
        .await
        .unwrap();

    let app = app(collection);
    let (status, body) = send_json(&app, request(Method::DELETE, "/notes/n1", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": "n1", "text": "bye"}));

    let (status, _) = send(&app, request(Method::DELETE, "/notes/n1", None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_then_fetch_round_trips_the_public_view() {
    let app = app(MemoryCollection::new());
    let (_, created) = send_json(
        &app,
        request(Method::POST, "/notes", Some(json!({"text": "hi"}))),
    )
    .await;

    let id = created["id"].as_str().unwrap();
    let (status, fetched) =
        send_json(&app, request(Method::GET, &format!("/notes/{}", id), None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn responses_are_json() {
    let collection = MemoryCollection::new();
    collection
        .create(doc(json!({"_id": "1", "text": "one"})))
        .await
        .unwrap();

    let app = app(collection);
    let response = app
        .clone()
        .oneshot(request(Method::GET, "/notes", None))
        .await
        .unwrap();

    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
}

struct FailingCollection;

impl Collection for FailingCollection {
    fn id_filter(&self, id: &str) -> StoreResult<Filter> {
        Ok(Filter::eq(ID_FIELD, id))
    }

    async fn list(&self, _filter: Filter) -> StoreResult<Vec<Document>> {
        Err(StoreError::backend(StoreOperation::List, "store is down"))
    }

    async fn create(&self, _fields: Document) -> StoreResult<Document> {
        Err(StoreError::backend(StoreOperation::Create, "store is down"))
    }

    async fn find_one(&self, _filter: Filter) -> StoreResult<Option<Document>> {
        Err(StoreError::backend(StoreOperation::FindOne, "store is down"))
    }

    async fn update_one(&self, _filter: Filter, _fields: Document) -> StoreResult<Option<Document>> {
        Err(StoreError::backend(
            StoreOperation::UpdateOne,
            "store is down",
        ))
    }

    async fn delete_one(&self, _filter: Filter) -> StoreResult<Option<Document>> {
        Err(StoreError::backend(
            StoreOperation::DeleteOne,
            "store is down",
        ))
    }
}

#[tokio::test]
async fn storage_failure_renders_as_opaque_500() {
    let app = app(FailingCollection);

    let (status, bytes) = send(&app, request(Method::GET, "/notes", None)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(bytes.is_empty(), "backend detail must not reach the client");

    // writes fail the same way, after validation
    let (status, bytes) = send(
        &app,
        request(Method::POST, "/notes", Some(json!({"text": "hi"}))),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(bytes.is_empty());
}
