//! HTTP tests for the doors client against a stub API.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use crate::error::{Action, ApiError};
use crate::routes::{DoorApi, DoorsClient};
use crate::store_models::{Door, DoorId, DoorStatus, Draft};

/// One PUT as the stub saw it.
#[derive(Clone, Debug)]
struct Received {
    id: String,
    content_type: Option<String>,
    body: Value,
}

#[derive(Clone, Default)]
struct Stub {
    puts: Arc<Mutex<Vec<Received>>>,
}

async fn get_door(Path(id): Path<String>) -> Response {
    match id.as_str() {
        "1" => Json(json!({"id": 1, "name": "Front Door", "status": "closed"})).into_response(),
        "garbled" => (StatusCode::OK, "{\"id\": 1, \"status\": \"ajar\"}").into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn put_door(
    State(stub): State<Stub>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: String,
) -> Response {
    let body: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
    stub.puts.lock().unwrap().push(Received {
        id: id.clone(),
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string),
        body: body.clone(),
    });
    if id == "500" {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    let name = body["name"].clone();
    let status = body["status"].clone();
    Json(json!({"id": 1, "name": name, "status": status})).into_response()
}

/// Test fixture serving the stub on a random local port.
struct TestFixture {
    client: DoorsClient,
    stub: Stub,
}

impl TestFixture {
    async fn new() -> Self {
        let stub = Stub::default();
        let app = Router::new()
            .route("/doors/{id}", get(get_door).put(put_door))
            .with_state(stub.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        TestFixture {
            client: DoorsClient::new(&format!("http://{}/doors/", addr)),
            stub,
        }
    }

    fn puts(&self) -> Vec<Received> {
        self.stub.puts.lock().unwrap().clone()
    }
}

#[tokio::test]
async fn test_fetch_door() {
    let fixture = TestFixture::new().await;

    let door = fixture.client.fetch_door(&DoorId::from("1")).await.unwrap();

    assert_eq!(
        door,
        Door {
            id: DoorId::Number(1),
            name: "Front Door".to_string(),
            status: DoorStatus::Closed,
        }
    );
}

#[tokio::test]
async fn test_fetch_not_found_uses_status_text() {
    let fixture = TestFixture::new().await;

    let err = fixture
        .client
        .fetch_door(&DoorId::from("2"))
        .await
        .unwrap_err();

    assert!(matches!(
        &err,
        ApiError::Status { action: Action::Fetch, reason } if reason == "Not Found"
    ));
    assert_eq!(err.to_string(), "Failed to fetch door: Not Found");
}

#[tokio::test]
async fn test_fetch_rejects_malformed_door() {
    let fixture = TestFixture::new().await;

    let err = fixture
        .client
        .fetch_door(&DoorId::from("garbled"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Decode { action: Action::Fetch, .. }));
}

#[tokio::test]
async fn test_update_sends_json_draft() {
    let fixture = TestFixture::new().await;
    let draft = Draft {
        name: "Back Door".to_string(),
        status: DoorStatus::Open,
    };

    let door = fixture
        .client
        .update_door(&DoorId::Number(1), &draft)
        .await
        .unwrap();

    assert_eq!(door.name, "Back Door");
    assert_eq!(door.status, DoorStatus::Open);

    let puts = fixture.puts();
    assert_eq!(puts.len(), 1);
    assert_eq!(puts[0].id, "1");
    assert_eq!(puts[0].content_type.as_deref(), Some("application/json"));
    assert_eq!(puts[0].body, json!({"name": "Back Door", "status": "open"}));
}

#[tokio::test]
async fn test_update_server_error() {
    let fixture = TestFixture::new().await;
    let draft = Draft {
        name: "Back Door".to_string(),
        status: DoorStatus::Closed,
    };

    let err = fixture
        .client
        .update_door(&DoorId::from("500"), &draft)
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Failed to update door: Internal Server Error"
    );
    assert_eq!(fixture.puts().len(), 1);
}

#[tokio::test]
async fn test_unreachable_api_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = DoorsClient::new(&format!("http://{}/doors", addr));

    let err = client.fetch_door(&DoorId::from("1")).await.unwrap_err();

    assert!(matches!(err, ApiError::Transport { action: Action::Fetch, .. }));
    assert!(err.to_string().starts_with("Failed to fetch door: "));
}

#[tokio::test]
async fn test_id_with_reserved_characters_stays_one_segment() {
    let fixture = TestFixture::new().await;
    let draft = Draft {
        name: "Back Door".to_string(),
        status: DoorStatus::Open,
    };

    fixture
        .client
        .update_door(&DoorId::from("a/b?c#d"), &draft)
        .await
        .unwrap();

    let puts = fixture.puts();
    assert_eq!(puts.len(), 1);
    assert_eq!(puts[0].id, "a/b?c#d");
}
