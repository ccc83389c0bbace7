//! HTTP client tests against an in-process rendering service

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use image::ImageFormat;
use labelkit_communication::{HttpRenderService, LogoFile, RenderService, ServiceError};
use labelkit_designer::{build_request, fields, LabelRow, RenderRequest, Template};
use labelkit_settings::{PrintOptions, ServiceSettings, StyleSettings};
use std::io::Cursor;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct ServerState {
    uploads: Arc<Mutex<Vec<(String, String, usize)>>>,
    requests: Arc<Mutex<Vec<serde_json::Value>>>,
    reject_upload: bool,
    reject_render: bool,
}

async fn upload_logo(
    State(state): State<ServerState>,
    mut multipart: Multipart,
) -> (StatusCode, String) {
    if state.reject_upload {
        return (
            StatusCode::PAYLOAD_TOO_LARGE,
            r#"{"detail": "Logo exceeds 2 MB"}"#.to_string(),
        );
    }
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or("").to_string();
        let content_type = field.content_type().unwrap_or("").to_string();
        let Ok(bytes) = field.bytes().await else {
            return (StatusCode::BAD_REQUEST, String::new());
        };
        state
            .uploads
            .lock()
            .unwrap()
            .push((name, content_type, bytes.len()));
    }
    (StatusCode::OK, r#"{"status": "ok"}"#.to_string())
}

async fn generate_label(
    State(state): State<ServerState>,
    Json(body): Json<serde_json::Value>,
) -> (StatusCode, Vec<u8>) {
    state.requests.lock().unwrap().push(body);
    if state.reject_render {
        return (StatusCode::UNPROCESSABLE_ENTITY, b"bad label size".to_vec());
    }
    (StatusCode::OK, b"%PDF-1.4\n%fake\n".to_vec())
}

async fn spawn_server(state: ServerState) -> HttpRenderService {
    let app = Router::new()
        .route("/upload_logo", post(upload_logo))
        .route("/generate_label", post(generate_label))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    HttpRenderService::new(&ServiceSettings {
        base_url: format!("http://{addr}/"),
        timeout_secs: 5,
        ..ServiceSettings::default()
    })
    .unwrap()
}

fn request() -> RenderRequest {
    let rows = [LabelRow::new()
        .with(fields::PERFUME_NAME, "Oud Royal")
        .with(fields::PRICE, "1500")
        .with(fields::MULTIPLIER, "2")];
    build_request(
        &Template::default(),
        &rows,
        &StyleSettings::default(),
        &PrintOptions {
            shop_name: "Maison Oud".to_string(),
            ..PrintOptions::default()
        },
    )
    .unwrap()
}

fn logo() -> LogoFile {
    let mut out = Cursor::new(Vec::new());
    image::RgbImage::new(8, 8)
        .write_to(&mut out, ImageFormat::Png)
        .unwrap();
    LogoFile::from_bytes("logo.png", out.into_inner()).unwrap()
}

#[tokio::test]
async fn test_upload_sends_single_file_field() {
    let state = ServerState::default();
    let service = spawn_server(state.clone()).await;
    let logo = logo();

    service.upload_logo(&logo).await.unwrap();

    let uploads = state.uploads.lock().unwrap().clone();
    assert_eq!(uploads.len(), 1);
    assert_eq!(uploads[0].0, "file");
    assert_eq!(uploads[0].1, "image/png");
    assert_eq!(uploads[0].2, logo.bytes().len());
}

#[tokio::test]
async fn test_upload_failure_carries_server_detail() {
    let service = spawn_server(ServerState {
        reject_upload: true,
        ..ServerState::default()
    })
    .await;

    let err = service.upload_logo(&logo()).await.unwrap_err();
    match err {
        ServiceError::UploadFailure { status, detail } => {
            assert_eq!(status, 413);
            assert_eq!(detail, "Logo exceeds 2 MB");
        }
        other => panic!("expected upload failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_render_posts_json_and_returns_pdf() {
    let state = ServerState::default();
    let service = spawn_server(state.clone()).await;

    let document = service.render(&request()).await.unwrap();
    assert!(document.is_pdf());

    let requests = state.requests.lock().unwrap().clone();
    assert_eq!(requests.len(), 1);
    let body = &requests[0];
    let width = body["labelWidth"].as_f64().unwrap();
    assert!((width - 113.39).abs() < 0.01);
    assert_eq!(body["copies"], 4);
    let price = body["rows"][0]["entries"]
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["id"] == "price")
        .unwrap();
    assert_eq!(price["text"], "1500 د.ج (×2)");
}

#[tokio::test]
async fn test_render_failure_carries_status_and_body() {
    let service = spawn_server(ServerState {
        reject_render: true,
        ..ServerState::default()
    })
    .await;

    let err = service.render(&request()).await.unwrap_err();
    match err {
        ServiceError::RenderServiceFailure { status, body } => {
            assert_eq!(status, 422);
            assert_eq!(body, "bad label size");
        }
        other => panic!("expected render failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_service_is_transport_error() {
    // Bind and drop to get a port nobody listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let service = HttpRenderService::new(&ServiceSettings {
        base_url: format!("http://{addr}"),
        timeout_secs: 2,
        ..ServiceSettings::default()
    })
    .unwrap();

    let err = service.render(&request()).await.unwrap_err();
    assert!(matches!(err, ServiceError::Transport(_)));
}
