//! Exercises `HttpIndexService` against an in-process axum backend.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use ragdesk::app::{Coordinator, PhaseStatus, View};
use ragdesk::domain::{PageLabel, PendingFile, Phase, SearchQuery, TransportCause};
use ragdesk::service::{HttpIndexService, IndexService};
use ragdesk::transfer::encode_upload;
use serde_json::{json, Value};
use std::io::Write;
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;

#[derive(Debug, Clone, PartialEq, Eq)]
struct ReceivedPart {
    field: String,
    file_name: Option<String>,
    len: usize,
}

#[derive(Clone, Default)]
struct Recorded {
    parts: Arc<Mutex<Vec<ReceivedPart>>>,
    queries: Arc<Mutex<Vec<Value>>>,
}

async fn index(State(recorded): State<Recorded>, mut multipart: Multipart) -> Json<Value> {
    let mut count = 0;
    while let Some(field) = multipart.next_field().await.unwrap() {
        let part = ReceivedPart {
            field: field.name().unwrap_or_default().to_string(),
            file_name: field.file_name().map(str::to_string),
            len: 0,
        };
        let bytes = field.bytes().await.unwrap();
        recorded.parts.lock().unwrap().push(ReceivedPart { len: bytes.len(), ..part });
        count += 1;
    }
    Json(json!({"success": true, "message": "indexed", "document_count": count}))
}

async fn documents() -> Json<Value> {
    Json(json!([
        {
            "filename": "a.pdf",
            "file_size": "2048",
            "file_type": "application/pdf",
            "pages": ["iv", "1", "2"],
            "creation_date": "2024-05-01",
            "last_modified_date": "2024-05-02",
            "file_path": "/srv/docs/a.pdf",
            "text_chunks": [{"page": "1", "text": "Invoice totals for May"}]
        },
        {"filename": "b.txt", "file_size": 12}
    ]))
}

async fn search(State(recorded): State<Recorded>, Json(body): Json<Value>) -> Json<Value> {
    recorded.queries.lock().unwrap().push(body);
    Json(json!(["first hit", "second hit", "third hit"]))
}

/// Reads the whole upload, then refuses it.
async fn reject_upload(mut multipart: Multipart) -> (StatusCode, &'static str) {
    while let Some(field) = multipart.next_field().await.unwrap() {
        field.bytes().await.unwrap();
    }
    (StatusCode::BAD_REQUEST, "unsupported file type")
}

fn backend(recorded: Recorded) -> Router {
    Router::new()
        .route("/index/", post(index))
        .route("/documents", get(documents))
        .route("/search", post(search))
        .route("/health/", get(|| async { "ok" }))
        .with_state(recorded)
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn temp_file(suffix: &str, contents: &[u8]) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents).unwrap();
    file
}

#[tokio::test]
async fn upload_sends_one_files_field_per_file() {
    let recorded = Recorded::default();
    let base_url = serve(backend(recorded.clone())).await;
    let service = HttpIndexService::new(&base_url, None).unwrap();

    let temp = [
        temp_file(".pdf", b"%PDF-1.4 one"),
        temp_file(".txt", b"two"),
        temp_file(".md", b"# three"),
    ];
    let files: Vec<PendingFile> = temp.iter().map(|f| PendingFile::from_path(f.path()).unwrap()).collect();

    let payload = encode_upload(&files).await.unwrap();
    service.submit_for_indexing(payload).await.unwrap();

    let parts = recorded.parts.lock().unwrap().clone();
    assert_eq!(parts.len(), 3);
    assert!(parts.iter().all(|part| part.field == "files"));
    let names: Vec<_> = parts.iter().map(|part| part.file_name.clone().unwrap()).collect();
    let expected: Vec<_> = files.iter().map(|file| file.name.clone()).collect();
    assert_eq!(names, expected);
    assert_eq!(parts.iter().map(|part| part.len).collect::<Vec<_>>(), vec![12, 3, 7]);
}

#[tokio::test]
async fn documents_decode_loose_records() {
    let base_url = serve(backend(Recorded::default())).await;
    let service = HttpIndexService::new(&format!("{base_url}/"), None).unwrap();

    let documents = service.list_indexed_documents().await.unwrap();

    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0].filename, "a.pdf");
    assert_eq!(documents[0].file_size_bytes, 2048);
    assert_eq!(
        documents[0].pages,
        vec![PageLabel::Label("iv".to_string()), PageLabel::Number(1), PageLabel::Number(2)]
    );
    assert_eq!(documents[0].storage_path, "/srv/docs/a.pdf");
    assert_eq!(documents[0].text_chunks[0].page, Some(PageLabel::Number(1)));
    assert_eq!(documents[1].filename, "b.txt");
    assert!(documents[1].pages.is_empty());
}

#[tokio::test]
async fn search_posts_query_and_limit() {
    let recorded = Recorded::default();
    let base_url = serve(backend(recorded.clone())).await;
    let service = HttpIndexService::new(&base_url, None).unwrap();

    let query = SearchQuery::new("  invoice totals ", 3).unwrap();
    let results = service.run_query(&query).await.unwrap();

    assert_eq!(results, vec!["first hit", "second hit", "third hit"]);
    assert_eq!(
        recorded.queries.lock().unwrap().as_slice(),
        &[json!({"query": "invoice totals", "limit": 3})]
    );
}

#[tokio::test]
async fn search_accepts_wrapped_results() {
    let router = Router::new().route(
        "/search",
        post(|| async { Json(json!({"documents": ["only hit"]})) }),
    );
    let base_url = serve(router).await;
    let service = HttpIndexService::new(&base_url, None).unwrap();

    let results = service.run_query(&SearchQuery::new("cats", 5).unwrap()).await.unwrap();
    assert_eq!(results, vec!["only hit"]);
}

#[tokio::test]
async fn non_success_status_is_a_status_error() {
    let router = Router::new().route(
        "/documents",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "index unavailable") }),
    );
    let base_url = serve(router).await;
    let service = HttpIndexService::new(&base_url, None).unwrap();

    let error = service.list_indexed_documents().await.unwrap_err();
    assert_eq!(error.phase, Phase::ListDocuments);
    assert_eq!(
        error.cause,
        TransportCause::Status {
            code: 500,
            body: "index unavailable".to_string()
        }
    );
}

#[tokio::test]
async fn rejected_upload_is_an_upload_status_error() {
    let base_url = serve(Router::new().route("/index/", post(reject_upload))).await;
    let service = HttpIndexService::new(&base_url, None).unwrap();

    let file = temp_file(".exe", b"MZ");
    let payload = encode_upload(&[PendingFile::from_path(file.path()).unwrap()]).await.unwrap();
    let error = service.submit_for_indexing(payload).await.unwrap_err();

    assert_eq!(error.phase, Phase::Upload);
    assert_eq!(
        error.cause,
        TransportCause::Status {
            code: 400,
            body: "unsupported file type".to_string()
        }
    );
}

#[tokio::test]
async fn unreachable_backend_fails_the_upload() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let service = HttpIndexService::new(&format!("http://{addr}"), None).unwrap();

    let file = temp_file(".pdf", b"%PDF");
    let payload = encode_upload(&[PendingFile::from_path(file.path()).unwrap()]).await.unwrap();
    let error = service.submit_for_indexing(payload).await.unwrap_err();

    assert_eq!(error.phase, Phase::Upload);
    assert!(matches!(error.cause, TransportCause::Network(_)));
}

#[tokio::test]
async fn rejected_upload_keeps_selection_and_view() {
    let base_url = serve(Router::new().route("/index/", post(reject_upload))).await;
    let service = Arc::new(HttpIndexService::new(&base_url, None).unwrap());
    let mut coordinator = Coordinator::new(service);

    let a = temp_file(".pdf", b"a");
    let b = temp_file(".pdf", b"b");
    let files = vec![PendingFile::from_path(a.path()).unwrap(), PendingFile::from_path(b.path()).unwrap()];
    coordinator.select_files(files.clone()).unwrap();
    coordinator.start_upload(files.clone()).await.unwrap();

    let state = coordinator.state();
    assert_eq!(state.upload.status, PhaseStatus::Failed);
    assert!(state.upload.last_error.as_deref().unwrap().contains("400"));
    assert_eq!(state.pending_files, files);
    assert_eq!(state.active_view, View::Upload);
}

#[tokio::test]
async fn wrong_body_shape_is_malformed() {
    let router = Router::new()
        .route("/documents", get(|| async { Json(json!({"not": "a list"})) }))
        .route("/search", post(|| async { Json(json!([1, 2, 3])) }));
    let base_url = serve(router).await;
    let service = HttpIndexService::new(&base_url, None).unwrap();

    let error = service.list_indexed_documents().await.unwrap_err();
    assert_eq!(error.phase, Phase::ListDocuments);
    assert!(matches!(error.cause, TransportCause::Malformed(_)));

    let error = service.run_query(&SearchQuery::new("cats", 5).unwrap()).await.unwrap_err();
    assert_eq!(error.phase, Phase::Search);
    assert!(matches!(error.cause, TransportCause::Malformed(_)));
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let service = HttpIndexService::new(&format!("http://{addr}"), None).unwrap();

    let error = service.list_indexed_documents().await.unwrap_err();
    assert!(matches!(error.cause, TransportCause::Network(_)));
    assert!(!service.check_health().await);
}

#[tokio::test]
async fn health_probe_reports_reachable_backend() {
    let base_url = serve(backend(Recorded::default())).await;
    let service = HttpIndexService::new(&base_url, None).unwrap();
    assert!(service.check_health().await);
}

#[tokio::test]
async fn health_probe_rejects_error_status() {
    let router = Router::new().route("/health/", get(|| async { StatusCode::SERVICE_UNAVAILABLE }));
    let base_url = serve(router).await;
    let service = HttpIndexService::new(&base_url, None).unwrap();
    assert!(!service.check_health().await);
}

#[tokio::test]
async fn coordinator_round_trip_over_http() {
    let recorded = Recorded::default();
    let base_url = serve(backend(recorded.clone())).await;
    let service = Arc::new(HttpIndexService::new(&base_url, None).unwrap());
    let mut coordinator = Coordinator::new(service);

    let a = temp_file(".pdf", b"a");
    let b = temp_file(".pdf", b"b");
    let files = vec![PendingFile::from_path(a.path()).unwrap(), PendingFile::from_path(b.path()).unwrap()];

    coordinator.start_upload(files).await.unwrap();
    assert_eq!(coordinator.state().upload.status, PhaseStatus::Succeeded);
    assert_eq!(recorded.parts.lock().unwrap().len(), 2);

    coordinator.refresh_documents().await.unwrap();
    assert_eq!(coordinator.state().documents.len(), 2);

    coordinator.run_search("invoice totals", 3).await.unwrap();
    assert_eq!(coordinator.state().results, vec!["first hit", "second hit", "third hit"]);
}
