//! Wire headers sent by the client

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use ip_client::{ProjectApi, ProjectClient};
use ip_core::config::ClientConfig;
use ip_core::ProjectId;
use ip_models::{CreatedProject, ProgressReport, Project, ProjectBasicInfo, ProjectUpdate};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

#[derive(Debug, Clone)]
struct SeenRequest {
    method: Method,
    path: String,
    content_type: Option<String>,
}

type Seen = Arc<Mutex<Vec<SeenRequest>>>;

/// Records every request and answers it the way the service would
async fn record(State(seen): State<Seen>, request: Request) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    seen.lock().await.push(SeenRequest {
        method: method.clone(),
        path: path.clone(),
        content_type,
    });

    if method == Method::POST && path == "/api/projects" {
        let created = CreatedProject {
            id: ProjectId::from("p1"),
        };
        (StatusCode::CREATED, Json(created)).into_response()
    } else if method == Method::GET {
        Json(Project::draft(ProjectId::from("p1"))).into_response()
    } else {
        StatusCode::NO_CONTENT.into_response()
    }
}

async fn spawn_recorder() -> (ProjectClient, Seen) {
    let seen = Seen::default();
    let app = Router::new().fallback(record).with_state(seen.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = ProjectClient::new(&ClientConfig::new(format!("http://{}/api", addr))).unwrap();
    (client, seen)
}

#[tokio::test]
async fn test_every_operation_sends_json_content_type() {
    let (client, seen) = spawn_recorder().await;

    let id = client.create_project().await.unwrap().id;
    client
        .update_project(&id, &ProjectUpdate::new().with_basic_info(ProjectBasicInfo::named("Bridge A")))
        .await
        .unwrap();
    client.submit_project(&id).await.unwrap();
    client
        .submit_progress_report(&id, &ProgressReport::default())
        .await
        .unwrap();
    let project = client.get_project(&id).await.unwrap();
    assert_eq!(project.id, Some(id));

    let seen = seen.lock().await;
    let calls: Vec<(Method, &str)> = seen
        .iter()
        .map(|request| (request.method.clone(), request.path.as_str()))
        .collect();
    assert_eq!(
        calls,
        vec![
            (Method::POST, "/api/projects"),
            (Method::PUT, "/api/projects/p1"),
            (Method::POST, "/api/projects/p1/submit"),
            (Method::POST, "/api/projects/p1/progress-reports"),
            (Method::GET, "/api/projects/p1"),
        ]
    );
    for request in seen.iter() {
        assert_eq!(
            request.content_type.as_deref(),
            Some("application/json"),
            "{} {}",
            request.method,
            request.path
        );
    }
}
