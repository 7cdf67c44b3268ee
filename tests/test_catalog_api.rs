//! End-to-end HTTP tests: bind the router to an ephemeral port, drive it with reqwest.

use async_trait::async_trait;
use course_catalog::{
    transport, CatalogService, CatalogStore, MemoryStore, NewSemester, NewUnit, Semester, Unit,
};
use reqwest::StatusCode;
use serde_json::{json, Value};
use std::sync::Arc;
use utoipa::OpenApi;

async fn spawn_server() -> Result<String, Box<dyn std::error::Error>> {
    spawn_server_with(Arc::new(MemoryStore::new())).await
}

async fn spawn_server_with(
    store: Arc<dyn CatalogStore>,
) -> Result<String, Box<dyn std::error::Error>> {
    let app_state = transport::http::AppState::new(CatalogService::new(store));
    let router = transport::http::create_router(app_state);

    // Bind to an ephemeral port to avoid conflicts between tests.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    Ok(format!("http://127.0.0.1:{}", port))
}

fn oop_semester() -> Value {
    json!({
        "title": "OOP",
        "description": "intro",
        "pattern": "2019 Pattern",
        "year": "SE",
        "sem": "1",
        "branch": "Computer Engineering",
        "university": "SPPU University",
        "syllabus": ["Classes", "Objects"]
    })
}

fn inheritance_unit() -> Value {
    json!({
        "title": "Inheritance",
        "branch": "Computer Engineering",
        "year": "SE",
        "sem": "1",
        "pattern": "2019 Pattern",
        "unitno": "2",
        "description": "Single and multiple inheritance",
        "url": "https://example.com/unit2.pdf",
        "youtube": ["https://www.youtube.com/watch?v=abc"],
        "question": ["Explain the diamond problem."]
    })
}

fn error_fields(body: &Value) -> Vec<String> {
    body["errors"]
        .as_array()
        .map(|errs| {
            errs.iter()
                .filter_map(|e| e["field"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[tokio::test]
async fn create_semester_echoes_fields_with_first_id() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_server().await?;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/semester", base_url))
        .json(&oop_semester())
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await?;

    let mut expected = oop_semester();
    expected["id"] = json!(1);
    assert_eq!(body, expected);

    let listed: Value = client
        .get(format!("{}/api/semesters", base_url))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(listed, json!([expected]));
    Ok(())
}

#[tokio::test]
async fn semester_without_syllabus_stores_explicit_null() -> Result<(), Box<dyn std::error::Error>>
{
    let base_url = spawn_server().await?;
    let client = reqwest::Client::new();

    let mut submission = oop_semester();
    submission.as_object_mut().unwrap().remove("syllabus");
    let resp = client
        .post(format!("{}/api/semester", base_url))
        .json(&submission)
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await?;
    assert!(body.as_object().unwrap().contains_key("syllabus"));
    assert_eq!(body["syllabus"], Value::Null);
    Ok(())
}

#[tokio::test]
async fn missing_fields_are_all_reported() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_server().await?;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/semester", base_url))
        .json(&json!({ "title": "OOP", "year": "SE" }))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await?;
    assert_eq!(body["message"], "Validation error");
    assert_eq!(
        error_fields(&body),
        vec!["description", "pattern", "sem", "branch", "university"]
    );

    let listed: Value = client
        .get(format!("{}/api/semesters", base_url))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(listed, json!([]));
    Ok(())
}

#[tokio::test]
async fn unit_url_must_be_drive_or_pdf() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_server().await?;
    let client = reqwest::Client::new();

    let mut submission = inheritance_unit();
    submission["url"] = json!("https://example.com/notes");
    let resp = client
        .post(format!("{}/api/unit", base_url))
        .json(&submission)
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await?;
    assert_eq!(error_fields(&body), vec!["url"]);
    assert_eq!(body["errors"][0]["message"], "Must be a Google Drive link or PDF URL");
    Ok(())
}

#[tokio::test]
async fn unit_videos_must_be_youtube() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_server().await?;
    let client = reqwest::Client::new();

    let mut submission = inheritance_unit();
    submission["youtube"] = json!(["https://vimeo.com/123"]);
    let resp = client
        .post(format!("{}/api/unit", base_url))
        .json(&submission)
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await?;
    assert_eq!(error_fields(&body), vec!["youtube"]);
    assert_eq!(body["errors"][0]["index"], 0);
    Ok(())
}

#[tokio::test]
async fn units_are_created_listed_and_fetched() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_server().await?;
    let client = reqwest::Client::new();

    for unitno in ["1", "2", "3"] {
        let mut submission = inheritance_unit();
        submission["unitno"] = json!(unitno);
        let resp = client
            .post(format!("{}/api/unit", base_url))
            .json(&submission)
            .send()
            .await?;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let listed: Value = client
        .get(format!("{}/api/units", base_url))
        .send()
        .await?
        .json()
        .await?;
    let units = listed.as_array().unwrap();
    assert_eq!(units.len(), 3);
    let ids: Vec<i64> = units.iter().map(|u| u["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    let unitnos: Vec<&str> = units.iter().map(|u| u["unitno"].as_str().unwrap()).collect();
    assert_eq!(unitnos, vec!["1", "2", "3"]);

    let resp = client.get(format!("{}/api/units/2", base_url)).send().await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let unit: Value = resp.json().await?;
    assert_eq!(unit["unitno"], "2");

    let resp = client.get(format!("{}/api/units/42", base_url)).send().await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await?;
    assert_eq!(body["message"], "Unit not found");

    let resp = client.get(format!("{}/api/semesters/abc", base_url)).send().await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn malformed_json_is_a_validation_error() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_server().await?;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/unit", base_url))
        .header("content-type", "application/json")
        .body("{\"title\": ")
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await?;
    assert_eq!(error_fields(&body), vec!["$root"]);

    let resp = client
        .post(format!("{}/api/semester", base_url))
        .json(&json!(["not", "an", "object"]))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await?;
    assert_eq!(body["errors"][0]["message"], "Expected object, received array");
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_semester_creations_get_distinct_ids() -> Result<(), Box<dyn std::error::Error>>
{
    let base_url = spawn_server().await?;
    let client = reqwest::Client::new();

    let url = format!("{}/api/semester", base_url);
    let mut second = oop_semester();
    second["title"] = json!("DSA");
    let (a, b) = tokio::join!(
        client.post(&url).json(&oop_semester()).send(),
        client.post(&url).json(&second).send()
    );
    let (a, b) = (a?, b?);
    assert_eq!(a.status(), StatusCode::CREATED);
    assert_eq!(b.status(), StatusCode::CREATED);
    let a: Value = a.json().await?;
    let b: Value = b.json().await?;

    let mut ids = vec![a["id"].as_i64().unwrap(), b["id"].as_i64().unwrap()];
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2]);

    let listed: Value = client
        .get(format!("{}/api/semesters", base_url))
        .send()
        .await?
        .json()
        .await?;
    let mut titles: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["title"].as_str().unwrap())
        .collect();
    titles.sort_unstable();
    assert_eq!(titles, vec!["DSA", "OOP"]);
    Ok(())
}

#[tokio::test]
async fn health_reports_memory_backend() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_server().await?;
    let resp = reqwest::get(format!("{}/health", base_url)).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await?;
    assert_eq!(body, json!({ "status": "ok", "backend": "memory" }));
    Ok(())
}

/// Store whose every call fails, standing in for a database that went away.
struct UnreachableStore;

#[async_trait]
impl CatalogStore for UnreachableStore {
    async fn create_semester(&self, _: NewSemester) -> anyhow::Result<Semester> {
        anyhow::bail!("connection refused: postgres://catalog:secret@db:5432")
    }
    async fn list_semesters(&self) -> anyhow::Result<Vec<Semester>> {
        anyhow::bail!("connection refused")
    }
    async fn get_semester(&self, _: i32) -> anyhow::Result<Option<Semester>> {
        anyhow::bail!("connection refused")
    }
    async fn create_unit(&self, _: NewUnit) -> anyhow::Result<Unit> {
        anyhow::bail!("connection refused")
    }
    async fn list_units(&self) -> anyhow::Result<Vec<Unit>> {
        anyhow::bail!("connection refused")
    }
    async fn get_unit(&self, _: i32) -> anyhow::Result<Option<Unit>> {
        anyhow::bail!("connection refused")
    }
    async fn ping(&self) -> anyhow::Result<()> {
        anyhow::bail!("connection refused")
    }
    fn backend(&self) -> &'static str {
        "postgres"
    }
}

#[tokio::test]
async fn storage_failures_return_an_opaque_500() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_server_with(Arc::new(UnreachableStore)).await?;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/semester", base_url))
        .json(&oop_semester())
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = resp.json().await?;
    assert_eq!(body, json!({ "message": "Internal server error" }));

    let resp = client.get(format!("{}/api/units", base_url)).send().await?;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = resp.json().await?;
    assert_eq!(body, json!({ "message": "Internal server error" }));

    let resp = reqwest::get(format!("{}/health", base_url)).await?;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = resp.json().await?;
    assert_eq!(body, json!({ "status": "unhealthy", "backend": "postgres" }));
    Ok(())
}

#[test]
fn openapi_document_references_request_and_error_schemas() -> Result<(), serde_json::Error> {
    let doc = serde_json::to_value(transport::http::ApiDoc::openapi())?;
    let schema_ref = |path: &str, method: &str, status: Option<&str>| {
        let op = &doc["paths"][path][method];
        let content = match status {
            Some(code) => &op["responses"][code]["content"],
            None => &op["requestBody"]["content"],
        };
        content["application/json"]["schema"]["$ref"].clone()
    };

    assert_eq!(
        schema_ref("/api/semester", "post", None),
        "#/components/schemas/NewSemester"
    );
    assert_eq!(
        schema_ref("/api/unit", "post", None),
        "#/components/schemas/NewUnit"
    );
    for (path, method, status) in [
        ("/api/semester", "post", "400"),
        ("/api/unit", "post", "500"),
        ("/api/semesters/{id}", "get", "404"),
        ("/api/units/{id}", "get", "404"),
    ] {
        assert_eq!(
            schema_ref(path, method, Some(status)),
            "#/components/schemas/ErrorResponse",
            "{} {} {}",
            method,
            path,
            status
        );
    }
    assert!(doc["components"]["schemas"]["ErrorResponse"].is_object());
    Ok(())
}
