//! Handler tests for Companies domain
//!
//! These drive the companies router with the in-memory repository:
//! - Request parsing (lenient JSON, list query, ObjectId path)
//! - Envelope serialization
//! - HTTP status codes

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_companies::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use test_utils::TestDataBuilder;
use tower::ServiceExt; // For oneshot()

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app() -> Router {
    handlers::router(CompanyService::new(InMemoryCompanyRepository::new()))
}

fn company_body(builder: &TestDataBuilder, n: u64) -> Value {
    json!({
        "razao_social": builder.name("company", &n.to_string()),
        "cnpj": builder.cnpj(n),
        "endereco": "Rua das Flores, 100",
        "email": builder.email(&format!("contato{n}")),
        "responsavel": "Maria Silva"
    })
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(request.body(body).unwrap()).await.unwrap();
    let status = response.status();
    (status, json_body(response.into_body()).await)
}

#[tokio::test]
async fn test_create_company_returns_201_with_id() {
    let app = app();
    let builder = TestDataBuilder::from_test_name("company_create_201");

    let (status, body) = send(&app, "POST", "/", Some(company_body(&builder, 1))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["ok"], true);
    test_utils::assertions::assert_object_id(body["id"].as_str().unwrap(), "created id");
}

#[tokio::test]
async fn test_create_company_missing_fields_returns_400() {
    let app = app();
    let builder = TestDataBuilder::from_test_name("company_missing");

    let mut body = company_body(&builder, 1);
    body.as_object_mut().unwrap().remove("email");

    let (status, response) = send(&app, "POST", "/", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["ok"], false);
    assert_eq!(response["msg"], "Missing required fields: email");

    let (_, list) = send(&app, "GET", "/", None).await;
    assert_eq!(list["pagination"]["total"], 0);
}

#[tokio::test]
async fn test_create_company_with_invalid_json_returns_400() {
    let app = app();

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_duplicate_cnpj_returns_409() {
    let app = app();
    let builder = TestDataBuilder::from_test_name("company_duplicate");

    let (status, _) = send(&app, "POST", "/", Some(company_body(&builder, 1))).await;
    assert_eq!(status, StatusCode::CREATED);

    let mut second = company_body(&builder, 2);
    second["cnpj"] = json!(builder.cnpj(1));
    let (status, body) = send(&app, "POST", "/", Some(second)).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["msg"], "CNPJ already registered");

    let (_, list) = send(&app, "GET", "/", None).await;
    assert_eq!(list["pagination"]["total"], 1);
}

#[tokio::test]
async fn test_list_companies_paginates_newest_first() {
    let app = app();
    let builder = TestDataBuilder::from_test_name("company_list");

    let mut ids = Vec::new();
    for n in 1..=3 {
        let (_, body) = send(&app, "POST", "/", Some(company_body(&builder, n))).await;
        ids.push(body["id"].as_str().unwrap().to_string());
    }

    let (status, body) = send(&app, "GET", "/?page=1&limit=2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert_eq!(body["pagination"], json!({ "page": 1, "limit": 2, "total": 3 }));
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["_id"], ids[2]);
    assert_eq!(data[1]["_id"], ids[1]);

    let (_, body) = send(&app, "GET", "/?page=2&limit=2", None).await;
    assert_eq!(body["data"][0]["_id"], ids[0]);
}

#[tokio::test]
async fn test_list_companies_malformed_pagination_uses_defaults() {
    let app = app();

    let (status, body) = send(&app, "GET", "/?page=abc&limit=-4", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["pagination"]["limit"], 1);
}

#[tokio::test]
async fn test_list_companies_search() {
    let app = app();
    let builder = TestDataBuilder::from_test_name("company_search");

    let mut acme = company_body(&builder, 1);
    acme["razao_social"] = json!("ACME Distribuidora");
    send(&app, "POST", "/", Some(acme)).await;
    send(&app, "POST", "/", Some(company_body(&builder, 2))).await;

    let (_, body) = send(&app, "GET", "/?q=acme", None).await;

    assert_eq!(body["pagination"]["total"], 1);
    assert_eq!(body["data"][0]["razao_social"], "ACME Distribuidora");
}

#[tokio::test]
async fn test_update_company() {
    let app = app();
    let builder = TestDataBuilder::from_test_name("company_update");

    let (_, created) = send(&app, "POST", "/", Some(company_body(&builder, 1))).await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/{id}"),
        Some(json!({ "responsavel": "João Souza" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true, "msg": "Company updated" }));

    let (_, list) = send(&app, "GET", "/", None).await;
    assert_eq!(list["data"][0]["responsavel"], "João Souza");
    assert_eq!(list["data"][0]["cnpj"], builder.cnpj(1));
}

#[tokio::test]
async fn test_update_with_invalid_id_returns_400() {
    let app = app();

    let (status, body) = send(&app, "PUT", "/not-an-id", Some(json!({ "email": "x" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "Invalid ID");
}

#[tokio::test]
async fn test_update_missing_company_returns_404() {
    let app = app();

    let (status, body) = send(
        &app,
        "PUT",
        "/665f1c2e9b1d4a3f2c8e7a10",
        Some(json!({ "email": "x@y.z" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["msg"], "Company not found");
}

#[tokio::test]
async fn test_empty_update_still_checks_existence() {
    let app = app();

    let (status, _) = send(&app, "PUT", "/665f1c2e9b1d4a3f2c8e7a10", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_company() {
    let app = app();
    let builder = TestDataBuilder::from_test_name("company_delete");

    let (_, created) = send(&app, "POST", "/", Some(company_body(&builder, 1))).await;
    send(&app, "POST", "/", Some(company_body(&builder, 2))).await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = send(&app, "DELETE", &format!("/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "Company deleted");

    let (_, list) = send(&app, "GET", "/", None).await;
    assert_eq!(list["pagination"]["total"], 1);
    assert_ne!(list["data"][0]["_id"], id);

    let (status, _) = send(&app, "DELETE", &format!("/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_with_invalid_id_returns_400() {
    let app = app();

    let (status, body) = send(&app, "DELETE", "/123", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "INVALID_ID");
}

#[tokio::test]
async fn test_create_company_with_numeric_cnpj_stores_text() {
    let app = app();
    let builder = TestDataBuilder::from_test_name("company_numeric_cnpj");

    let mut body = company_body(&builder, 1);
    body["cnpj"] = json!(12345678000190_u64);

    let (status, _) = send(&app, "POST", "/", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, list) = send(&app, "GET", "/", None).await;
    assert_eq!(list["data"][0]["cnpj"], "12345678000190");
}

#[tokio::test]
async fn test_create_company_with_malformed_field_names_only_that_field() {
    let app = app();
    let builder = TestDataBuilder::from_test_name("company_malformed_field");

    let mut body = company_body(&builder, 1);
    body["email"] = json!({ "primary": "a@b.test" });

    let (status, body) = send(&app, "POST", "/", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "Invalid value for fields: email");

    let (_, list) = send(&app, "GET", "/", None).await;
    assert_eq!(list["pagination"]["total"], 0);
}
