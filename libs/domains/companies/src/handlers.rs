use axum::{
    Router,
    extract::State,
    routing::{get, put},
};
use axum_helpers::{
    AckResponse, CreatedResponse, LenientJson, ListParams, ListQuery, ListResponse, ObjectIdPath,
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, ConflictResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::CompanyResult;
use crate::models::{CompanyView, CreateCompany, UpdateCompany};
use crate::repository::CompanyRepository;
use crate::service::CompanyService;

/// OpenAPI documentation for Companies API
#[derive(OpenApi)]
#[openapi(
    paths(list_companies, create_company, update_company, delete_company),
    components(
        schemas(CompanyView, CreateCompany, UpdateCompany),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Companies", description = "Company registry")
    )
)]
pub struct ApiDoc;

/// Create the companies router with all HTTP endpoints
pub fn router<R: CompanyRepository + 'static>(service: CompanyService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_companies).post(create_company))
        .route("/{id}", put(update_company).delete(delete_company))
        .with_state(shared_service)
}

/// List companies, newest first
#[utoipa::path(
    get,
    path = "",
    tag = "Companies",
    params(ListParams),
    responses(
        (status = 200, description = "One page of companies", body = ListResponse<CompanyView>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_companies<R: CompanyRepository>(
    State(service): State<Arc<CompanyService<R>>>,
    query: ListQuery,
) -> CompanyResult<ListResponse<CompanyView>> {
    let (companies, total) = service.list_companies(&query).await?;
    Ok(ListResponse::new(
        companies.into_iter().map(CompanyView::from).collect(),
        query.page.summary(total),
    ))
}

/// Register a company
#[utoipa::path(
    post,
    path = "",
    tag = "Companies",
    request_body = CreateCompany,
    responses(
        (status = 201, description = "Company created", body = CreatedResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_company<R: CompanyRepository>(
    State(service): State<Arc<CompanyService<R>>>,
    LenientJson(input): LenientJson<CreateCompany>,
) -> CompanyResult<CreatedResponse> {
    let id = service.create_company(input).await?;
    Ok(CreatedResponse::new(id.to_hex()))
}

/// Update supplied fields of a company
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Companies",
    params(
        ("id" = String, Path, description = "Company ID (24 hex characters)")
    ),
    request_body = UpdateCompany,
    responses(
        (status = 200, description = "Company updated", body = AckResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_company<R: CompanyRepository>(
    State(service): State<Arc<CompanyService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
    LenientJson(input): LenientJson<UpdateCompany>,
) -> CompanyResult<AckResponse> {
    service.update_company(id, input).await?;
    Ok(AckResponse::new("Company updated"))
}

/// Delete a company
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Companies",
    params(
        ("id" = String, Path, description = "Company ID (24 hex characters)")
    ),
    responses(
        (status = 200, description = "Company deleted", body = AckResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_company<R: CompanyRepository>(
    State(service): State<Arc<CompanyService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
) -> CompanyResult<AckResponse> {
    service.delete_company(id).await?;
    Ok(AckResponse::new("Company deleted"))
}
