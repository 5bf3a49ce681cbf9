use axum::{
    Router,
    extract::State,
    routing::{get, put},
};
use axum_helpers::{
    AckResponse, CreatedResponse, LenientJson, ListParams, ListQuery, ListResponse, ObjectIdPath,
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{CreateProduct, ProductView, UpdateProduct};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(list_products, create_product, update_product, delete_product),
    components(
        schemas(ProductView, CreateProduct, UpdateProduct),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product catalog")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/{id}", put(update_product).delete(delete_product))
        .with_state(shared_service)
}

/// List products, newest first
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(ListParams),
    responses(
        (status = 200, description = "One page of products", body = ListResponse<ProductView>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    query: ListQuery,
) -> ProductResult<ListResponse<ProductView>> {
    let (products, total) = service.list_products(&query).await?;
    Ok(ListResponse::new(
        products.into_iter().map(ProductView::from).collect(),
        query.page.summary(total),
    ))
}

/// Create a product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created", body = CreatedResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    LenientJson(input): LenientJson<CreateProduct>,
) -> ProductResult<CreatedResponse> {
    let id = service.create_product(input).await?;
    Ok(CreatedResponse::new(id.to_hex()))
}

/// Update supplied fields of a product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID (24 hex characters)")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated", body = AckResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
    LenientJson(input): LenientJson<UpdateProduct>,
) -> ProductResult<AckResponse> {
    service.update_product(id, input).await?;
    Ok(AckResponse::new("Product updated"))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID (24 hex characters)")
    ),
    responses(
        (status = 200, description = "Product deleted", body = AckResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
) -> ProductResult<AckResponse> {
    service.delete_product(id).await?;
    Ok(AckResponse::new("Product deleted"))
}
