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

use crate::error::OfferResult;
use crate::models::{CreateOffer, OfferView, UpdateOffer};
use crate::repository::OfferRepository;
use crate::service::OfferService;

/// OpenAPI documentation for Offers API
#[derive(OpenApi)]
#[openapi(
    paths(list_offers, create_offer, update_offer, delete_offer),
    components(
        schemas(OfferView, CreateOffer, UpdateOffer),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Offers", description = "Promotional offers")
    )
)]
pub struct ApiDoc;

/// Create the offers router with all HTTP endpoints
pub fn router<R: OfferRepository + 'static>(service: OfferService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_offers).post(create_offer))
        .route("/{id}", put(update_offer).delete(delete_offer))
        .with_state(shared_service)
}

/// List offers, newest first
#[utoipa::path(
    get,
    path = "",
    tag = "Offers",
    params(ListParams),
    responses(
        (status = 200, description = "One page of offers", body = ListResponse<OfferView>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_offers<R: OfferRepository>(
    State(service): State<Arc<OfferService<R>>>,
    query: ListQuery,
) -> OfferResult<ListResponse<OfferView>> {
    let (offers, total) = service.list_offers(&query).await?;
    Ok(ListResponse::new(
        offers.into_iter().map(OfferView::from).collect(),
        query.page.summary(total),
    ))
}

/// Create an offer
#[utoipa::path(
    post,
    path = "",
    tag = "Offers",
    request_body = CreateOffer,
    responses(
        (status = 201, description = "Offer created", body = CreatedResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_offer<R: OfferRepository>(
    State(service): State<Arc<OfferService<R>>>,
    LenientJson(input): LenientJson<CreateOffer>,
) -> OfferResult<CreatedResponse> {
    let id = service.create_offer(input).await?;
    Ok(CreatedResponse::new(id.to_hex()))
}

/// Update supplied fields of an offer
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Offers",
    params(
        ("id" = String, Path, description = "Offer ID (24 hex characters)")
    ),
    request_body = UpdateOffer,
    responses(
        (status = 200, description = "Offer updated", body = AckResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_offer<R: OfferRepository>(
    State(service): State<Arc<OfferService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
    LenientJson(input): LenientJson<UpdateOffer>,
) -> OfferResult<AckResponse> {
    service.update_offer(id, input).await?;
    Ok(AckResponse::new("Offer updated"))
}

/// Delete an offer
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Offers",
    params(
        ("id" = String, Path, description = "Offer ID (24 hex characters)")
    ),
    responses(
        (status = 200, description = "Offer deleted", body = AckResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_offer<R: OfferRepository>(
    State(service): State<Arc<OfferService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
) -> OfferResult<AckResponse> {
    service.delete_offer(id).await?;
    Ok(AckResponse::new("Offer deleted"))
}
