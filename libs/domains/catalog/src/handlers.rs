use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    ValidatedJson, ValidatedQuery,
    errors::responses::{
        BadRequestValidationResponse, ConflictResponse, InternalServerErrorResponse,
        InvalidReferenceResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::CatalogResult;
use crate::models::{
    Color, CreateProduct, DataResponse, PageMeta, Product, ProductListQuery, ProductPage,
    ProductType,
};
use crate::repository::CatalogRepository;
use crate::service::CatalogService;

const PRODUCTS_TAG: &str = "products";
const LOOKUPS_TAG: &str = "lookups";

/// OpenAPI documentation for the catalog API
#[derive(OpenApi)]
#[openapi(
    paths(list_products, create_product, list_product_types, list_colors),
    components(
        schemas(
            Product,
            ProductType,
            Color,
            CreateProduct,
            ProductPage,
            PageMeta
        ),
        responses(
            BadRequestValidationResponse,
            InvalidReferenceResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = PRODUCTS_TAG, description = "Product listing and creation"),
        (name = LOOKUPS_TAG, description = "Product types and colors")
    )
)]
pub struct ApiDoc;

/// Create the catalog router with all HTTP endpoints
pub fn router<R: CatalogRepository + 'static>(service: CatalogService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/product-types", get(list_product_types))
        .route("/colors", get(list_colors))
        .with_state(shared_service)
}

/// List products, newest first, with their type and colors
#[utoipa::path(
    get,
    path = "/products",
    tag = PRODUCTS_TAG,
    params(ProductListQuery),
    responses(
        (status = 200, description = "One page of products", body = ProductPage),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: CatalogRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    ValidatedQuery(query): ValidatedQuery<ProductListQuery>,
) -> CatalogResult<Json<ProductPage>> {
    let page = service.list_products(query).await?;
    Ok(Json(page))
}

/// Create a product and attach its colors
#[utoipa::path(
    post,
    path = "/products",
    tag = PRODUCTS_TAG,
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, response = InvalidReferenceResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: CatalogRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> CatalogResult<impl IntoResponse> {
    let product = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

#[utoipa::path(
    get,
    path = "/product-types",
    tag = LOOKUPS_TAG,
    responses(
        (status = 200, description = "All product types, newest first", body = DataResponse<Vec<ProductType>>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_product_types<R: CatalogRepository>(
    State(service): State<Arc<CatalogService<R>>>,
) -> CatalogResult<Json<DataResponse<Vec<ProductType>>>> {
    let data = service.list_product_types().await?;
    Ok(Json(DataResponse { data }))
}

#[utoipa::path(
    get,
    path = "/colors",
    tag = LOOKUPS_TAG,
    responses(
        (status = 200, description = "All colors, newest first", body = DataResponse<Vec<Color>>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_colors<R: CatalogRepository>(
    State(service): State<Arc<CatalogService<R>>>,
) -> CatalogResult<Json<DataResponse<Vec<Color>>>> {
    let data = service.list_colors().await?;
    Ok(Json(DataResponse { data }))
}
