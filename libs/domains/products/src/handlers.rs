use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    Validated,
    errors::responses::{
        BadRequestValidationResponse, InternalServerErrorResponse, NotFoundResponse,
    },
    validation::RequestInput,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::entity;
use crate::error::{ProductError, ProductResult};
use crate::models::{
    CreateProduct, DeletedData, Product, ProductData, ProductListData, UpdateProduct,
};
use crate::repository::ProductRepository;
use crate::service::ProductService;
use crate::validation::{CreateProductRules, INVALID_ID, ProductIdRules, UpdateProductRules};

/// OpenAPI documentation for the Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        get_product,
        create_product,
        update_product,
        toggle_availability,
        delete_product,
    ),
    components(
        schemas(
            Product,
            CreateProduct,
            UpdateProduct,
            ProductData,
            ProductListData,
            DeletedData,
            axum_helpers::ErrorResponse,
            axum_helpers::ValidationErrors,
            axum_helpers::FieldError,
            axum_helpers::Location,
        ),
        responses(NotFoundResponse, BadRequestValidationResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = entity::TAG, description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Routes relative to the mount point (`/api/productos`).
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product)
                .put(update_product)
                .patch(toggle_availability)
                .delete(delete_product),
        )
        .with_state(shared_service)
}

fn product_id(input: &RequestInput) -> ProductResult<i32> {
    input
        .param("id")
        .ok_or_else(|| ProductError::Validation(INVALID_ID.to_string()))
}

/// Get a list of products
#[utoipa::path(
    get,
    path = "",
    tag = entity::TAG,
    responses(
        (status = 200, description = "All products ordered by id", body = ProductListData),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<ProductListData>> {
    let products = service.list_products().await?;
    Ok(Json(ProductListData { data: products }))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = entity::TAG,
    params(
        ("id" = i32, Path, description = "The ID of the product to retrieve")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductData),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    input: Validated<ProductIdRules>,
) -> ProductResult<Json<ProductData>> {
    let product = service.get_product(product_id(&input)?).await?;
    Ok(Json(ProductData { data: product }))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = entity::TAG,
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created successfully", body = ProductData),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    input: Validated<CreateProductRules>,
) -> ProductResult<impl IntoResponse> {
    let input = CreateProduct::try_from(input.body())?;
    let product = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(ProductData { data: product })))
}

/// Update a product with user input
#[utoipa::path(
    put,
    path = "/{id}",
    tag = entity::TAG,
    params(
        ("id" = i32, Path, description = "The ID of the product to update")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated", body = ProductData),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    input: Validated<UpdateProductRules>,
) -> ProductResult<Json<ProductData>> {
    let id = product_id(&input)?;
    let update = UpdateProduct::try_from(input.body())?;
    let product = service.update_product(id, update).await?;
    Ok(Json(ProductData { data: product }))
}

/// Flip product availability
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = entity::TAG,
    params(
        ("id" = i32, Path, description = "The ID of the product to update")
    ),
    responses(
        (status = 200, description = "Availability toggled", body = ProductData),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn toggle_availability<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    input: Validated<ProductIdRules>,
) -> ProductResult<Json<ProductData>> {
    let product = service.toggle_availability(product_id(&input)?).await?;
    Ok(Json(ProductData { data: product }))
}

/// Remove a product by its ID
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = entity::TAG,
    params(
        ("id" = i32, Path, description = "The ID of the product to remove")
    ),
    responses(
        (status = 200, description = "Product removed", body = DeletedData),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    input: Validated<ProductIdRules>,
) -> ProductResult<Json<DeletedData>> {
    service.delete_product(product_id(&input)?).await?;
    Ok(Json(DeletedData::new()))
}
