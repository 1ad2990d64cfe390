//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
use crate::validation::ValidationErrors;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({ "error": "An internal server error occurred" })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - one entry per failed field rule",
    content_type = "application/json",
    example = json!({
        "errors": [{
            "type": "field",
            "value": 0,
            "msg": "Precio no válido",
            "path": "price",
            "location": "body"
        }]
    })
)]
pub struct BadRequestValidationResponse(pub ValidationErrors);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({ "error": "Producto no encontrado" })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Forbidden - origin rejected by the CORS policy",
    content_type = "application/json",
    example = json!({ "error": "Error de CORS" })
)]
pub struct ForbiddenResponse(pub ErrorResponse);
