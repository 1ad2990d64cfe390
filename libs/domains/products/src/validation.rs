//! Validator chains for the product routes.
//!
//! Messages are the user-facing strings returned in `errors[].msg`.

use axum_helpers::validation::{FieldRule, RuleSet, checks};

pub const INVALID_ID: &str = "ID no válido";
pub const EMPTY_NAME: &str = "El nombre del producto no puede ir vacío";
pub const EMPTY_PRICE: &str = "El precio del producto no puede ir vacío";
pub const INVALID_VALUE: &str = "Valor no válido";
pub const INVALID_PRICE: &str = "Precio no válido";
pub const INVALID_NAME: &str = "Nombre no válido";
pub const INVALID_AVAILABILITY: &str = "Disponibilidad no válida";
pub const INVALID_BODY: &str = "Cuerpo de la petición no válido";

const ID_RULE: FieldRule = FieldRule::param("id", checks::is_int, INVALID_ID);

/// `GET`, `PATCH` and `DELETE /{id}`.
pub struct ProductIdRules;

impl RuleSet for ProductIdRules {
    const RULES: &'static [FieldRule] = &[ID_RULE];
}

/// `POST /`
pub struct CreateProductRules;

impl RuleSet for CreateProductRules {
    const RULES: &'static [FieldRule] = &[
        FieldRule::body("name", checks::not_empty, EMPTY_NAME),
        FieldRule::body("price", checks::not_empty, EMPTY_PRICE),
        FieldRule::body("price", checks::is_numeric, INVALID_VALUE),
        FieldRule::body("price", checks::is_positive, INVALID_PRICE),
    ];
    const INVALID_BODY_MESSAGE: &'static str = INVALID_BODY;
}

/// `PUT /{id}`. A non-empty name is not required here.
pub struct UpdateProductRules;

impl RuleSet for UpdateProductRules {
    const RULES: &'static [FieldRule] = &[
        ID_RULE,
        FieldRule::body("name", checks::text_if_present, INVALID_NAME),
        FieldRule::body("price", checks::positive_if_present, INVALID_PRICE),
        FieldRule::body("availability", checks::boolean_if_present, INVALID_AVAILABILITY),
    ];
    const INVALID_BODY_MESSAGE: &'static str = INVALID_BODY;
}
