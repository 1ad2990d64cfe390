use axum_helpers::validation::checks::{as_number, as_text};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::ProductError;

pub const PRODUCT_NOT_FOUND: &str = "Producto no encontrado";
pub const PRODUCT_DELETED: &str = "Producto Eliminado";

/// A catalog product as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Monitor")]
    pub name: String,
    #[schema(example = 300.0)]
    pub price: f64,
    /// Whether the product can currently be ordered
    #[schema(example = true)]
    pub availability: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn new(id: i32, input: CreateProduct) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: input.name,
            price: input.price,
            availability: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the provided fields. Absent fields keep their value.
    pub fn apply_update(&mut self, update: UpdateProduct) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(availability) = update.availability {
            self.availability = availability;
        }
        self.updated_at = Utc::now();
    }

    pub fn toggle_availability(&mut self) {
        self.availability = !self.availability;
        self.updated_at = Utc::now();
    }
}

/// Body of `POST /api/productos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1))]
    #[schema(example = "Teclado mecánico")]
    pub name: String,
    #[validate(range(exclusive_min = 0.0))]
    #[schema(example = 450.0)]
    pub price: f64,
}

/// Body of `PUT /api/productos/{id}`. Only the provided fields change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[schema(example = "Teclado mecánico")]
    pub name: Option<String>,
    #[validate(range(exclusive_min = 0.0))]
    #[schema(example = 450.0)]
    pub price: Option<f64>,
    #[schema(example = true)]
    pub availability: Option<bool>,
}

/// Reads a body that already passed `CreateProductRules`; a numeric string
/// price and a numeric name are coerced.
impl TryFrom<&Map<String, Value>> for CreateProduct {
    type Error = ProductError;

    fn try_from(body: &Map<String, Value>) -> Result<Self, Self::Error> {
        let name = body
            .get("name")
            .and_then(as_text)
            .ok_or_else(|| ProductError::Validation("name is required".to_string()))?;
        let price = body
            .get("price")
            .and_then(as_number)
            .ok_or_else(|| ProductError::Validation("price must be numeric".to_string()))?;

        Ok(Self {
            name: name.into_owned(),
            price,
        })
    }
}

impl TryFrom<&Map<String, Value>> for UpdateProduct {
    type Error = ProductError;

    fn try_from(body: &Map<String, Value>) -> Result<Self, Self::Error> {
        let name = match body.get("name") {
            None => None,
            Some(value) => Some(
                as_text(value)
                    .ok_or_else(|| ProductError::Validation("name must be text".to_string()))?
                    .into_owned(),
            ),
        };
        let price = match body.get("price") {
            None => None,
            Some(value) => Some(
                as_number(value)
                    .ok_or_else(|| ProductError::Validation("price must be numeric".to_string()))?,
            ),
        };
        let availability = match body.get("availability") {
            None => None,
            Some(value) => Some(value.as_bool().ok_or_else(|| {
                ProductError::Validation("availability must be a boolean".to_string())
            })?),
        };

        Ok(Self {
            name,
            price,
            availability,
        })
    }
}

/// `{ "data": Product }`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductData {
    pub data: Product,
}

/// `{ "data": [Product] }`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductListData {
    pub data: Vec<Product>,
}

/// `{ "data": "Producto Eliminado" }`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeletedData {
    #[schema(example = "Producto Eliminado")]
    pub data: String,
}

impl DeletedData {
    pub fn new() -> Self {
        Self {
            data: PRODUCT_DELETED.to_string(),
        }
    }
}

impl Default for DeletedData {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    fn product() -> Product {
        Product::new(
            1,
            CreateProduct {
                name: "Monitor".to_string(),
                price: 300.0,
            },
        )
    }

    #[test]
    fn test_new_product_is_available() {
        let product = product();
        assert!(product.availability);
        assert_eq!(product.created_at, product.updated_at);
    }

    #[test]
    fn test_product_serializes_camel_case() {
        let value = serde_json::to_value(product()).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert_eq!(value["price"], json!(300.0));
    }

    #[test]
    fn test_apply_update_keeps_absent_fields() {
        let mut product = product();
        product.apply_update(UpdateProduct {
            price: Some(250.0),
            ..Default::default()
        });

        assert_eq!(product.name, "Monitor");
        assert_eq!(product.price, 250.0);
        assert!(product.availability);
    }

    #[test]
    fn test_toggle_availability_twice_restores() {
        let mut product = product();
        product.toggle_availability();
        assert!(!product.availability);
        product.toggle_availability();
        assert!(product.availability);
    }

    #[test]
    fn test_create_product_coerces_scalars() {
        let input = CreateProduct::try_from(&body(json!({ "name": 42, "price": "45" }))).unwrap();
        assert_eq!(input.name, "42");
        assert_eq!(input.price, 45.0);
    }

    #[test]
    fn test_update_product_from_partial_body() {
        let input = UpdateProduct::try_from(&body(json!({ "availability": false }))).unwrap();
        assert_eq!(
            input,
            UpdateProduct {
                availability: Some(false),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_update_product_rejects_wrong_types() {
        let result = UpdateProduct::try_from(&body(json!({ "availability": "yes" })));
        assert!(matches!(result, Err(ProductError::Validation(_))));
    }

    #[test]
    fn test_validator_rules() {
        let invalid = CreateProduct {
            name: String::new(),
            price: 0.0,
        };
        let errors = invalid.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
        assert!(errors.field_errors().contains_key("price"));

        assert!(UpdateProduct::default().validate().is_ok());
        assert!(
            UpdateProduct {
                price: Some(-1.0),
                ..Default::default()
            }
            .validate()
            .is_err()
        );
    }
}
