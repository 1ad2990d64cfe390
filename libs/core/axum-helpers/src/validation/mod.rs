//! Declarative request validation.
//!
//! A route declares an ordered, static slice of [`FieldRule`]s through a
//! [`RuleSet`] marker type. [`run_rules`] applies every rule (no early exit)
//! and collects one [`FieldError`] per failed rule, in declaration order.
//!
//! ```rust
//! use axum_helpers::validation::{checks, run_rules, FieldRule, RequestInput};
//! use serde_json::json;
//!
//! const RULES: &[FieldRule] = &[
//!     FieldRule::body("price", checks::is_numeric, "Invalid value"),
//!     FieldRule::body("price", checks::is_positive, "Invalid price"),
//! ];
//!
//! let input = RequestInput::default().with_body_value(json!({ "price": -3 }));
//! let errors = run_rules(RULES, &input).unwrap_err();
//! assert_eq!(errors.errors.len(), 1);
//! assert_eq!(errors.errors[0].msg, "Invalid price");
//! ```

pub mod checks;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Where a validated field lives in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Params,
    Body,
}

/// Predicate over a field; `None` means the field is absent.
pub type Check = fn(Option<&Value>) -> bool;

#[derive(Clone, Copy)]
pub struct FieldRule {
    pub location: Location,
    pub field: &'static str,
    pub check: Check,
    pub message: &'static str,
}

impl FieldRule {
    pub const fn param(field: &'static str, check: Check, message: &'static str) -> Self {
        Self {
            location: Location::Params,
            field,
            check,
            message,
        }
    }

    pub const fn body(field: &'static str, check: Check, message: &'static str) -> Self {
        Self {
            location: Location::Body,
            field,
            check,
            message,
        }
    }
}

impl fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRule")
            .field("location", &self.location)
            .field("field", &self.field)
            .field("message", &self.message)
            .finish()
    }
}

/// Validator chain bound to a route.
///
/// Implemented by zero-sized marker types so the chain is part of the
/// handler's signature (`Validated<CreateProductRules>`).
pub trait RuleSet: Send + Sync + 'static {
    const RULES: &'static [FieldRule];

    /// Reported when the body is present but is not a JSON object.
    const INVALID_BODY_MESSAGE: &'static str = "Invalid JSON body";

    fn uses(location: Location) -> bool {
        Self::RULES.iter().any(|rule| rule.location == location)
    }
}

/// One failed rule, serialized as `{type, value?, msg, path, location}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    #[serde(rename = "type")]
    pub kind: String,
    /// The offending value; omitted when the field was absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    pub msg: String,
    pub path: String,
    pub location: Location,
}

impl FieldError {
    pub fn field(rule: &FieldRule, value: Option<&Value>) -> Self {
        Self {
            kind: "field".to_string(),
            value: value.cloned(),
            msg: rule.message.to_string(),
            path: rule.field.to_string(),
            location: rule.location,
        }
    }

    /// Error for a body that could not be read as a JSON object.
    pub fn body(message: &str) -> Self {
        Self {
            kind: "body".to_string(),
            value: None,
            msg: message.to_string(),
            path: String::new(),
            location: Location::Body,
        }
    }
}

/// Collected validation failures, rendered as `400 {errors: [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }
}

impl From<FieldError> for ValidationErrors {
    fn from(error: FieldError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.path, e.msg))
            .collect();
        write!(f, "{}", messages.join(", "))
    }
}

/// Path parameters and JSON body of one request, as raw JSON values.
#[derive(Debug, Clone, Default)]
pub struct RequestInput {
    params: Map<String, Value>,
    body: Map<String, Value>,
}

impl RequestInput {
    pub fn new(params: HashMap<String, String>, body: Map<String, Value>) -> Self {
        let params = params
            .into_iter()
            .map(|(k, v)| (k, Value::String(v)))
            .collect();
        Self { params, body }
    }

    pub fn with_param(mut self, name: &str, value: &str) -> Self {
        self.params
            .insert(name.to_string(), Value::String(value.to_string()));
        self
    }

    /// Sets the body from a JSON value. Non-object values leave it empty.
    pub fn with_body_value(mut self, body: Value) -> Self {
        if let Value::Object(map) = body {
            self.body = map;
        }
        self
    }

    pub fn get(&self, location: Location, field: &str) -> Option<&Value> {
        match location {
            Location::Params => self.params.get(field),
            Location::Body => self.body.get(field),
        }
    }

    /// Path parameter parsed into `T`.
    pub fn param<T: FromStr>(&self, name: &str) -> Option<T> {
        self.params.get(name)?.as_str()?.parse().ok()
    }

    pub fn body(&self) -> &Map<String, Value> {
        &self.body
    }

    pub fn into_body(self) -> Map<String, Value> {
        self.body
    }
}

/// Applies every rule in order and collects the failures.
pub fn run_rules(rules: &[FieldRule], input: &RequestInput) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    for rule in rules {
        let value = input.get(rule.location, rule.field);
        if !(rule.check)(value) {
            errors.push(FieldError::field(rule, value));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const RULES: &[FieldRule] = &[
        FieldRule::param("id", checks::is_int, "bad id"),
        FieldRule::body("name", checks::not_empty, "name required"),
        FieldRule::body("price", checks::not_empty, "price required"),
        FieldRule::body("price", checks::is_numeric, "price numeric"),
        FieldRule::body("price", checks::is_positive, "price positive"),
    ];

    #[test]
    fn test_run_rules_passes() {
        let input = RequestInput::default()
            .with_param("id", "3")
            .with_body_value(json!({ "name": "Monitor", "price": 300 }));
        assert!(run_rules(RULES, &input).is_ok());
    }

    #[test]
    fn test_run_rules_collects_every_failure_in_order() {
        let input = RequestInput::default().with_param("id", "abc");
        let errors = run_rules(RULES, &input).unwrap_err();

        let messages: Vec<&str> = errors.errors.iter().map(|e| e.msg.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "bad id",
                "name required",
                "price required",
                "price numeric",
                "price positive"
            ]
        );
        assert_eq!(errors.errors[0].location, Location::Params);
        assert_eq!(errors.errors[0].value, Some(json!("abc")));
        assert_eq!(errors.errors[1].value, None);
    }

    #[test]
    fn test_field_error_wire_shape() {
        let rule = FieldRule::body("price", checks::is_positive, "Precio no válido");
        let error = FieldError::field(&rule, Some(&json!(0)));
        assert_eq!(
            serde_json::to_value(&error).unwrap(),
            json!({
                "type": "field",
                "value": 0,
                "msg": "Precio no válido",
                "path": "price",
                "location": "body"
            })
        );

        let absent = FieldError::field(&rule, None);
        let value = serde_json::to_value(&absent).unwrap();
        assert!(value.get("value").is_none());
    }

    #[test]
    fn test_request_input_param_parsing() {
        let mut params = HashMap::new();
        params.insert("id".to_string(), "17".to_string());
        let input = RequestInput::new(params, Map::new());

        assert_eq!(input.param::<i32>("id"), Some(17));
        assert_eq!(input.param::<i32>("missing"), None);
    }

    struct BodyOnly;
    impl RuleSet for BodyOnly {
        const RULES: &'static [FieldRule] = &[FieldRule::body("name", checks::not_empty, "x")];
    }

    #[test]
    fn test_rule_set_locations() {
        assert!(BodyOnly::uses(Location::Body));
        assert!(!BodyOnly::uses(Location::Params));
        assert_eq!(BodyOnly::INVALID_BODY_MESSAGE, "Invalid JSON body");
    }
}
