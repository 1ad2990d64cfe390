//! Extractor that runs a route's validator chain before the handler.

use crate::errors::AppError;
use crate::validation::{
    FieldError, Location, RequestInput, RuleSet, ValidationErrors, run_rules,
};
use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request, rejection::PathRejection},
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::marker::PhantomData;
use std::ops::Deref;

/// Path parameters and JSON body that passed every rule of `R`.
///
/// Only the parts of the request that `R` inspects are read: a chain with
/// no body rules leaves the body untouched. On failure the request is
/// answered with `400 {errors: [...]}` and the handler never runs.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::Validated;
/// use axum_helpers::validation::{checks, FieldRule, RuleSet};
///
/// struct IdRules;
/// impl RuleSet for IdRules {
///     const RULES: &'static [FieldRule] = &[FieldRule::param("id", checks::is_int, "bad id")];
/// }
///
/// async fn get_item(input: Validated<IdRules>) -> String {
///     format!("item {}", input.param::<i32>("id").unwrap_or_default())
/// }
/// ```
pub struct Validated<R: RuleSet> {
    input: RequestInput,
    _rules: PhantomData<R>,
}

impl<R: RuleSet> Validated<R> {
    pub fn into_inner(self) -> RequestInput {
        self.input
    }
}

impl<R: RuleSet> Deref for Validated<R> {
    type Target = RequestInput;

    fn deref(&self) -> &Self::Target {
        &self.input
    }
}

impl<R, S> FromRequest<S> for Validated<R>
where
    R: RuleSet,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();

        let params = if R::uses(Location::Params) {
            match Path::<HashMap<String, String>>::from_request_parts(&mut parts, state).await {
                Ok(Path(params)) => params,
                // Segments that do not decode to UTF-8 reach the rules as absent.
                Err(PathRejection::FailedToDeserializePathParams(e)) => {
                    tracing::debug!(error = %e, "Undecodable path parameters");
                    HashMap::new()
                }
                Err(rejection) => return Err(rejection.into_response()),
            }
        } else {
            HashMap::new()
        };

        let body = if R::uses(Location::Body) {
            let req = Request::from_parts(parts, body);
            let bytes = Bytes::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;

            parse_object(&bytes).ok_or_else(|| {
                let error = FieldError::body(R::INVALID_BODY_MESSAGE);
                AppError::from(ValidationErrors::from(error)).into_response()
            })?
        } else {
            Map::new()
        };

        let input = RequestInput::new(params, body);
        run_rules(R::RULES, &input).map_err(|e| AppError::from(e).into_response())?;

        Ok(Self {
            input,
            _rules: PhantomData,
        })
    }
}

/// An empty body reads as `{}`; anything other than a JSON object is rejected.
fn parse_object(bytes: &[u8]) -> Option<Map<String, Value>> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Some(Map::new());
    }

    match serde_json::from_slice(bytes) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}
