//! HTTP middleware: CORS policy and security headers.
//!
//! ```ignore
//! use axum_helpers::http::{create_cors_layer, origin_guard, security_headers};
//!
//! let app = Router::new()
//!     .layer(axum::middleware::from_fn(security_headers))
//!     .layer(create_cors_layer(&cors)?)
//!     .layer(axum::middleware::from_fn_with_state(Arc::new(cors), origin_guard));
//! ```

pub mod cors;
pub mod security;

pub use cors::{CORS_REJECTED, create_cors_layer, origin_guard};
pub use security::security_headers;
