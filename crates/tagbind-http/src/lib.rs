//! HTTP request and response types for tagbind
//!
//! This crate provides the transport-facing half of the binder:
//!
//! - [`Request`] - an already-received request carrying headers, a query
//!   string, a router-populated [`RouteContext`] and a single-use body
//! - [`Response`] - a minimal response value produced by request handlers
//! - [`Extensions`] - type-keyed request-scoped storage
//!
//! ## Example
//!
//! ```
//! use tagbind_http::Request;
//! use hyper::Method;
//!
//! let request = Request::builder()
//!     .method(Method::POST)
//!     .uri("/users/42?verbose=true")
//!     .header("x-request-id", "7")
//!     .route_param("id", "42")
//!     .body(r#"{"name":"alice"}"#)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(request.header("X-Request-Id"), Some("7"));
//! assert_eq!(request.query("verbose"), Some("true"));
//! assert_eq!(request.route_context().unwrap().url_param("id"), Some("42"));
//! assert_eq!(&request.read_body().unwrap()[..], br#"{"name":"alice"}"#);
//! ```

pub mod extensions;
pub mod request;
pub mod response;
pub mod route;

pub use extensions::Extensions;
pub use request::{BodyError, Request, RequestBuilder, RequestError};
pub use response::Response;
pub use route::RouteContext;

pub use bytes::Bytes;
pub use hyper::{HeaderMap, Method, StatusCode, Uri, Version, header};
