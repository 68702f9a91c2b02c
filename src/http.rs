//! Request and response types module.
//!
//! # Examples
//!
//! ```rust
//! use tagbind::http::{Request, RouteContext};
//!
//! let request = Request::builder().uri("/users/7").build().unwrap();
//! request.set_route_context(RouteContext::from_pairs([("id", "7")]));
//! assert_eq!(request.route_context().unwrap().url_param("id"), Some("7"));
//! ```

pub use tagbind_http::*;
