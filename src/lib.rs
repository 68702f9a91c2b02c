//! # tagbind
//!
//! Declarative, tag-driven binding of HTTP request parts into typed records.
//!
//! A handler declares a plain struct and tags each field with where its value
//! comes from. One call populates the whole struct from a request:
//!
//! - `#[bind(header = "...")]` reads a request header
//! - `#[bind(query = "...")]` reads a URI query parameter
//! - `#[bind(path = "...")]` reads a parameter matched by the router
//! - `#[bind(body)]` decodes the request body as JSON or XML, chosen by
//!   content negotiation
//!
//! Text values are parsed into the field's primitive type. Records and maps
//! are decoded as structured values. A missing value leaves the field at
//! whatever it held before.
//!
//! ## Feature Flags
//!
//! - `macros` (default) - `#[derive(Bind)]`
//!
//! ## Quick Example
//!
//! ```rust
//! use serde::Deserialize;
//! use tagbind::prelude::*;
//!
//! #[derive(Debug, Default, Deserialize)]
//! struct NewTodo {
//!     title: String,
//! }
//!
//! #[derive(Default, Bind)]
//! struct CreateTodo {
//!     #[bind(path = "list")]
//!     list: u32,
//!     #[bind(query = "notify")]
//!     notify: bool,
//!     #[bind(body)]
//!     todo: NewTodo,
//! }
//!
//! let request = Request::builder()
//!     .uri("/lists/3/todos?notify=true")
//!     .route_param("list", "3")
//!     .header("content-type", "application/json")
//!     .body(r#"{"title":"write docs"}"#)
//!     .build()
//!     .unwrap();
//!
//! let mut create = CreateTodo::default();
//! Binder::new().fill(&request, &mut create).unwrap();
//!
//! assert_eq!(create.list, 3);
//! assert!(create.notify);
//! assert_eq!(create.todo.title, "write docs");
//! ```

pub mod codec;
pub mod http;
pub mod params;

pub use tagbind_http::{Request, Response, RouteContext, StatusCode};
pub use tagbind_params::{
	Bind, BindError, BindResult, Binder, BinderConfig, FieldDescriptor, RequestHandler, Target,
	fill,
};

#[cfg(feature = "macros")]
pub use tagbind_macros::Bind;

pub mod prelude {
	pub use crate::codec::{Codec, CodecSelector, DefaultCodecSelector, NegotiatedCodec};
	pub use crate::http::{Request, Response, RouteContext, StatusCode};
	pub use crate::params::{
		Bind, BindError, BindResult, Binder, BinderConfig, FieldDescriptor, RequestHandler,
		SourceResolver, Target, TypeCoercer, fill,
	};

	#[cfg(feature = "macros")]
	pub use tagbind_macros::Bind;
}
