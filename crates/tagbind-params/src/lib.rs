//! Declarative binding of request parts into typed records
//!
//! A destination record lists its tagged fields through the [`Bind`]
//! trait, usually via `#[derive(Bind)]`. [`Binder::fill`] then resolves
//! every tag against a [`tagbind_http::Request`] and coerces the raw value
//! into the field.
//!
//! ## Sources
//!
//! | Tag | Raw value | Coercion |
//! |---|---|---|
//! | `header = "k"` | first value of header `k` | text |
//! | `query = "k"` | first value of query parameter `k` | text |
//! | `path = "k"` | routed path parameter `k` | text |
//! | `body` | whole request body, read once | negotiated codec |
//!
//! An absent or empty text value leaves the field untouched. Text values
//! for structured fields are decoded as JSON.
//!
//! ## Example
//!
//! ```
//! use tagbind_http::Request;
//! use tagbind_params::{Bind, Binder, FieldDescriptor, Target};
//!
//! #[derive(Default)]
//! struct Search {
//!     term: String,
//!     exact: bool,
//! }
//!
//! impl Bind for Search {
//!     fn fields(&mut self) -> Vec<FieldDescriptor<'_>> {
//!         vec![
//!             FieldDescriptor::new("term", Target::of(&mut self.term)).query("q"),
//!             FieldDescriptor::new("exact", Target::of(&mut self.exact)).query("exact"),
//!         ]
//!     }
//! }
//!
//! let request = Request::builder().uri("/search?q=rust+book&exact=t").build().unwrap();
//! let mut search = Search::default();
//! Binder::new().fill(&request, &mut search).unwrap();
//!
//! assert_eq!(search.term, "rust book");
//! assert!(search.exact);
//! ```

// Lets `#[derive(Bind)]` output name this crate from inside it.
extern crate self as tagbind_params;

pub mod binder;
pub mod coerce;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod handler;
pub mod resolver;
pub mod source;
pub mod target;

pub use binder::{Binder, fill};
pub use coerce::TypeCoercer;
pub use config::{BinderConfig, ConfigError, DEFAULT_MAX_BODY_SIZE};
pub use descriptor::{Bind, FieldDescriptor};
pub use error::{BadDestination, BindError, BindResult};
pub use handler::RequestHandler;
pub use resolver::{RawValue, RequestSourceResolver, SourceResolver};
pub use source::{SourceKind, Tag};
pub use target::{Indirection, IntoTarget, StructuredTarget, Target, TypeKind};
