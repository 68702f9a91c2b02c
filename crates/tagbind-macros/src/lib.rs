//! Procedural macros for tagbind
//!
//! Provides `#[derive(Bind)]`, which implements `tagbind_params::Bind` from
//! `#[bind(...)]` field attributes:
//!
//! - `#[bind(header = "name")]` binds the first value of a request header
//! - `#[bind(query = "name")]` binds the first value of a query parameter
//! - `#[bind(path = "name")]` binds a routed path parameter
//! - `#[bind(body)]` decodes the request body with the negotiated codec
//!
//! Fields without a `bind` attribute are left alone. A field takes at most
//! one source, and at most one field per struct is bound from the body.
//!
//! # Examples
//!
//! ```rust,ignore
//! use serde::Deserialize;
//! use tagbind::Bind;
//!
//! #[derive(Deserialize)]
//! struct NewComment {
//!     text: String,
//! }
//!
//! #[derive(Bind)]
//! struct CreateComment {
//!     #[bind(path = "post_id")]
//!     post_id: u64,
//!     #[bind(header = "x-request-id")]
//!     request_id: String,
//!     #[bind(query = "notify")]
//!     notify: bool,
//!     #[bind(body)]
//!     comment: Option<Box<NewComment>>,
//! }
//! ```
//!
//! ## Field types
//!
//! Primitives and `String` are parsed from text. Records, maps and other
//! deserializable types are decoded as structured values, in place or
//! through `Box<T>`, `Option<T>` and `Option<Box<T>>`. Collections, tuples,
//! references, callables, trait objects and channels still compile but fail
//! when bound, naming the unsupported kind.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod bind_derive;
mod crate_paths;
mod field_kind;

/// Derive `Bind` for a struct with named fields
#[proc_macro_derive(Bind, attributes(bind))]
pub fn derive_bind(input: TokenStream) -> TokenStream {
	let input = parse_macro_input!(input as DeriveInput);
	bind_derive::derive_bind_impl(input)
		.unwrap_or_else(|e| e.to_compile_error())
		.into()
}
