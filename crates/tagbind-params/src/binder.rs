//! Tag-driven request binding

use crate::coerce::TypeCoercer;
use crate::config::BinderConfig;
use crate::descriptor::{Bind, FieldDescriptor};
use crate::error::{BindError, BindResult};
use crate::resolver::{RequestSourceResolver, SourceResolver};
use crate::source::{SourceKind, Tag};
use crate::target::Target;
use tagbind_codec::{Codec, CodecSelector, DefaultCodecSelector};
use tagbind_http::Request;

/// Populates [`Bind`] records from a [`Request`]
///
/// Each tagged field is resolved from its source and coerced into place, in
/// declaration order. Binding stops at the first failing field; fields
/// bound before it keep their new values.
///
/// A field carrying several tags is bound once per tag in the order header,
/// query, path, body, so the last source that yields a value wins.
///
/// ```
/// use tagbind_http::Request;
/// use tagbind_params::{Bind, Binder, FieldDescriptor, Target};
///
/// #[derive(Default)]
/// struct Lookup {
///     id: u64,
///     trace: String,
/// }
///
/// impl Bind for Lookup {
///     fn fields(&mut self) -> Vec<FieldDescriptor<'_>> {
///         let Self { id, trace } = self;
///         vec![
///             FieldDescriptor::new("id", Target::of(id)).path("id"),
///             FieldDescriptor::new("trace", Target::of(trace)).header("x-trace"),
///         ]
///     }
/// }
///
/// let request = Request::builder()
///     .uri("/items/42")
///     .route_param("id", "42")
///     .header("x-trace", "abc")
///     .build()
///     .unwrap();
///
/// let mut lookup = Lookup::default();
/// Binder::new().fill(&request, &mut lookup).unwrap();
/// assert_eq!(lookup.id, 42);
/// assert_eq!(lookup.trace, "abc");
/// ```
#[derive(Debug, Clone)]
pub struct Binder<R = RequestSourceResolver, S = DefaultCodecSelector> {
	resolver: R,
	selector: S,
	coercer: TypeCoercer,
}

impl Binder {
	pub fn new() -> Self {
		Self::with_config(&BinderConfig::default())
	}

	pub fn with_config(config: &BinderConfig) -> Self {
		Self::with_parts(
			RequestSourceResolver::new(config.max_body_size),
			DefaultCodecSelector,
		)
	}
}

impl Default for Binder {
	fn default() -> Self {
		Self::new()
	}
}

impl<R, S> Binder<R, S>
where
	R: SourceResolver,
	S: CodecSelector,
{
	pub fn with_parts(resolver: R, selector: S) -> Self {
		Self {
			resolver,
			selector,
			coercer: TypeCoercer::new(),
		}
	}

	pub fn resolver(&self) -> &R {
		&self.resolver
	}

	pub fn selector(&self) -> &S {
		&self.selector
	}

	/// Bind every tagged field of `dst` from `req`
	pub fn fill<B: Bind + ?Sized>(&self, req: &Request, dst: &mut B) -> BindResult<()> {
		let mut fields = dst.fields();
		let span = tracing::debug_span!("bind", record = std::any::type_name::<B>(), fields = fields.len());
		let _guard = span.enter();

		for field in &mut fields {
			if let Err(err) = self.bind_field(req, field) {
				tracing::debug!(field = err.field(), error = %err, "binding aborted");
				return Err(err);
			}
		}
		Ok(())
	}

	fn bind_field(&self, req: &Request, field: &mut FieldDescriptor<'_>) -> BindResult<()> {
		let mut tags = field.tags.clone();
		tags.sort_by_key(|tag| tag.kind);

		for tag in tags {
			tracing::trace!(field = field.name, tag = %tag, ty = field.target.type_name(), "binding field");
			self.bind_tag(req, field.name, tag, &mut field.target)?;
		}
		Ok(())
	}

	fn bind_tag(&self, req: &Request, name: &'static str, tag: Tag, target: &mut Target<'_>) -> BindResult<()> {
		let raw = match tag.kind {
			SourceKind::Header => self.resolver.header(req, tag.key),
			SourceKind::Query => self.resolver.query(req, tag.key),
			SourceKind::Path => self.resolver.path(req, tag.key),
			SourceKind::Body => return self.bind_body(req, name, target),
		};
		if raw.is_absent() {
			tracing::trace!(field = name, tag = %tag, "value absent, field left untouched");
		}
		self.coercer.coerce_str(name, raw.as_str(), target)
	}

	fn bind_body(&self, req: &Request, name: &'static str, target: &mut Target<'_>) -> BindResult<()> {
		// Leave the body unread for fields that could never accept it.
		if let Target::Unsupported(kind) = target {
			return Err(BindError::UnsupportedType {
				field: name,
				kind: *kind,
			});
		}

		let bytes = self
			.resolver
			.body(req)
			.map_err(|source| BindError::Transport { field: name, source })?;
		let codec = self.selector.for_request_body(req);
		tracing::trace!(field = name, mime = codec.mime(), len = bytes.len(), "decoding body");
		self.coercer.coerce_body(name, &bytes, &codec, target)
	}
}

/// Bind `dst` from `req` with a default [`Binder`]
pub fn fill<B: Bind + ?Sized>(req: &Request, dst: &mut B) -> BindResult<()> {
	Binder::new().fill(req, dst)
}
