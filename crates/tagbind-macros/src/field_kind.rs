//! Syntactic classification of field types into binding targets

use proc_macro2::TokenStream;
use quote::quote;
use syn::{GenericArgument, PathArguments, Type, TypeParamBound};

const PRIMITIVES: &[&str] = &[
	"bool", "i8", "i16", "i32", "i64", "isize", "u8", "u16", "u32", "u64", "usize", "f32", "f64",
	"String",
];

const SEQUENCES: &[&str] = &["Vec", "VecDeque", "LinkedList", "HashSet", "BTreeSet", "BinaryHeap"];

const CHANNELS: &[&str] = &["Sender", "SyncSender", "Receiver"];

const SHARED: &[&str] = &["Arc", "Rc"];

const CALLABLES: &[&str] = &["Fn", "FnMut", "FnOnce"];

/// How a field of a given type is handed to the binder
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FieldKind {
	Primitive,
	/// Decoded in place
	Structured,
	/// `Box<T>`
	BoxedRequired,
	/// `Option<Box<T>>`
	Boxed,
	/// `Option<T>`
	Optional,
	/// Shared ownership, never writable
	ReadOnly,
	/// Rejected at bind time with the named `TypeKind` variant
	Unsupported(&'static str),
}

impl FieldKind {
	/// Whether the generated code needs a `&mut` to the field
	pub(crate) fn borrows_field(&self) -> bool {
		!matches!(self, Self::ReadOnly | Self::Unsupported(_))
	}

	/// Expression building the `Target` for field binding `ident` of type `ty`
	pub(crate) fn target_expr(&self, krate: &TokenStream, ident: &syn::Ident, ty: &Type) -> TokenStream {
		match self {
			Self::Primitive => quote!(#krate::Target::of(#ident)),
			Self::Structured => quote!(#krate::Target::structured(#ident)),
			Self::Boxed => quote!(#krate::Target::boxed(#ident)),
			Self::BoxedRequired => {
				quote!(#krate::Target::Structured(#krate::StructuredTarget::boxed_required(#ident)))
			}
			Self::Optional => {
				quote!(#krate::Target::Structured(#krate::StructuredTarget::optional(#ident)))
			}
			Self::ReadOnly => {
				quote!(#krate::Target::Structured(#krate::StructuredTarget::read_only::<#ty>()))
			}
			Self::Unsupported(kind) => {
				let kind = syn::Ident::new(kind, proc_macro2::Span::call_site());
				quote!(#krate::Target::unsupported(#krate::TypeKind::#kind))
			}
		}
	}
}

pub(crate) fn classify(ty: &Type) -> FieldKind {
	match ty {
		Type::Paren(inner) => classify(&inner.elem),
		Type::Group(inner) => classify(&inner.elem),
		Type::Path(type_path) if type_path.qself.is_none() => classify_path(&type_path.path),
		Type::Path(_) => FieldKind::Structured,
		Type::Array(_) | Type::Slice(_) => FieldKind::Unsupported("Array"),
		Type::Tuple(_) => FieldKind::Unsupported("Complex"),
		Type::BareFn(_) => FieldKind::Unsupported("Func"),
		Type::Ptr(_) => FieldKind::Unsupported("UnsafePointer"),
		Type::Reference(_) => FieldKind::Unsupported("Pointer"),
		Type::ImplTrait(t) if is_callable(&t.bounds) => FieldKind::Unsupported("Func"),
		Type::TraitObject(t) if is_callable(&t.bounds) => FieldKind::Unsupported("Func"),
		Type::ImplTrait(_) | Type::TraitObject(_) => FieldKind::Unsupported("Interface"),
		_ => FieldKind::Unsupported("Invalid"),
	}
}

fn classify_path(path: &syn::Path) -> FieldKind {
	let Some(last) = path.segments.last() else {
		return FieldKind::Unsupported("Invalid");
	};
	let name = last.ident.to_string();
	let inner = single_type_argument(&last.arguments);

	if PRIMITIVES.contains(&name.as_str()) {
		return FieldKind::Primitive;
	}
	if SEQUENCES.contains(&name.as_str()) {
		return FieldKind::Unsupported("Sequence");
	}
	if CHANNELS.contains(&name.as_str()) {
		return FieldKind::Unsupported("Channel");
	}
	if SHARED.contains(&name.as_str()) {
		return FieldKind::ReadOnly;
	}

	match (name.as_str(), inner) {
		("Box", Some(inner)) => match pointee(inner) {
			Some(unsupported) => unsupported,
			None => FieldKind::BoxedRequired,
		},
		("Option", Some(inner)) => match boxed_inner(inner) {
			Some(boxed) => match pointee(boxed) {
				Some(unsupported) => unsupported,
				None => FieldKind::Boxed,
			},
			None => match classify(inner) {
				FieldKind::Primitive => FieldKind::Unsupported("Pointer"),
				FieldKind::Unsupported(kind) => FieldKind::Unsupported(kind),
				_ => FieldKind::Optional,
			},
		},
		_ => FieldKind::Structured,
	}
}

/// Why a boxed `inner` cannot be decoded into, if it cannot
fn pointee(inner: &Type) -> Option<FieldKind> {
	match classify(inner) {
		FieldKind::Primitive => Some(FieldKind::Unsupported("Pointer")),
		FieldKind::Unsupported(kind) => Some(FieldKind::Unsupported(kind)),
		_ => None,
	}
}

/// `T` out of `Box<T>`
fn boxed_inner(ty: &Type) -> Option<&Type> {
	let Type::Path(type_path) = ty else {
		return None;
	};
	let last = type_path.path.segments.last()?;
	if last.ident != "Box" {
		return None;
	}
	single_type_argument(&last.arguments)
}

fn single_type_argument(arguments: &PathArguments) -> Option<&Type> {
	let PathArguments::AngleBracketed(args) = arguments else {
		return None;
	};
	let mut types = args.args.iter().filter_map(|arg| match arg {
		GenericArgument::Type(ty) => Some(ty),
		_ => None,
	});
	let first = types.next()?;
	types.next().is_none().then_some(first)
}

fn is_callable<P>(bounds: &syn::punctuated::Punctuated<TypeParamBound, P>) -> bool {
	bounds.iter().any(|bound| match bound {
		TypeParamBound::Trait(t) => t
			.path
			.segments
			.last()
			.is_some_and(|s| CALLABLES.contains(&s.ident.to_string().as_str())),
		_ => false,
	})
}
