//! `#[derive(Bind)]` expansion

use crate::crate_paths::get_tagbind_params_crate;
use crate::field_kind::{FieldKind, classify};
use proc_macro2::TokenStream;
use quote::quote;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, LitStr};

/// Source tag parsed from `#[bind(...)]`
#[derive(Debug, Clone, PartialEq, Eq)]
enum SourceTag {
	Header(String),
	Query(String),
	Path(String),
	Body,
}

struct BoundField<'a> {
	ident: &'a syn::Ident,
	ty: &'a syn::Type,
	tag: SourceTag,
	kind: FieldKind,
}

/// Parse the field's `#[bind(...)]` attributes
///
/// Returns `None` for untagged fields.
fn parse_bind_attrs(attrs: &[syn::Attribute]) -> syn::Result<Option<SourceTag>> {
	let mut found: Option<SourceTag> = None;

	for attr in attrs {
		if !attr.path().is_ident("bind") {
			continue;
		}

		attr.parse_nested_meta(|meta| {
			let tag = if meta.path.is_ident("body") {
				// `body = "..."` is accepted and the key ignored.
				if meta.input.peek(syn::Token![=]) {
					meta.value()?.parse::<LitStr>()?;
				}
				SourceTag::Body
			} else {
				let key = |meta: &syn::meta::ParseNestedMeta| -> syn::Result<String> {
					let lit: LitStr = meta.value()?.parse()?;
					if lit.value().is_empty() {
						return Err(syn::Error::new(lit.span(), "bind key must not be empty"));
					}
					Ok(lit.value())
				};
				if meta.path.is_ident("header") {
					SourceTag::Header(key(&meta)?)
				} else if meta.path.is_ident("query") {
					SourceTag::Query(key(&meta)?)
				} else if meta.path.is_ident("path") {
					SourceTag::Path(key(&meta)?)
				} else {
					let name = meta
						.path
						.get_ident()
						.map(ToString::to_string)
						.unwrap_or_default();
					return Err(meta.error(format!(
						"unknown bind source `{}`; expected one of header, query, path or body",
						name
					)));
				}
			};

			if found.is_some() {
				return Err(meta.error("a field may carry only one bind source"));
			}
			found = Some(tag);
			Ok(())
		})?;
	}

	Ok(found)
}

fn field_name(ident: &syn::Ident) -> String {
	let name = ident.to_string();
	name.strip_prefix("r#").map(str::to_string).unwrap_or(name)
}

pub(crate) fn derive_bind_impl(input: DeriveInput) -> syn::Result<TokenStream> {
	let name = &input.ident;

	let fields = match &input.data {
		Data::Struct(data) => match &data.fields {
			Fields::Named(named) => &named.named,
			Fields::Unit => {
				return Err(syn::Error::new(
					name.span(),
					"Bind can only be derived for structs with named fields",
				));
			}
			Fields::Unnamed(unnamed) => {
				return Err(syn::Error::new(
					unnamed.span(),
					"Bind can only be derived for structs with named fields",
				));
			}
		},
		_ => {
			return Err(syn::Error::new(
				name.span(),
				"Bind can only be derived for structs with named fields",
			));
		}
	};

	let mut bound = Vec::new();
	let mut body_field: Option<&syn::Ident> = None;

	for field in fields {
		let Some(tag) = parse_bind_attrs(&field.attrs)? else {
			continue;
		};
		let Some(ident) = &field.ident else {
			continue;
		};

		if tag == SourceTag::Body {
			if let Some(previous) = body_field {
				return Err(syn::Error::new(
					ident.span(),
					format!(
						"only one field may be bound from the body; `{}` already is",
						previous
					),
				));
			}
			body_field = Some(ident);
		}

		bound.push(BoundField {
			ident,
			ty: &field.ty,
			kind: classify(&field.ty),
			tag,
		});
	}

	let krate = get_tagbind_params_crate()?;
	let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

	let borrowed: Vec<_> = bound
		.iter()
		.filter(|f| f.kind.borrows_field())
		.map(|f| f.ident)
		.collect();

	let descriptors = bound.iter().map(|f| {
		let field_name = field_name(f.ident);
		let target = f.kind.target_expr(&krate, f.ident, f.ty);
		let tag = match &f.tag {
			SourceTag::Header(key) => quote!(#krate::Tag::header(#key)),
			SourceTag::Query(key) => quote!(#krate::Tag::query(#key)),
			SourceTag::Path(key) => quote!(#krate::Tag::path(#key)),
			SourceTag::Body => quote!(#krate::Tag::body()),
		};
		quote! {
			#krate::FieldDescriptor::new(#field_name, #target).tag(#tag)
		}
	});

	Ok(quote! {
		impl #impl_generics #krate::Bind for #name #ty_generics #where_clause {
			fn fields(&mut self) -> ::std::vec::Vec<#krate::FieldDescriptor<'_>> {
				let Self { #(#borrowed,)* .. } = self;
				::std::vec![#(#descriptors),*]
			}
		}
	})
}
