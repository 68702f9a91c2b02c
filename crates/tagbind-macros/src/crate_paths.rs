//! Helper functions for dynamic crate path resolution using proc_macro_crate

use proc_macro2::TokenStream;
use quote::quote;

/// Resolves the path to the tagbind_params crate dynamically.
///
/// Prefers a direct `tagbind-params` dependency and falls back to the
/// `tagbind` facade, which re-exports it as `tagbind::params`. Returns an
/// error if neither is listed in Cargo.toml.
pub(crate) fn get_tagbind_params_crate() -> syn::Result<TokenStream> {
	use proc_macro_crate::{FoundCrate, crate_name};

	match crate_name("tagbind-params") {
		Ok(FoundCrate::Itself) => return Ok(quote!(::tagbind_params)),
		Ok(FoundCrate::Name(name)) => {
			let ident = syn::Ident::new(&name, proc_macro2::Span::call_site());
			return Ok(quote!(::#ident));
		}
		Err(_) => {}
	}

	match crate_name("tagbind") {
		Ok(FoundCrate::Itself) => Ok(quote!(::tagbind::params)),
		Ok(FoundCrate::Name(name)) => {
			let ident = syn::Ident::new(&name, proc_macro2::Span::call_site());
			Ok(quote!(::#ident::params))
		}
		Err(e) => Err(syn::Error::new(
			proc_macro2::Span::call_site(),
			format!(
				"failed to resolve `tagbind-params` crate: {}. Ensure `tagbind` or `tagbind-params` is listed in Cargo.toml dependencies.",
				e
			),
		)),
	}
}
