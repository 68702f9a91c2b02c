//! Binding module.
//!
//! `#[derive(Bind)]` output refers to this module when `tagbind` is the
//! only tagbind dependency.

pub use tagbind_params::*;
