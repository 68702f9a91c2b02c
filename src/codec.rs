//! Payload codecs and content negotiation module.

pub use tagbind_codec::*;
