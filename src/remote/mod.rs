//! Remote category store client.
//!
//! The store keeps one named category per collection (Food, Subscriptions,
//! Academics), each holding an opaque content blob that wraps the serialized
//! items. This module owns the wire types and the HTTP client; everything
//! above it works with decoded collections and typed errors.

mod client;
mod types;

pub use client::{RemoteClient, RemoteError};
pub use types::{decode_items, Category};
