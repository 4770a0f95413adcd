//! Tienda Store - file-backed collection persistence.
//!
//! Each collection (products, carts) is one flat file holding a JSON array
//! of records. All access goes through a [`CollectionStore`], which loads
//! the full collection, applies a mutation, and atomically persists the
//! result; a per-store [`WriteSerializer`] guarantees that load-modify-save
//! cycles never interleave, so concurrent writers cannot lose updates.
//!
//! The two domain stores specialize the generic one:
//! - [`ProductCatalog`] owns identifier generation and field defaulting for
//!   products.
//! - [`CartStore`] owns carts and validates product references against the
//!   catalog when items are added.
//!
//! This crate never logs and never retries: every failure is returned to
//! the caller as a [`StoreError`], and retry policy belongs to whoever sits
//! above the store.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod carts;
pub mod catalog;
pub mod collection;
pub mod error;
pub mod id;
pub mod serializer;

pub use carts::CartStore;
pub use catalog::ProductCatalog;
pub use collection::CollectionStore;
pub use error::{EntityKind, StoreError};
pub use id::{IdSource, RandomIds};
pub use serializer::WriteSerializer;
