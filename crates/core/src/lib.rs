//! Tienda Core - Shared types library.
//!
//! This crate provides common types used across all Tienda components:
//! - `store` - File-backed collection store (catalog + carts)
//! - `server` - Public JSON API
//! - `cli` - Command-line tools for seeding and inspection
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no file access,
//! no HTTP. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Id newtypes, the `Product`/`Cart` records, and their
//!   creation/patch inputs

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
