//! Shared domain types.
//!
//! Records are explicit structured types: the field set and defaults are
//! fixed here, validated at construction by the store layer, never at each
//! access.

pub mod cart;
pub mod id;
pub mod product;
pub mod record;

pub use cart::{Cart, CartItem};
pub use id::{CartId, ProductId};
pub use product::{DEFAULT_CATEGORY, Product, ProductDraft, ProductPatch};
pub use record::Record;
