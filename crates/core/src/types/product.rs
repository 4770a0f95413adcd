//! Catalog product record and its creation/patch inputs.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::record::Record;

/// Category assigned to products created without one.
pub const DEFAULT_CATEGORY: &str = "uncategorized";

/// A catalog product as persisted in the products collection file.
///
/// The field set is fixed: a stored product always carries every field, with
/// the defaults applied at creation time by the catalog. `id` is assigned by
/// the store and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub code: String,
    pub price: f64,
    pub status: bool,
    pub stock: u32,
    pub category: String,
    pub thumbnails: Vec<String>,
}

impl Record for Product {
    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn set_id(&mut self, id: String) {
        self.id = ProductId::new(id);
    }
}

/// Caller-supplied fields for creating a product.
///
/// Every field is optional at the type level; the catalog rejects drafts
/// missing `title`, `price`, or `code` and fills in the documented defaults
/// for the rest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub code: Option<String>,
    pub price: Option<f64>,
    pub status: Option<bool>,
    pub stock: Option<u32>,
    pub category: Option<String>,
    pub thumbnails: Option<Vec<String>>,
}

/// Partial update for a product.
///
/// Fields present overwrite the stored value, fields absent are preserved.
/// The stored id cannot be changed through a patch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnails: Option<Vec<String>>,
}

impl ProductPatch {
    /// Convert the patch into the JSON object merged over the stored record.
    ///
    /// Absent fields are omitted entirely, so the merge preserves them.
    #[must_use]
    pub fn into_fields(self) -> serde_json::Map<String, serde_json::Value> {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => map,
            // A struct of optional scalars always serializes to an object.
            _ => serde_json::Map::new(),
        }
    }

    /// Whether the patch changes anything at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.code.is_none()
            && self.price.is_none()
            && self.status.is_none()
            && self.stock.is_none()
            && self.category.is_none()
            && self.thumbnails.is_none()
    }
}
