//! The `Record` trait shared by every persisted entity.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// A JSON-serializable entity with a unique string identifier.
///
/// The generic collection store is bounded on this trait: it reads the id
/// for lookups and assigns a freshly generated id on insert. Implementations
/// must treat the id as opaque - the store is the only component that writes
/// it.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// The identifier field name in the persisted JSON object.
    const ID_FIELD: &'static str = "id";

    /// The record's identifier.
    fn id(&self) -> &str;

    /// Overwrite the record's identifier.
    ///
    /// Called by the store when inserting (fresh id) and when restoring the
    /// original id after a patch merge.
    fn set_id(&mut self, id: String);
}
