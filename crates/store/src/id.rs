//! Identifier generation for inserted records.

use rand::RngCore;

/// Length in characters of a generated identifier (96 bits, hex-encoded).
pub const ID_LEN: usize = 24;

/// Source of fresh record identifiers.
///
/// `existing` carries every id currently in the collection, so an
/// implementation may check for collisions before returning. The store
/// calls this under its write serializer; the collection cannot change
/// between generation and insertion.
pub trait IdSource: Send + Sync {
    /// Produce an identifier that must not collide with any id in
    /// `existing`.
    fn fresh(&self, existing: &[&str]) -> String;
}

/// Default id source: 96 bits from a CSPRNG, lowercase hex.
///
/// Ignores `existing` - at this size the collision probability is treated
/// as negligible. Substitute a checking implementation through
/// [`CollectionStore::with_ids`](crate::CollectionStore::with_ids) if that
/// assumption ever stops holding.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn fresh(&self, _existing: &[&str]) -> String {
        let mut bytes = [0u8; ID_LEN / 2];
        rand::rng().fill_bytes(&mut bytes);
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }
}
