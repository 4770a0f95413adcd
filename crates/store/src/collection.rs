//! Generic file-backed collection store.

use std::ffi::OsString;
use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use tienda_core::Record;

use crate::error::{Result, StoreError};
use crate::id::{IdSource, RandomIds};
use crate::serializer::WriteSerializer;

/// Repository over one JSON-array file of records.
///
/// All four mutating operations run a full load-modify-save cycle under the
/// store's [`WriteSerializer`]; there is no partial or streaming update.
/// Reads take no lock - [`persist`](Self::persist) replaces the file
/// atomically, so a concurrent reader sees either the old array or the new
/// one, never a torn write.
pub struct CollectionStore<T> {
    path: PathBuf,
    ids: Box<dyn IdSource>,
    serializer: WriteSerializer,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> CollectionStore<T> {
    /// Create a store over `path` with the default random id source.
    ///
    /// The file does not have to exist yet; an absent file reads as an
    /// empty collection and is created on the first mutation.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_ids(path, Box::new(RandomIds))
    }

    /// Create a store over `path` with a custom id source.
    #[must_use]
    pub fn with_ids(path: impl Into<PathBuf>, ids: Box<dyn IdSource>) -> Self {
        Self {
            path: path.into(),
            ids,
            serializer: WriteSerializer::new(),
            _record: PhantomData,
        }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The serializer guarding this store's mutating cycles.
    ///
    /// Specialized stores acquire it when they run a custom
    /// load-modify-save cycle through [`load`](Self::load) and
    /// [`persist`](Self::persist).
    pub(crate) const fn serializer(&self) -> &WriteSerializer {
        &self.serializer
    }

    /// Read and deserialize the full collection.
    ///
    /// "Collection not yet created" is not an error: an absent file, an
    /// empty file, and unparseable content (an interrupted write by some
    /// earlier, non-atomic writer) all read as an empty collection.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Corruption` if the file holds valid JSON that
    /// is not an array of records, and `StoreError::Io` for any other
    /// filesystem failure.
    pub async fn list(&self) -> Result<Vec<T>> {
        self.load().await
    }

    /// Find one record by identifier equality.
    ///
    /// # Errors
    ///
    /// Same failure conditions as [`list`](Self::list).
    pub async fn find_by_id(&self, id: &str) -> Result<Option<T>> {
        Ok(self.load().await?.into_iter().find(|record| record.id() == id))
    }

    /// Assign a fresh identifier to `record`, append it, and persist.
    ///
    /// Returns the stored record with its generated id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Corruption`, `StoreError::Io`, or
    /// `StoreError::Serialization` if the cycle fails; the collection file
    /// is left unchanged in that case.
    pub async fn insert(&self, mut record: T) -> Result<T> {
        let _permit = self.serializer.acquire().await;

        let mut records = self.load().await?;
        let existing: Vec<&str> = records.iter().map(Record::id).collect();
        record.set_id(self.ids.fresh(&existing));

        records.push(record.clone());
        self.persist(&records).await?;
        Ok(record)
    }

    /// Merge `fields` onto the record with `id` and persist.
    ///
    /// Fields present in the patch overwrite, fields absent are preserved,
    /// and the stored id is restored unconditionally regardless of what the
    /// patch contained. Returns `None` (without writing) when no record
    /// matches.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` if the merged object no longer fits
    /// the record shape, plus the failure conditions of
    /// [`insert`](Self::insert).
    pub async fn update_by_id(&self, id: &str, fields: Map<String, Value>) -> Result<Option<T>> {
        let _permit = self.serializer.acquire().await;

        let mut records = self.load().await?;
        let mut updated = None;
        for record in &mut records {
            if record.id() == id {
                let merged = merge_fields(record, &fields)?;
                *record = merged.clone();
                updated = Some(merged);
                break;
            }
        }

        let Some(updated) = updated else {
            return Ok(None);
        };
        self.persist(&records).await?;
        Ok(Some(updated))
    }

    /// Remove the record with `id` and persist the shrunk collection.
    ///
    /// Returns the removed record, or `None` (without writing) when no
    /// record matches.
    ///
    /// # Errors
    ///
    /// Same failure conditions as [`insert`](Self::insert).
    pub async fn delete_by_id(&self, id: &str) -> Result<Option<T>> {
        let _permit = self.serializer.acquire().await;

        let mut records = self.load().await?;
        let Some(position) = records.iter().position(|record| record.id() == id) else {
            return Ok(None);
        };

        let removed = records.remove(position);
        self.persist(&records).await?;
        Ok(Some(removed))
    }

    /// Read the raw collection. Callers running their own mutating cycle
    /// must hold this store's write permit.
    pub(crate) async fn load(&self) -> Result<Vec<T>> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        // Not JSON at all: the remains of an interrupted prior write.
        let Ok(value) = serde_json::from_slice::<Value>(&bytes) else {
            return Ok(Vec::new());
        };

        serde_json::from_value(value).map_err(|err| StoreError::Corruption {
            path: self.path.clone(),
            detail: err.to_string(),
        })
    }

    /// Serialize the full collection and atomically replace the backing
    /// file: write to a sibling temp path, flush to disk, then rename over
    /// the target. A reader never observes a half-written array.
    pub(crate) async fn persist(&self, records: &[T]) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(records)?;
        let tmp = self.tmp_path();

        let mut file = fs::File::create(&tmp).await?;
        file.write_all(&bytes).await?;
        file.sync_all().await?;
        drop(file);

        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    // Sibling of the target so the rename never crosses filesystems.
    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map_or_else(|| OsString::from("collection"), ToOwned::to_owned);
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl<T> std::fmt::Debug for CollectionStore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionStore")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// Merge patch fields over a record's JSON object, restoring the original
/// id, and deserialize the result back into the record type.
fn merge_fields<T: Record>(current: &T, fields: &Map<String, Value>) -> Result<T> {
    let mut value = serde_json::to_value(current)?;
    let Some(object) = value.as_object_mut() else {
        return Err(StoreError::Validation(
            "record does not serialize to a JSON object".to_owned(),
        ));
    };

    for (key, field) in fields {
        object.insert(key.clone(), field.clone());
    }
    object.insert(
        T::ID_FIELD.to_owned(),
        Value::String(current.id().to_owned()),
    );

    serde_json::from_value(value).map_err(|err| {
        StoreError::Validation(format!("patch does not fit the record shape: {err}"))
    })
}
