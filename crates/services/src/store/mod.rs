//! Key-value store abstraction.
//!
//! The whole application persists into four named JSON buckets, mirroring
//! a browser's local storage area: strings in, JSON out, scoped to one
//! profile (data directory), no schema versioning. Every service call does
//! a wholesale read-modify-write of the bucket it touches.
//!
//! Two backends are provided: [`MemoryStore`] for tests and [`FileStore`]
//! for persistence across runs.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Bucket keys for the persisted state layout.
///
/// These four keys are the entire external persistence interface.
pub mod buckets {
    /// The user list.
    pub const USERS: &str = "users";
    /// The order list, most-recent-first.
    pub const ORDERS: &str = "orders";
    /// The shop list, display order.
    pub const SHOPS: &str = "shops";
    /// The current-session slot.
    pub const CURRENT_USER: &str = "current_user";
}

/// Errors from store operations.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// Reading or writing the backing medium failed.
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A bucket held data that no longer deserializes.
    #[error("corrupt data in bucket '{bucket}': {source}")]
    Corrupt {
        /// Bucket key the bad data was read from.
        bucket: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be serialized for storage.
    #[error("failed to encode bucket '{bucket}': {source}")]
    Encode {
        /// Bucket key being written.
        bucket: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// A mapping from string keys to JSON strings.
///
/// Implementations only deal in raw strings; typed access goes through
/// [`StoreExt`]. `put_raw` replaces the value wholesale and `remove` of an
/// absent key is a no-op.
pub trait Store: Send + Sync {
    /// Read the raw JSON string stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the backing medium cannot be read.
    fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the backing medium cannot be written.
    fn put_raw(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete the value stored under `key`. Absent keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the backing medium cannot be written.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Typed accessors over any [`Store`].
pub trait StoreExt: Store {
    /// Read and deserialize the value under `key`, or `default` if the key
    /// is absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Corrupt`] if stored data fails to deserialize.
    fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T, StoreError> {
        match self.get_raw(key)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
                bucket: key.to_owned(),
                source,
            }),
            None => Ok(default),
        }
    }

    /// Read and deserialize the value under `key`, if present.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Corrupt`] if stored data fails to deserialize.
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.get_raw(key)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|source| StoreError::Corrupt {
                    bucket: key.to_owned(),
                    source,
                }),
            None => Ok(None),
        }
    }

    /// Serialize `value` and store it under `key`, replacing any previous
    /// value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Encode`] if serialization fails, or
    /// [`StoreError::Io`] if the write fails.
    fn put<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value).map_err(|source| StoreError::Encode {
            bucket: key.to_owned(),
            source,
        })?;
        self.put_raw(key, &raw)
    }
}

impl<S: Store + ?Sized> StoreExt for S {}
