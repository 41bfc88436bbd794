//! In-process record store.
//!
//! Collections of JSON records keyed by an integer `id`. The store is the
//! single owner of id uniqueness and id assignment; handlers only see the
//! five-operation contract below. There are no transactions and no ordering
//! guarantees across requests.

mod errors;
mod memory;
pub mod seed;

pub use errors::{StoreError, StoreResult};
pub use memory::InMemoryStore;

use serde_json::Value;

/// Collection operations expected of any record store.
pub trait Store: Send + Sync {
    /// All records in a collection. An unknown collection is empty.
    fn find(&self, collection: &str) -> StoreResult<Vec<Value>>;

    /// The record with the given id, or `NotFound`.
    fn find_one(&self, collection: &str, id: i64) -> StoreResult<Value>;

    /// Insert a record, returning its id.
    ///
    /// A record carrying an integer `id` keeps it; inserting an id already
    /// present fails with `DuplicateId`. A record without an integer `id`
    /// is assigned the next free one.
    fn insert_one(&self, collection: &str, record: Value) -> StoreResult<i64>;

    /// Replace all non-id fields of the record with the given id. The
    /// stored id is immutable and survives the replacement.
    fn update_one(&self, collection: &str, id: i64, patch: Value) -> StoreResult<()>;

    /// Remove the record with the given id.
    fn delete_one(&self, collection: &str, id: i64) -> StoreResult<()>;
}
