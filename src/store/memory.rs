//! In-memory store implementation.
//!
//! Collections live in a `RwLock<HashMap<String, Vec<Value>>>` scoped to the
//! process. Tests construct a fresh store per test instead of sharing
//! module-level state.

use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::Value;

use super::errors::{StoreError, StoreResult};
use super::Store;

/// Process-lifetime in-memory record store.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    data: RwLock<HashMap<String, Vec<Value>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The integer id of a record, if it carries one.
    fn record_id(record: &Value) -> Option<i64> {
        record.get("id").and_then(Value::as_i64)
    }

    fn next_id(records: &[Value]) -> i64 {
        records
            .iter()
            .filter_map(Self::record_id)
            .max()
            .map_or(1, |max| max + 1)
    }
}

impl Store for InMemoryStore {
    fn find(&self, collection: &str) -> StoreResult<Vec<Value>> {
        let data = self
            .data
            .read()
            .map_err(|_| StoreError::Internal("Lock poisoned".to_string()))?;

        Ok(data.get(collection).cloned().unwrap_or_default())
    }

    fn find_one(&self, collection: &str, id: i64) -> StoreResult<Value> {
        let data = self
            .data
            .read()
            .map_err(|_| StoreError::Internal("Lock poisoned".to_string()))?;

        data.get(collection)
            .and_then(|records| {
                records
                    .iter()
                    .find(|record| Self::record_id(record) == Some(id))
            })
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    fn insert_one(&self, collection: &str, mut record: Value) -> StoreResult<i64> {
        let mut data = self
            .data
            .write()
            .map_err(|_| StoreError::Internal("Lock poisoned".to_string()))?;

        let records = data.entry(collection.to_string()).or_default();

        let id = match Self::record_id(&record) {
            Some(id) => {
                if records.iter().any(|r| Self::record_id(r) == Some(id)) {
                    return Err(StoreError::DuplicateId(id));
                }
                id
            }
            None => {
                let id = Self::next_id(records);
                let Some(fields) = record.as_object_mut() else {
                    return Err(StoreError::Internal("Record must be an object".to_string()));
                };
                fields.insert("id".to_string(), Value::from(id));
                id
            }
        };

        records.push(record);
        Ok(id)
    }

    fn update_one(&self, collection: &str, id: i64, patch: Value) -> StoreResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|_| StoreError::Internal("Lock poisoned".to_string()))?;

        let records = data.get_mut(collection).ok_or(StoreError::NotFound)?;
        let slot = records
            .iter_mut()
            .find(|record| Self::record_id(record) == Some(id))
            .ok_or(StoreError::NotFound)?;

        let Value::Object(mut replacement) = patch else {
            return Err(StoreError::Internal("Record must be an object".to_string()));
        };

        // The stored id is immutable; a stray id in the patch is overwritten.
        replacement.insert("id".to_string(), Value::from(id));
        *slot = Value::Object(replacement);
        Ok(())
    }

    fn delete_one(&self, collection: &str, id: i64) -> StoreResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|_| StoreError::Internal("Lock poisoned".to_string()))?;

        let records = data.get_mut(collection).ok_or(StoreError::NotFound)?;
        let index = records
            .iter()
            .position(|record| Self::record_id(record) == Some(id))
            .ok_or(StoreError::NotFound)?;

        records.remove(index);
        Ok(())
    }
}
