use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoClient;
use parking_lot::RwLock;
use serde_json::Value;

use crate::attributes::{item_to_record, record_to_item};
use crate::error::ApiError;
use crate::Record;

/// Flat keyed collections of schema-less records.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Point read by a string partition key.
    async fn get_item(
        &self,
        table: &str,
        key_name: &str,
        key_value: &str,
    ) -> Result<Option<Record>, ApiError>;

    /// Unconditional put; replaces any record with the same key.
    async fn put_item(&self, table: &str, record: Record) -> Result<(), ApiError>;
}

pub struct DynamoStore {
    client: DynamoClient,
}

impl DynamoStore {
    pub fn new(client: DynamoClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RecordStore for DynamoStore {
    async fn get_item(
        &self,
        table: &str,
        key_name: &str,
        key_value: &str,
    ) -> Result<Option<Record>, ApiError> {
        let result = self
            .client
            .get_item()
            .table_name(table)
            .key(key_name, AttributeValue::S(key_value.to_string()))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    "❌ DynamoDB get_item failed: table={}, {}={}, error={}",
                    table,
                    key_name,
                    key_value,
                    e
                );
                ApiError::store("get_item", e)
            })?;

        Ok(result.item().map(item_to_record))
    }

    async fn put_item(&self, table: &str, record: Record) -> Result<(), ApiError> {
        self.client
            .put_item()
            .table_name(table)
            .set_item(Some(record_to_item(record)))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("❌ DynamoDB put_item failed: table={}, error={}", table, e);
                ApiError::store("put_item", e)
            })?;

        Ok(())
    }
}

/// In-memory backend for tests. Each table must be registered with its key
/// attribute, like a DynamoDB table with a string hash key.
#[derive(Default)]
pub struct MemoryStore {
    keys: HashMap<String, String>,
    tables: RwLock<HashMap<String, HashMap<String, Record>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_table(mut self, table: impl Into<String>, key_name: impl Into<String>) -> Self {
        let table = table.into();
        self.tables.get_mut().insert(table.clone(), HashMap::new());
        self.keys.insert(table, key_name.into());
        self
    }

    /// Snapshot of every record in `table`.
    pub fn items(&self, table: &str) -> Vec<Record> {
        self.tables
            .read()
            .get(table)
            .map(|records| records.values().cloned().collect())
            .unwrap_or_default()
    }

    pub fn len(&self, table: &str) -> usize {
        self.tables.read().get(table).map_or(0, HashMap::len)
    }

    pub fn is_empty(&self, table: &str) -> bool {
        self.len(table) == 0
    }

    fn key_name(&self, table: &str, operation: &'static str) -> Result<&str, ApiError> {
        self.keys
            .get(table)
            .map(String::as_str)
            .ok_or_else(|| ApiError::store(operation, format!("Requested resource not found: {}", table)))
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn get_item(
        &self,
        table: &str,
        key_name: &str,
        key_value: &str,
    ) -> Result<Option<Record>, ApiError> {
        let expected = self.key_name(table, "get_item")?;
        if expected != key_name {
            return Err(ApiError::store(
                "get_item",
                "The provided key element does not match the schema",
            ));
        }

        Ok(self
            .tables
            .read()
            .get(table)
            .and_then(|records| records.get(key_value))
            .cloned())
    }

    async fn put_item(&self, table: &str, record: Record) -> Result<(), ApiError> {
        let key_name = self.key_name(table, "put_item")?;
        let key = match record.get(key_name) {
            Some(Value::String(key)) if !key.is_empty() => key.clone(),
            _ => {
                return Err(ApiError::store(
                    "put_item",
                    format!("Missing or non-string key attribute: {}", key_name),
                ))
            }
        };

        self.tables
            .write()
            .entry(table.to_string())
            .or_default()
            .insert(key, record);

        Ok(())
    }
}
