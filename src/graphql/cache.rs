/// Query result cache for the list operations
///
/// An explicit cache abstraction keyed by operation name + canonical JSON
/// arguments. Each entry is tagged with the entity collection it was
/// derived from, and mutations invalidate by collection name. There is no
/// global singleton: the cache is constructed in create_app and handed to
/// the schema as context data.

use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Collection tag for patient list results
pub const PATIENTS: &str = "patients";
/// Collection tag for appointment list results
pub const APPOINTMENTS: &str = "appointments";
/// Collection tag for workflow step list results
pub const WORKFLOW_STEPS: &str = "workflowSteps";

#[derive(Debug, Clone)]
struct CacheEntry {
    /// Which entity collection this result was derived from
    collection: &'static str,
    value: Value,
}

/// Cache of serialized list results, shared across requests
#[derive(Debug, Clone, Default)]
pub struct QueryCache {
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache key: operation name plus its serialized arguments. Every
    /// operation has a single call site building `args` the same way, so
    /// the serialization is canonical.
    fn key(operation: &str, args: &Value) -> String {
        format!("{operation}:{args}")
    }

    /// Look up a cached result for this operation + argument combination
    pub async fn get(&self, operation: &str, args: &Value) -> Option<Value> {
        self.entries
            .read()
            .await
            .get(&Self::key(operation, args))
            .map(|entry| entry.value.clone())
    }

    /// Store a result, tagged with the collection it belongs to
    pub async fn put(&self, operation: &str, args: &Value, collection: &'static str, value: Value) {
        self.entries
            .write()
            .await
            .insert(Self::key(operation, args), CacheEntry { collection, value });
    }

    /// Drop every cached result derived from the given collection
    pub async fn invalidate(&self, collection: &str) {
        self.entries
            .write()
            .await
            .retain(|_, entry| entry.collection != collection);
    }
}
