//! Contains the document operations for the `Collection`: insert, the filtered queries and delete.
use super::Collection;
use crate::matcher::{kind_of, Filter};
use crate::types::{Document, ID_FIELD};
use crate::{RdocsError, Result};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

impl Collection {
    /// Inserts a new document and returns it as stored, including its identifier.
    ///
    /// `fields` must serialize to a JSON object. A fresh identifier is generated and written to
    /// the `_id` field, overriding any caller-supplied value. The document becomes the last one
    /// in insertion order.
    pub fn insert<T: Serialize + ?Sized>(&self, fields: &T) -> Result<Document> {
        let mut document = match serde_json::to_value(fields)? {
            Value::Object(document) => document,
            other => {
                return Err(RdocsError::InvalidDocument(format!(
                    "expected a JSON object, got {}",
                    kind_of(&other)
                )))
            }
        };

        let mut table = self.table.write();
        let id = loop {
            let candidate = Uuid::new_v4().to_string();
            if !table.contains(&candidate) {
                break candidate;
            }
        };
        document.insert(ID_FIELD.to_string(), Value::String(id.clone()));
        table.insert(id, document.clone());
        drop(table);

        self.flush_state.mark_dirty();
        Ok(document)
    }

    /// Returns documents in insertion order.
    ///
    /// Without a filter every document is returned and `limit` is ignored. With a filter only
    /// matching documents are kept, and `limit` caps the number of matches, keeping the earliest.
    pub fn find(&self, filter: Option<&Filter>, limit: Option<usize>) -> Vec<Document> {
        let table = self.table.read();
        let found: Vec<Document> = match filter {
            None => table.documents().cloned().collect(),
            Some(filter) => table
                .documents()
                .filter(|document| filter.matches(document))
                .take(limit.unwrap_or(usize::MAX))
                .cloned()
                .collect(),
        };
        found
    }

    /// Returns a snapshot of every document in insertion order.
    pub fn find_all(&self) -> Vec<Document> {
        self.find(None, None)
    }

    /// Looks a document up by identifier.
    pub fn find_by_id(&self, id: &str) -> Option<Document> {
        self.table.read().get(id).cloned()
    }

    /// Returns the first document, in insertion order, that matches `filter`.
    pub fn find_unique(&self, filter: &Filter) -> Option<Document> {
        let table = self.table.read();
        let found = table
            .documents()
            .find(|document| filter.matches(document))
            .cloned();
        found
    }

    /// Removes every document matching `filter` and returns them in insertion order.
    pub fn delete(&self, filter: &Filter) -> Vec<Document> {
        let mut table = self.table.write();
        let ids: Vec<String> = table
            .documents()
            .filter(|document| filter.matches(document))
            .filter_map(|document| document.get(ID_FIELD).and_then(Value::as_str))
            .map(str::to_string)
            .collect();

        let removed: Vec<Document> = ids.iter().filter_map(|id| table.remove(id)).collect();
        drop(table);

        if !removed.is_empty() {
            self.flush_state.mark_dirty();
        }
        removed
    }
}
