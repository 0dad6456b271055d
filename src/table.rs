//! Contains the `DocumentTable` struct, the in-memory ordered map behind a single collection.
use crate::types::{Document, ID_FIELD};
use indexmap::IndexMap;

/// DocumentTable newtype keeping documents keyed by identifier in insertion order.
#[derive(Debug, Clone, Default)]
pub struct DocumentTable(IndexMap<String, Document>);

impl DocumentTable {
    /// Create a new empty document table
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Get a document by identifier
    pub fn get(&self, id: &str) -> Option<&Document> {
        self.0.get(id)
    }

    /// Append a document, or replace the one stored under the same identifier in place
    pub fn insert(&mut self, id: String, document: Document) -> Option<Document> {
        self.0.insert(id, document)
    }

    /// Remove a document, keeping the relative order of the others
    pub fn remove(&mut self, id: &str) -> Option<Document> {
        self.0.shift_remove(id)
    }

    /// Check if an identifier exists
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    /// Get the number of documents
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// List all identifiers in insertion order
    pub fn ids(&self) -> Vec<String> {
        self.0.keys().cloned().collect()
    }

    /// Iterate over documents in insertion order
    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.0.values()
    }

    /// Build a table from persisted documents, keying each by its own identifier field.
    ///
    /// Returns the offending position if a document has no string identifier.
    pub fn from_documents<I>(documents: I) -> std::result::Result<Self, usize>
    where
        I: IntoIterator<Item = Document>,
    {
        let mut table = Self::new();
        for (position, document) in documents.into_iter().enumerate() {
            let id = match document.get(ID_FIELD).and_then(|id| id.as_str()) {
                Some(id) if !id.is_empty() => id.to_string(),
                _ => return Err(position),
            };
            table.insert(id, document);
        }
        Ok(table)
    }
}

impl serde::Serialize for DocumentTable {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter())
    }
}
