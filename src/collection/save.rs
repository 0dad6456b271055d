//! Contains the save methods writing a `Collection` back to its file.
use super::Collection;
use crate::Result;

impl Collection {
    /// Writes the collection to its file using async file I/O.
    ///
    /// The in-memory table is left untouched whether or not the write succeeds.
    pub async fn save(&self) -> Result<()> {
        let bytes = self.encode()?;
        self.persistence.write(bytes).await
    }

    /// Writes the collection to its file, blocking the calling thread until done.
    pub fn save_sync(&self) -> Result<()> {
        let bytes = self.encode()?;
        self.persistence.write_blocking(&bytes)
    }

    fn encode(&self) -> Result<Vec<u8>> {
        let table = self.table.read();
        self.persistence.encode(&table)
    }
}
