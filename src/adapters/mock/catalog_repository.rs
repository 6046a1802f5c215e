use crate::domain::{CatalogEntry, Isbn13};
use crate::ports::catalog_repository::{CatalogRepository as CatalogRepositoryTrait, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// CatalogRepositoryのモック実装
///
/// ISBN-13をキーにカタログエントリをメモリ上に保持する。
pub struct CatalogRepository {
    entries: Mutex<HashMap<Isbn13, CatalogEntry>>,
}

impl CatalogRepository {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for CatalogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogRepositoryTrait for CatalogRepository {
    async fn find_by_isbn13(&self, isbn13: &Isbn13) -> Result<Option<CatalogEntry>> {
        Ok(self.entries.lock().unwrap().get(isbn13).cloned())
    }

    async fn save(&self, entry: CatalogEntry) -> Result<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(entry.isbn13.clone(), entry);
        Ok(())
    }
}
