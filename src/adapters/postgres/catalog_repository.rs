use crate::domain::{CatalogEntry, Isbn13};
use crate::ports::catalog_repository::{CatalogRepository as CatalogRepositoryTrait, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row};

use super::columns;

/// CatalogRepositoryのPostgreSQL実装
pub struct CatalogRepository {
    pool: PgPool,
}

impl CatalogRepository {
    /// PostgreSQLコネクションプールから新しいCatalogRepositoryを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogRepositoryTrait for CatalogRepository {
    async fn find_by_isbn13(&self, isbn13: &Isbn13) -> Result<Option<CatalogEntry>> {
        let row = sqlx::query(
            r#"
            SELECT isbn13, title, author, pages_count
            FROM catalog_entries
            WHERE isbn13 = $1
            "#,
        )
        .bind(isbn13.as_str())
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(Some(CatalogEntry {
            isbn13: columns::isbn13(row.get("isbn13"))?,
            title: row.get("title"),
            author: row.get("author"),
            pages_count: columns::page(row.get("pages_count"), "pages_count")?,
        }))
    }

    /// カタログエントリを保存（upsert）
    async fn save(&self, entry: CatalogEntry) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO catalog_entries (isbn13, title, author, pages_count)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (isbn13)
            DO UPDATE SET
                title = EXCLUDED.title,
                author = EXCLUDED.author,
                pages_count = EXCLUDED.pages_count,
                updated_at = now()
            "#,
        )
        .bind(entry.isbn13.as_str())
        .bind(&entry.title)
        .bind(&entry.author)
        .bind(columns::page_to_i32(entry.pages_count, "pages_count")?)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
