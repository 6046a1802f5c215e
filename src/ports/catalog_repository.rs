use crate::domain::{CatalogEntry, Isbn13};
use async_trait::async_trait;

#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// カタログリポジトリポート
///
/// 外部カタログ（Aladin）から取り込んだ書誌情報の保存と取得を抽象化する。
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// ISBN-13でカタログエントリを取得する
    async fn find_by_isbn13(&self, isbn13: &Isbn13) -> Result<Option<CatalogEntry>>;

    /// カタログエントリを保存する（upsert）
    async fn save(&self, entry: CatalogEntry) -> Result<()>;
}
