use serde::{Deserialize, Serialize};

use super::Isbn13;

/// カタログエントリ（Aladinの書誌情報）
///
/// 外部カタログから取り込んだ書籍のメタデータ。読書記録からは読み取り専用。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub isbn13: Isbn13,
    pub title: String,
    pub author: String,
    /// 総ページ数（読了時の現在ページになる）
    pub pages_count: u32,
}
