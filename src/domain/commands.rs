use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{CatalogEntry, Isbn13, MemberId, Rating};

/// ステータスごとに使われる入力項目
///
/// どの項目が採用されるかはステータスによって決まる。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusFields {
    pub my_rating: Option<Rating>,
    pub one_line_review: Option<String>,
    pub current_page: Option<u32>,
    pub start_date: Option<NaiveDate>,
    pub finish_date: Option<NaiveDate>,
}

/// コマンド：読書ステータスを記録する
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordStatus {
    pub member_id: MemberId,
    pub status_tab: String,
    pub catalog_entry: CatalogEntry,
    pub fields: StatusFields,
    /// 記録日（サーバー時計の「今日」）
    pub today: NaiveDate,
}

/// コマンド：ISBNからカタログを引いて読書ステータスを記録する
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordStatusByIsbn13 {
    pub member_id: MemberId,
    pub status_tab: String,
    pub isbn13: Isbn13,
    pub fields: StatusFields,
    pub today: NaiveDate,
}
