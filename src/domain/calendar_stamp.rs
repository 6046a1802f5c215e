use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{CalendarStampId, Isbn13, MemberId, ReadingRecord, ReadingRecordId, ReadingStatus};

/// カレンダースタンプ
///
/// 読書ステータスが設定されるたびに追記される不変のイベント。
/// 更新・削除は行わない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarStamp {
    pub stamp_id: CalendarStampId,
    pub member_id: MemberId,
    pub record_id: ReadingRecordId,
    pub isbn13: Isbn13,
    pub record_date: NaiveDate,
    /// 記録時点のステータス
    pub status: ReadingStatus,
}

/// 純粋関数：読書記録の現在ステータスからスタンプを作る
pub fn stamp_for(record: &ReadingRecord, record_date: NaiveDate) -> CalendarStamp {
    CalendarStamp {
        stamp_id: CalendarStampId::new(),
        member_id: record.member_id,
        record_id: record.record_id,
        isbn13: record.isbn13.clone(),
        record_date,
        status: record.status,
    }
}
