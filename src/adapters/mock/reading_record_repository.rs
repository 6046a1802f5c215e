use crate::domain::{CalendarStamp, Isbn13, MemberId, ReadingRecord, calendar_stamp::stamp_for};
use crate::ports::reading_record_repository::{
    ReadingRecordRepository as ReadingRecordRepositoryTrait, Result, SaveWithStampError,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::CalendarStampRepository;

/// ReadingRecordRepositoryのモック実装
///
/// (member_id, isbn13) をキーに保持し、確定した保存の回数も数える。
/// スタンプは共有するモックのスタンプログに追記し、
/// 追記に失敗したら記録も書き込まない。
pub struct ReadingRecordRepository {
    records: Mutex<HashMap<(MemberId, Isbn13), ReadingRecord>>,
    stamps: Arc<CalendarStampRepository>,
    save_count: AtomicUsize,
}

impl ReadingRecordRepository {
    pub fn new(stamps: Arc<CalendarStampRepository>) -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            stamps,
            save_count: AtomicUsize::new(0),
        }
    }

    /// 確定した保存の回数
    pub fn save_count(&self) -> usize {
        self.save_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReadingRecordRepositoryTrait for ReadingRecordRepository {
    async fn find_by_member_and_isbn13(
        &self,
        member_id: MemberId,
        isbn13: &Isbn13,
    ) -> Result<Option<ReadingRecord>> {
        let records = self.records.lock().unwrap();
        Ok(records.get(&(member_id, isbn13.clone())).cloned())
    }

    async fn save_with_stamp(
        &self,
        record: ReadingRecord,
        record_date: NaiveDate,
    ) -> std::result::Result<(ReadingRecord, CalendarStamp), SaveWithStampError> {
        // ロック順は常に records → stamps
        let mut records = self.records.lock().unwrap();
        let key = (record.member_id, record.isbn13.clone());
        let saved = match records.get(&key) {
            Some(existing) => ReadingRecord {
                record_id: existing.record_id,
                ..record
            },
            None => record,
        };

        let stamp = stamp_for(&saved, record_date);
        self.stamps
            .append(stamp.clone())
            .map_err(SaveWithStampError::Stamp)?;

        records.insert(key, saved.clone());
        self.save_count.fetch_add(1, Ordering::SeqCst);
        Ok((saved, stamp))
    }

    async fn find_by_member(&self, member_id: MemberId) -> Result<Vec<ReadingRecord>> {
        let records = self.records.lock().unwrap();
        let mut found: Vec<ReadingRecord> = records
            .values()
            .filter(|r| r.member_id == member_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| a.isbn13.as_str().cmp(b.isbn13.as_str()));
        Ok(found)
    }
}
