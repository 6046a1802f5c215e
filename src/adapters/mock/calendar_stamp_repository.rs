use crate::domain::{CalendarStamp, MemberId};
use crate::ports::calendar_stamp_repository::{
    CalendarStampRepository as CalendarStampRepositoryTrait, Result,
};
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// Mock implementation of CalendarStampRepository
///
/// Keeps stamps in an append-only vector. The mock ReadingRecordRepository
/// appends into it when saving a record.
pub struct CalendarStampRepository {
    stamps: Mutex<Vec<CalendarStamp>>,
    fail_appends: AtomicBool,
}

impl CalendarStampRepository {
    pub fn new() -> Self {
        Self {
            stamps: Mutex::new(Vec::new()),
            fail_appends: AtomicBool::new(false),
        }
    }

    /// All stamps in append order
    pub fn all(&self) -> Vec<CalendarStamp> {
        self.stamps.lock().unwrap().clone()
    }

    /// Make every following append fail (simulates a broken stamp log)
    pub fn fail_appends(&self) {
        self.fail_appends.store(true, Ordering::SeqCst);
    }

    pub(super) fn append(&self, stamp: CalendarStamp) -> Result<()> {
        if self.fail_appends.load(Ordering::SeqCst) {
            return Err("calendar stamp log unavailable".into());
        }
        self.stamps.lock().unwrap().push(stamp);
        Ok(())
    }
}

impl Default for CalendarStampRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CalendarStampRepositoryTrait for CalendarStampRepository {
    async fn find_by_member(&self, member_id: MemberId) -> Result<Vec<CalendarStamp>> {
        let mut found: Vec<CalendarStamp> = self
            .stamps
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.member_id == member_id)
            .cloned()
            .collect();
        // 安定ソートなので同日のスタンプは追記順のまま
        found.sort_by_key(|s| s.record_date);
        Ok(found)
    }
}
