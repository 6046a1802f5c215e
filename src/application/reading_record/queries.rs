use crate::domain::{CalendarStamp, Isbn13, MemberId, ReadingRecord};

use super::errors::{ReadingRecordApplicationError, Result};
use super::reading_record_service::{ServiceDependencies, load_member};

/// 会員の特定の書籍の読書記録を取得する
pub async fn find_record(
    deps: &ServiceDependencies,
    member_id: MemberId,
    isbn13: &Isbn13,
) -> Result<ReadingRecord> {
    let member = load_member(&deps.member_repository, member_id).await?;

    deps.record_repository
        .find_by_member_and_isbn13(member.member_id, isbn13)
        .await
        .map_err(ReadingRecordApplicationError::RecordRepositoryError)?
        .ok_or(ReadingRecordApplicationError::RecordNotFound)
}

/// 会員の全読書記録を取得する
pub async fn list_records(
    deps: &ServiceDependencies,
    member_id: MemberId,
) -> Result<Vec<ReadingRecord>> {
    let member = load_member(&deps.member_repository, member_id).await?;

    deps.record_repository
        .find_by_member(member.member_id)
        .await
        .map_err(ReadingRecordApplicationError::RecordRepositoryError)
}

/// 会員のカレンダースタンプを記録日順に取得する
pub async fn list_calendar_stamps(
    deps: &ServiceDependencies,
    member_id: MemberId,
) -> Result<Vec<CalendarStamp>> {
    let member = load_member(&deps.member_repository, member_id).await?;

    deps.calendar_stamp_repository
        .find_by_member(member.member_id)
        .await
        .map_err(ReadingRecordApplicationError::CalendarStampRepositoryError)
}
