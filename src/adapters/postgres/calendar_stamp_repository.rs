use crate::domain::{CalendarStamp, CalendarStampId, MemberId, ReadingRecordId};
use crate::ports::calendar_stamp_repository::{
    CalendarStampRepository as CalendarStampRepositoryTrait, Result,
};
use async_trait::async_trait;
use sqlx::{PgConnection, PgPool, Row, postgres::PgRow};

use super::columns;

fn map_row_to_calendar_stamp(row: &PgRow) -> Result<CalendarStamp> {
    Ok(CalendarStamp {
        stamp_id: CalendarStampId::from_uuid(row.get("stamp_id")),
        member_id: MemberId::from_uuid(row.get("member_id")),
        record_id: ReadingRecordId::from_uuid(row.get("record_id")),
        isbn13: columns::isbn13(row.get("isbn13"))?,
        record_date: row.get("record_date"),
        status: columns::status(row.get("status"))?,
    })
}

/// PostgreSQL implementation of CalendarStampRepository
///
/// Stamps live in an append-only table; rows are never updated or deleted.
/// Rows are written by `insert_stamp` in the same transaction as the record.
/// sequence_number preserves insertion order among stamps of the same day.
pub struct CalendarStampRepository {
    pool: PgPool,
}

impl CalendarStampRepository {
    /// Create a new CalendarStampRepository with a PostgreSQL connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Insert one stamp on the caller's connection
///
/// Used by the reading record repository inside its save transaction.
pub(super) async fn insert_stamp(conn: &mut PgConnection, stamp: &CalendarStamp) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO calendar_stamps (
            stamp_id,
            member_id,
            record_id,
            isbn13,
            record_date,
            status
        )
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(stamp.stamp_id.value())
    .bind(stamp.member_id.value())
    .bind(stamp.record_id.value())
    .bind(stamp.isbn13.as_str())
    .bind(stamp.record_date)
    .bind(stamp.status.as_str())
    .execute(&mut *conn)
    .await?;

    Ok(())
}

#[async_trait]
impl CalendarStampRepositoryTrait for CalendarStampRepository {
    /// Load a member's stamps ordered by record date, then insertion order
    async fn find_by_member(&self, member_id: MemberId) -> Result<Vec<CalendarStamp>> {
        let rows = sqlx::query(
            r#"
            SELECT stamp_id, member_id, record_id, isbn13, record_date, status
            FROM calendar_stamps
            WHERE member_id = $1
            ORDER BY record_date ASC, sequence_number ASC
            "#,
        )
        .bind(member_id.value())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row_to_calendar_stamp).collect()
    }
}
