use crate::domain::{
    CalendarStamp, Isbn13, MemberId, ReadingRecord, ReadingRecordId, calendar_stamp::stamp_for,
};
use crate::ports::reading_record_repository::{
    ReadingRecordRepository as ReadingRecordRepositoryTrait, Result, SaveWithStampError,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{PgPool, Row, postgres::PgRow};

use super::calendar_stamp_repository::insert_stamp;
use super::columns;

/// PostgreSQLの行データをReadingRecordに変換する
///
/// 数値列（評価・ページ）とステータス文字列の変換でエラーハンドリングを行う。
fn map_row_to_reading_record(row: &PgRow) -> Result<ReadingRecord> {
    let current_page: Option<i32> = row.get("current_page");

    Ok(ReadingRecord {
        record_id: ReadingRecordId::from_uuid(row.get("record_id")),
        member_id: MemberId::from_uuid(row.get("member_id")),
        isbn13: columns::isbn13(row.get("isbn13"))?,
        status: columns::status(row.get("status"))?,
        my_rating: columns::rating(row.get("my_rating"))?,
        one_line_review: row.get("one_line_review"),
        current_page: current_page
            .map(|page| columns::page(page, "current_page"))
            .transpose()?,
        start_date: row.get("start_date"),
        finish_date: row.get("finish_date"),
    })
}

/// ReadingRecordRepositoryのPostgreSQL実装
///
/// (member_id, isbn13) の一意制約でupsertし、
/// 同じ組への同時書き込みも1行に収束させる。
/// カレンダースタンプの追記も同じトランザクションで行う。
pub struct ReadingRecordRepository {
    pool: PgPool,
}

impl ReadingRecordRepository {
    /// PostgreSQLコネクションプールから新しいReadingRecordRepositoryを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReadingRecordRepositoryTrait for ReadingRecordRepository {
    async fn find_by_member_and_isbn13(
        &self,
        member_id: MemberId,
        isbn13: &Isbn13,
    ) -> Result<Option<ReadingRecord>> {
        let row = sqlx::query(
            r#"
            SELECT
                record_id,
                member_id,
                isbn13,
                status,
                my_rating,
                one_line_review,
                current_page,
                start_date,
                finish_date
            FROM reading_records
            WHERE member_id = $1 AND isbn13 = $2
            "#,
        )
        .bind(member_id.value())
        .bind(isbn13.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row_to_reading_record).transpose()
    }

    /// 読書記録を保存（upsert）し、同じトランザクションでスタンプを追記
    ///
    /// INSERT ... ON CONFLICT UPDATEで全項目を置き換える。
    /// 既存行のrecord_idは変えず、RETURNINGで正規のIDを受け取る。
    /// どちらかが失敗した場合はコミットせず、txのdropでロールバックされる。
    async fn save_with_stamp(
        &self,
        record: ReadingRecord,
        record_date: NaiveDate,
    ) -> std::result::Result<(ReadingRecord, CalendarStamp), SaveWithStampError> {
        let current_page = record
            .current_page
            .map(|page| columns::page_to_i32(page, "current_page"))
            .transpose()
            .map_err(SaveWithStampError::Record)?;

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| SaveWithStampError::Record(e.into()))?;

        let record_id: uuid::Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO reading_records (
                record_id,
                member_id,
                isbn13,
                status,
                my_rating,
                one_line_review,
                current_page,
                start_date,
                finish_date
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (member_id, isbn13)
            DO UPDATE SET
                status = EXCLUDED.status,
                my_rating = EXCLUDED.my_rating,
                one_line_review = EXCLUDED.one_line_review,
                current_page = EXCLUDED.current_page,
                start_date = EXCLUDED.start_date,
                finish_date = EXCLUDED.finish_date,
                updated_at = now()
            RETURNING record_id
            "#,
        )
        .bind(record.record_id.value())
        .bind(record.member_id.value())
        .bind(record.isbn13.as_str())
        .bind(record.status.as_str())
        .bind(record.my_rating.map(|r| r.value()))
        .bind(record.one_line_review.as_deref())
        .bind(current_page)
        .bind(record.start_date)
        .bind(record.finish_date)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| SaveWithStampError::Record(e.into()))?;

        let saved = ReadingRecord {
            record_id: ReadingRecordId::from_uuid(record_id),
            ..record
        };

        let stamp = stamp_for(&saved, record_date);
        insert_stamp(&mut *tx, &stamp)
            .await
            .map_err(SaveWithStampError::Stamp)?;

        tx.commit()
            .await
            .map_err(|e| SaveWithStampError::Record(e.into()))?;

        Ok((saved, stamp))
    }

    async fn find_by_member(&self, member_id: MemberId) -> Result<Vec<ReadingRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT
                record_id,
                member_id,
                isbn13,
                status,
                my_rating,
                one_line_review,
                current_page,
                start_date,
                finish_date
            FROM reading_records
            WHERE member_id = $1
            ORDER BY isbn13 ASC
            "#,
        )
        .bind(member_id.value())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row_to_reading_record).collect()
    }
}
