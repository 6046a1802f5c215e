use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    CalendarStamp, CatalogEntry, Isbn13, MemberId, Rating, ReadingRecord,
    commands::{RecordStatusByIsbn13, StatusFields},
};

use super::error::ApiError;

/// 読書ステータス記録リクエスト（POST /members/:member_id/records）
#[derive(Debug, Deserialize)]
pub struct RecordStatusRequest {
    /// WISH / READING / COMPLETED / STOPPED（大文字小文字は問わない）
    pub tab: String,
    pub isbn13: String,
    pub my_rating: Option<f64>,
    pub one_line_review: Option<String>,
    pub current_page: Option<u32>,
    pub start_date: Option<NaiveDate>,
    pub finish_date: Option<NaiveDate>,
}

impl RecordStatusRequest {
    /// リクエストをコマンドに変換する
    ///
    /// ISBNと評価の形式はここで検証する。タブの解釈はドメイン層に任せる。
    pub fn to_command(
        self,
        member_id: MemberId,
        today: NaiveDate,
    ) -> Result<RecordStatusByIsbn13, ApiError> {
        let isbn13 = parse_isbn13(&self.isbn13)?;
        let my_rating = self
            .my_rating
            .map(Rating::new)
            .transpose()
            .map_err(|e| ApiError::bad_request("INVALID_RATING", e.to_string()))?;

        Ok(RecordStatusByIsbn13 {
            member_id,
            status_tab: self.tab,
            isbn13,
            fields: StatusFields {
                my_rating,
                one_line_review: self.one_line_review,
                current_page: self.current_page,
                start_date: self.start_date,
                finish_date: self.finish_date,
            },
            today,
        })
    }
}

/// カタログエントリ登録リクエスト（PUT /catalog/:isbn13）
#[derive(Debug, Deserialize)]
pub struct RegisterCatalogEntryRequest {
    pub title: String,
    pub author: String,
    pub pages_count: u32,
}

impl RegisterCatalogEntryRequest {
    pub fn into_entry(self, isbn13: Isbn13) -> CatalogEntry {
        CatalogEntry {
            isbn13,
            title: self.title,
            author: self.author,
            pages_count: self.pages_count,
        }
    }
}

/// 読書記録レスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadingRecordResponse {
    pub record_id: Uuid,
    pub member_id: Uuid,
    pub isbn13: String,
    pub status: String,
    pub my_rating: Option<f64>,
    pub one_line_review: Option<String>,
    pub current_page: Option<u32>,
    pub start_date: Option<NaiveDate>,
    pub finish_date: Option<NaiveDate>,
}

impl From<ReadingRecord> for ReadingRecordResponse {
    fn from(record: ReadingRecord) -> Self {
        Self {
            record_id: record.record_id.value(),
            member_id: record.member_id.value(),
            isbn13: record.isbn13.to_string(),
            status: record.status.as_str().to_string(),
            my_rating: record.my_rating.map(|r| r.value()),
            one_line_review: record.one_line_review,
            current_page: record.current_page,
            start_date: record.start_date,
            finish_date: record.finish_date,
        }
    }
}

/// カレンダースタンプレスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct CalendarStampResponse {
    pub stamp_id: Uuid,
    pub record_id: Uuid,
    pub isbn13: String,
    pub record_date: NaiveDate,
    pub status: String,
}

impl From<CalendarStamp> for CalendarStampResponse {
    fn from(stamp: CalendarStamp) -> Self {
        Self {
            stamp_id: stamp.stamp_id.value(),
            record_id: stamp.record_id.value(),
            isbn13: stamp.isbn13.to_string(),
            record_date: stamp.record_date,
            status: stamp.status.as_str().to_string(),
        }
    }
}

/// 読書記録の存在確認レスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct ExistsResponse {
    pub exists: bool,
}

/// エラーレスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}

/// パスやボディのISBN-13をパースしてバリデーション
pub fn parse_isbn13(raw: &str) -> Result<Isbn13, ApiError> {
    Isbn13::parse(raw).map_err(|e| ApiError::bad_request("INVALID_ISBN13", e.to_string()))
}
