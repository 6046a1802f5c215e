use crate::application::reading_record::ReadingRecordApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーと、リクエストの形式エラーをHTTPレスポンスにマッピングする。
#[derive(Debug)]
pub enum ApiError {
    Application(ReadingRecordApplicationError),
    BadRequest {
        error_type: &'static str,
        message: String,
    },
}

impl ApiError {
    pub fn bad_request(error_type: &'static str, message: impl Into<String>) -> Self {
        ApiError::BadRequest {
            error_type,
            message: message.into(),
        }
    }
}

impl From<ReadingRecordApplicationError> for ApiError {
    fn from(err: ReadingRecordApplicationError) -> Self {
        ApiError::Application(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::BadRequest {
                error_type,
                message,
            } => (StatusCode::BAD_REQUEST, error_type, message),
            ApiError::Application(err) => match err {
                // 404 Not Found - リクエストされたリソースが存在しない
                ReadingRecordApplicationError::MemberNotFound => (
                    StatusCode::NOT_FOUND,
                    "MEMBER_NOT_FOUND",
                    "Member not found".to_string(),
                ),
                ReadingRecordApplicationError::CatalogEntryNotFound => (
                    StatusCode::NOT_FOUND,
                    "CATALOG_ENTRY_NOT_FOUND",
                    "Catalog entry not found".to_string(),
                ),
                ReadingRecordApplicationError::RecordNotFound => (
                    StatusCode::NOT_FOUND,
                    "RECORD_NOT_FOUND",
                    "Reading record not found".to_string(),
                ),

                // 400 Bad Request - 不正なステータスタブ
                ReadingRecordApplicationError::InvalidStatusTab(tab) => (
                    StatusCode::BAD_REQUEST,
                    "INVALID_STATUS_TAB",
                    format!("Status tab must be one of WISH, READING, COMPLETED, STOPPED: {}", tab),
                ),

                // 500 Internal Server Error - システム障害
                // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
                ReadingRecordApplicationError::MemberRepositoryError(ref e) => {
                    tracing::error!("Member repository error: {}", e);
                    internal_error("MEMBER_REPOSITORY_ERROR")
                }
                ReadingRecordApplicationError::CatalogRepositoryError(ref e) => {
                    tracing::error!("Catalog repository error: {}", e);
                    internal_error("CATALOG_REPOSITORY_ERROR")
                }
                ReadingRecordApplicationError::RecordRepositoryError(ref e) => {
                    tracing::error!("Reading record repository error: {}", e);
                    internal_error("RECORD_REPOSITORY_ERROR")
                }
                ReadingRecordApplicationError::CalendarStampRepositoryError(ref e) => {
                    tracing::error!("Calendar stamp repository error: {}", e);
                    internal_error("CALENDAR_STAMP_REPOSITORY_ERROR")
                }
            },
        };

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}

fn internal_error(error_type: &'static str) -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        error_type,
        "An unexpected error occurred".to_string(),
    )
}
