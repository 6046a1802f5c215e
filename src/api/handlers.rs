use crate::application::reading_record::{
    ServiceDependencies, exists_record, find_record, list_calendar_stamps, list_records,
    record_status_by_isbn13, register_catalog_entry,
};
use crate::domain::value_objects::MemberId;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;
use uuid::Uuid;

use super::{
    error::ApiError,
    types::{
        CalendarStampResponse, ExistsResponse, ReadingRecordResponse, RecordStatusRequest,
        RegisterCatalogEntryRequest, parse_isbn13,
    },
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
}

// ============================================================================
// Command handlers (POST / PUT)
// ============================================================================

/// POST /members/:member_id/records - 読書ステータスを記録
///
/// 記録日（READINGの開始日とスタンプの日付）はサーバー時計の今日。
pub async fn record_status(
    State(state): State<Arc<AppState>>,
    Path(member_id): Path<Uuid>,
    Json(req): Json<RecordStatusRequest>,
) -> Result<(StatusCode, Json<ReadingRecordResponse>), ApiError> {
    let today = chrono::Utc::now().date_naive();
    let cmd = req.to_command(MemberId::from_uuid(member_id), today)?;

    let record = record_status_by_isbn13(&state.service_deps, cmd).await?;

    Ok((StatusCode::CREATED, Json(ReadingRecordResponse::from(record))))
}

/// PUT /catalog/:isbn13 - カタログエントリを登録
pub async fn register_catalog(
    State(state): State<Arc<AppState>>,
    Path(isbn13): Path<String>,
    Json(req): Json<RegisterCatalogEntryRequest>,
) -> Result<StatusCode, ApiError> {
    let isbn13 = parse_isbn13(&isbn13)?;

    register_catalog_entry(&state.service_deps, req.into_entry(isbn13)).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Query handlers (GET)
// ============================================================================

/// GET /members/:member_id/records/:isbn13/exists - 読書記録の存在確認
pub async fn record_exists(
    State(state): State<Arc<AppState>>,
    Path((member_id, isbn13)): Path<(Uuid, String)>,
) -> Result<Json<ExistsResponse>, ApiError> {
    let isbn13 = parse_isbn13(&isbn13)?;

    let member_id = MemberId::from_uuid(member_id);

    let exists = exists_record(&state.service_deps, member_id, &isbn13).await?;

    Ok(Json(ExistsResponse { exists }))
}

/// GET /members/:member_id/records/:isbn13 - 読書記録を取得
pub async fn get_record(
    State(state): State<Arc<AppState>>,
    Path((member_id, isbn13)): Path<(Uuid, String)>,
) -> Result<Json<ReadingRecordResponse>, ApiError> {
    let isbn13 = parse_isbn13(&isbn13)?;

    let member_id = MemberId::from_uuid(member_id);

    let record = find_record(&state.service_deps, member_id, &isbn13).await?;

    Ok(Json(ReadingRecordResponse::from(record)))
}

/// GET /members/:member_id/records - 会員の読書記録一覧
pub async fn get_records(
    State(state): State<Arc<AppState>>,
    Path(member_id): Path<Uuid>,
) -> Result<Json<Vec<ReadingRecordResponse>>, ApiError> {
    let records = list_records(&state.service_deps, MemberId::from_uuid(member_id)).await?;

    Ok(Json(records.into_iter().map(ReadingRecordResponse::from).collect()))
}

/// GET /members/:member_id/stamps - 会員のカレンダースタンプ一覧（記録日順）
pub async fn get_calendar_stamps(
    State(state): State<Arc<AppState>>,
    Path(member_id): Path<Uuid>,
) -> Result<Json<Vec<CalendarStampResponse>>, ApiError> {
    let stamps =
        list_calendar_stamps(&state.service_deps, MemberId::from_uuid(member_id)).await?;

    Ok(Json(
        stamps.into_iter().map(CalendarStampResponse::from).collect(),
    ))
}
