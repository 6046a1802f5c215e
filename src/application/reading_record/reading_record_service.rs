use crate::domain::{
    self, CatalogEntry, Isbn13, Member, MemberId, ReadingRecord, RecordDraft,
    commands::{RecordStatus, RecordStatusByIsbn13},
};
use crate::ports::*;
use std::sync::Arc;

use super::errors::{ReadingRecordApplicationError, Result};

/// サービスの依存関係
///
/// 関数型DDDの原則に従い、データ構造として定義。
/// 振る舞い（メソッド）は持たず、純粋な関数に依存関係を渡す。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub member_repository: Arc<dyn MemberRepository>,
    pub catalog_repository: Arc<dyn CatalogRepository>,
    pub record_repository: Arc<dyn ReadingRecordRepository>,
    pub calendar_stamp_repository: Arc<dyn CalendarStampRepository>,
}

/// 会員を取得するヘルパー関数
///
/// exists_record, record_status, 各クエリで共通利用される。
///
/// # エラー
/// - MemberRepositoryError: 取得失敗
/// - MemberNotFound: 会員が存在しない
pub(super) async fn load_member(
    member_repository: &Arc<dyn MemberRepository>,
    member_id: MemberId,
) -> Result<Member> {
    let member = member_repository
        .find_by_id(member_id)
        .await
        .map_err(ReadingRecordApplicationError::MemberRepositoryError)?
        .ok_or(ReadingRecordApplicationError::MemberNotFound)?;

    tracing::debug!(member_id = %member.member_id.value(), "member resolved");

    Ok(member)
}

/// 会員がその書籍の読書記録を既に持っているか確認する
///
/// # エラー
/// - MemberNotFound: 会員が存在しない
pub async fn exists_record(
    deps: &ServiceDependencies,
    member_id: MemberId,
    isbn13: &Isbn13,
) -> Result<bool> {
    let member = load_member(&deps.member_repository, member_id).await?;

    let record = deps
        .record_repository
        .find_by_member_and_isbn13(member.member_id, isbn13)
        .await
        .map_err(ReadingRecordApplicationError::RecordRepositoryError)?;

    Ok(record.is_some())
}

/// 読書ステータスを記録する
///
/// 処理フロー：
/// 1. 会員を取得（存在しなければMemberNotFound）
/// 2. 下書きを作成（既存の記録があればrecord_idを引き継ぐ）
/// 3. ステータスタブに応じて項目を埋める（未知のタブはInvalidStatusTab）
/// 4. 読書記録を保存
/// 5. 今日の日付でカレンダースタンプを追記
///
/// # 一貫性保証
///
/// 手順3までは書き込みを行わない。
/// 手順4と5は`save_with_stamp`の1回の呼び出しで原子的に行われるため、
/// どの段階で失敗しても記録だけ・スタンプだけが残ることはない。
pub async fn record_status(
    deps: &ServiceDependencies,
    cmd: RecordStatus,
) -> Result<ReadingRecord> {
    // 1. 会員の取得
    let member = load_member(&deps.member_repository, cmd.member_id).await?;

    // 2. 下書きの作成
    let existing = deps
        .record_repository
        .find_by_member_and_isbn13(member.member_id, &cmd.catalog_entry.isbn13)
        .await
        .map_err(ReadingRecordApplicationError::RecordRepositoryError)?;

    let draft = match existing {
        Some(record) => {
            RecordDraft::with_id(record.record_id, member.member_id, &cmd.catalog_entry)
        }
        None => RecordDraft::new(member.member_id, &cmd.catalog_entry),
    };

    // 3. ドメイン層の純粋関数を呼び出し
    let record = domain::reading_record::record_status(
        draft,
        &cmd.status_tab,
        &cmd.catalog_entry,
        cmd.fields,
        cmd.today,
    )
    .inspect_err(|e| tracing::warn!(status_tab = %cmd.status_tab, "{}", e))?;

    // 4-5. 読書記録の保存とカレンダースタンプの追記（同じ単位で書き込む）
    let (record, stamp) = deps
        .record_repository
        .save_with_stamp(record, cmd.today)
        .await?;

    tracing::info!(
        member_id = %record.member_id.value(),
        record_id = %record.record_id.value(),
        isbn13 = %record.isbn13,
        status = %record.status,
        stamp_id = %stamp.stamp_id.value(),
        "reading status recorded"
    );

    Ok(record)
}

/// ISBNからカタログエントリを引いて読書ステータスを記録する
///
/// # エラー
/// - CatalogEntryNotFound: カタログにISBNが登録されていない
/// - その他は`record_status()`を参照
pub async fn record_status_by_isbn13(
    deps: &ServiceDependencies,
    cmd: RecordStatusByIsbn13,
) -> Result<ReadingRecord> {
    let catalog_entry = deps
        .catalog_repository
        .find_by_isbn13(&cmd.isbn13)
        .await
        .map_err(ReadingRecordApplicationError::CatalogRepositoryError)?
        .ok_or(ReadingRecordApplicationError::CatalogEntryNotFound)?;

    record_status(
        deps,
        RecordStatus {
            member_id: cmd.member_id,
            status_tab: cmd.status_tab,
            catalog_entry,
            fields: cmd.fields,
            today: cmd.today,
        },
    )
    .await
}

/// カタログエントリを登録する（同じISBNがあれば置き換える）
pub async fn register_catalog_entry(
    deps: &ServiceDependencies,
    entry: CatalogEntry,
) -> Result<()> {
    let isbn13 = entry.isbn13.clone();

    deps.catalog_repository
        .save(entry)
        .await
        .map_err(ReadingRecordApplicationError::CatalogRepositoryError)?;

    tracing::info!(isbn13 = %isbn13, "catalog entry registered");

    Ok(())
}
