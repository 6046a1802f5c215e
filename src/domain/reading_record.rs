use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{
    CatalogEntry, Isbn13, MemberId, Rating, ReadingRecordId, ReadingStatus, RecordStatusError,
    commands::StatusFields,
};

/// 読書記録集約 - 会員1人 × 書籍1冊の読書状態
///
/// (member_id, isbn13) ごとに一意。ステータス変更のたびに
/// 新しい値として組み立て直され、同じrecord_idで保存される。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingRecord {
    // 識別子
    pub record_id: ReadingRecordId,

    // 他の集約への参照
    pub member_id: MemberId,
    pub isbn13: Isbn13,

    pub status: ReadingStatus,
    pub my_rating: Option<Rating>,
    pub one_line_review: Option<String>,
    pub current_page: Option<u32>,
    pub start_date: Option<NaiveDate>,
    pub finish_date: Option<NaiveDate>,
}

/// ステータス確定前の下書き
///
/// 会員とカタログエントリの紐付けだけを持つ。任意項目はすべて未設定から始まる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDraft {
    pub record_id: ReadingRecordId,
    pub member_id: MemberId,
    pub isbn13: Isbn13,
}

impl RecordDraft {
    /// 新しい読書記録の下書き
    pub fn new(member_id: MemberId, catalog_entry: &CatalogEntry) -> Self {
        Self::with_id(ReadingRecordId::new(), member_id, catalog_entry)
    }

    /// 既存の読書記録を置き換える下書き（record_idを引き継ぐ）
    pub fn with_id(
        record_id: ReadingRecordId,
        member_id: MemberId,
        catalog_entry: &CatalogEntry,
    ) -> Self {
        Self {
            record_id,
            member_id,
            isbn13: catalog_entry.isbn13.clone(),
        }
    }

    fn into_record(self, status: ReadingStatus) -> ReadingRecord {
        ReadingRecord {
            record_id: self.record_id,
            member_id: self.member_id,
            isbn13: self.isbn13,
            status,
            my_rating: None,
            one_line_review: None,
            current_page: None,
            start_date: None,
            finish_date: None,
        }
    }
}

/// 純粋関数：ステータスに応じて読書記録の項目を埋める
///
/// ビジネスルール：
/// - WISH: ステータスのみ
/// - READING: 評価・現在ページは入力値、開始日は今日、終了日は未設定
/// - COMPLETED: 評価・一言レビュー・開始日・終了日は入力値、
///   現在ページはカタログの総ページ数（読了＝100%）
/// - STOPPED: 5項目すべて入力値のまま
pub fn apply_status(
    draft: RecordDraft,
    status: ReadingStatus,
    catalog_entry: &CatalogEntry,
    fields: StatusFields,
    today: NaiveDate,
) -> ReadingRecord {
    let base = draft.into_record(status);

    match status {
        ReadingStatus::Wish => base,
        ReadingStatus::Reading => ReadingRecord {
            my_rating: fields.my_rating,
            current_page: fields.current_page,
            start_date: Some(today),
            ..base
        },
        ReadingStatus::Completed => ReadingRecord {
            my_rating: fields.my_rating,
            one_line_review: fields.one_line_review,
            current_page: Some(catalog_entry.pages_count),
            start_date: fields.start_date,
            finish_date: fields.finish_date,
            ..base
        },
        ReadingStatus::Stopped => ReadingRecord {
            my_rating: fields.my_rating,
            one_line_review: fields.one_line_review,
            current_page: fields.current_page,
            start_date: fields.start_date,
            finish_date: fields.finish_date,
            ..base
        },
    }
}

/// 純粋関数：ステータスタブを解釈して読書記録を作る
///
/// 副作用なし。未知のタブの場合は何も作らずにエラーを返す。
pub fn record_status(
    draft: RecordDraft,
    status_tab: &str,
    catalog_entry: &CatalogEntry,
    fields: StatusFields,
    today: NaiveDate,
) -> Result<ReadingRecord, RecordStatusError> {
    let status: ReadingStatus = status_tab.parse()?;
    Ok(apply_status(draft, status, catalog_entry, fields, today))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calendar_stamp::stamp_for;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 18).unwrap()
    }

    fn catalog_entry(pages_count: u32) -> CatalogEntry {
        CatalogEntry {
            isbn13: Isbn13::parse("9788936434267").unwrap(),
            title: "소년이 온다".to_string(),
            author: "한강".to_string(),
            pages_count,
        }
    }

    fn full_fields() -> StatusFields {
        StatusFields {
            my_rating: Some(Rating::new(3.5).unwrap()),
            one_line_review: Some("again next year".to_string()),
            current_page: Some(87),
            start_date: NaiveDate::from_ymd_opt(2024, 9, 1),
            finish_date: NaiveDate::from_ymd_opt(2024, 9, 20),
        }
    }

    #[test]
    fn test_wish_sets_status_only() {
        let entry = catalog_entry(300);
        let member_id = MemberId::new();
        let draft = RecordDraft::new(member_id, &entry);

        let record = record_status(draft, "WISH", &entry, full_fields(), today()).unwrap();
        let stamp = stamp_for(&record, today());

        assert_eq!(record.status, ReadingStatus::Wish);
        assert_eq!(record.member_id, member_id);
        assert_eq!(record.isbn13, entry.isbn13);
        assert_eq!(record.my_rating, None);
        assert_eq!(record.one_line_review, None);
        assert_eq!(record.current_page, None);
        assert_eq!(record.start_date, None);
        assert_eq!(record.finish_date, None);

        assert_eq!(stamp.status, ReadingStatus::Wish);
        assert_eq!(stamp.record_date, today());
        assert_eq!(stamp.record_id, record.record_id);
    }

    #[test]
    fn test_reading_starts_today() {
        let entry = catalog_entry(300);
        let fields = StatusFields {
            my_rating: Some(Rating::new(4.0).unwrap()),
            current_page: Some(120),
            ..full_fields()
        };

        let record = record_status(
            RecordDraft::new(MemberId::new(), &entry),
            "reading",
            &entry,
            fields,
            today(),
        )
        .unwrap();

        assert_eq!(record.status, ReadingStatus::Reading);
        assert_eq!(record.my_rating, Some(Rating::new(4.0).unwrap()));
        assert_eq!(record.current_page, Some(120));
        assert_eq!(record.start_date, Some(today()));
        assert_eq!(record.finish_date, None);
        assert_eq!(record.one_line_review, None);
    }

    #[test]
    fn test_completed_forces_current_page_to_pages_count() {
        let entry = catalog_entry(300);
        let fields = full_fields();

        let record = record_status(
            RecordDraft::new(MemberId::new(), &entry),
            "Completed",
            &entry,
            fields.clone(),
            today(),
        )
        .unwrap();

        assert_eq!(record.status, ReadingStatus::Completed);
        assert_eq!(record.current_page, Some(300));
        assert_eq!(record.my_rating, fields.my_rating);
        assert_eq!(record.one_line_review, fields.one_line_review);
        assert_eq!(record.start_date, fields.start_date);
        assert_eq!(record.finish_date, fields.finish_date);
    }

    #[test]
    fn test_completed_without_input_page() {
        let entry = catalog_entry(512);
        let record = apply_status(
            RecordDraft::new(MemberId::new(), &entry),
            ReadingStatus::Completed,
            &entry,
            StatusFields::default(),
            today(),
        );

        assert_eq!(record.current_page, Some(512));
    }

    #[test]
    fn test_stopped_copies_fields_verbatim() {
        let entry = catalog_entry(300);
        let fields = full_fields();

        let record = record_status(
            RecordDraft::new(MemberId::new(), &entry),
            "STOPPED",
            &entry,
            fields.clone(),
            today(),
        )
        .unwrap();

        assert_eq!(record.status, ReadingStatus::Stopped);
        assert_eq!(record.my_rating, fields.my_rating);
        assert_eq!(record.one_line_review, fields.one_line_review);
        assert_eq!(record.current_page, fields.current_page);
        assert_eq!(record.start_date, fields.start_date);
        assert_eq!(record.finish_date, fields.finish_date);
    }

    #[test]
    fn test_unknown_tab_is_rejected() {
        let entry = catalog_entry(300);
        let result = record_status(
            RecordDraft::new(MemberId::new(), &entry),
            "FOO",
            &entry,
            full_fields(),
            today(),
        );

        assert_eq!(
            result.unwrap_err(),
            RecordStatusError::UnknownStatusTab("FOO".to_string())
        );
    }

    #[test]
    fn test_draft_with_id_keeps_record_id() {
        let entry = catalog_entry(300);
        let record_id = ReadingRecordId::new();
        let draft = RecordDraft::with_id(record_id, MemberId::new(), &entry);

        let record = apply_status(
            draft,
            ReadingStatus::Wish,
            &entry,
            StatusFields::default(),
            today(),
        );

        assert_eq!(record.record_id, record_id);
    }
}
