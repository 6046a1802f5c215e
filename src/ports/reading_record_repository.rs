use crate::domain::{CalendarStamp, Isbn13, MemberId, ReadingRecord};
use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 記録とスタンプの同時書き込みのエラー
///
/// どちらの書き込みで失敗しても、記録・スタンプのどちらも残らない。
#[derive(Debug, Error)]
pub enum SaveWithStampError {
    /// 読書記録の保存、またはトランザクションの開始・確定に失敗
    #[error("failed to save reading record")]
    Record(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// カレンダースタンプの追記に失敗
    #[error("failed to append calendar stamp")]
    Stamp(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// 読書記録リポジトリポート
#[async_trait]
pub trait ReadingRecordRepository: Send + Sync {
    /// 会員とISBNの組で読書記録を取得する
    ///
    /// (member_id, isbn13) は一意なので、結果は高々1件。
    async fn find_by_member_and_isbn13(
        &self,
        member_id: MemberId,
        isbn13: &Isbn13,
    ) -> Result<Option<ReadingRecord>>;

    /// 読書記録を保存し、同じ単位でカレンダースタンプを追記する
    ///
    /// 同じ (member_id, isbn13) の記録が既にあれば、その状態を完全に置き換える。
    /// 部分更新は行わない。置き換えた場合は既存のrecord_idを保持する。
    ///
    /// スタンプは保存後の記録（正規のrecord_idを持つ）から`record_date`付きで作る。
    /// 記録の保存とスタンプの追記は原子的で、片方だけが残ることはない。
    async fn save_with_stamp(
        &self,
        record: ReadingRecord,
        record_date: NaiveDate,
    ) -> std::result::Result<(ReadingRecord, CalendarStamp), SaveWithStampError>;

    /// 会員の全読書記録を取得する
    async fn find_by_member(&self, member_id: MemberId) -> Result<Vec<ReadingRecord>>;
}
