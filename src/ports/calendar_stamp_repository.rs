use crate::domain::{CalendarStamp, MemberId};
use async_trait::async_trait;

#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// カレンダースタンプポート（読み取り側）
///
/// スタンプは追記専用ログに保存される不変の事実。変更・削除不可。
/// 追記は記録の保存と同じ単位で行うため、
/// `ReadingRecordRepository::save_with_stamp`が担う。
#[async_trait]
pub trait CalendarStampRepository: Send + Sync {
    /// 会員のスタンプを記録日順に取得する
    ///
    /// 同じ日のスタンプは追記された順序を保持する。
    async fn find_by_member(&self, member_id: MemberId) -> Result<Vec<CalendarStamp>>;
}
