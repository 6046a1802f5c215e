use crate::domain::{Member, MemberId};
use async_trait::async_trait;

#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 会員リポジトリポート
///
/// 読書記録コンテキストと会員コンテキストの境界を維持する。
/// 読書記録コンテキストは会員を参照するだけで、変更はしない。
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// IDで会員を取得する
    ///
    /// 存在しない場合は`None`を返す（エラーではない）。
    async fn find_by_id(&self, member_id: MemberId) -> Result<Option<Member>>;
}
