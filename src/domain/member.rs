use serde::{Deserialize, Serialize};

use super::MemberId;

/// 会員
///
/// 読書記録コンテキストでは参照のみ。このコンテキストから変更されることはない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub member_id: MemberId,
    pub nickname: String,
}
