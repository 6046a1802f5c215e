use thiserror::Error;

/// 読書記録アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum ReadingRecordApplicationError {
    /// 会員が存在しない（認証失敗とは区別する）
    #[error("Member not found")]
    MemberNotFound,

    /// カタログエントリが存在しない
    #[error("Catalog entry not found")]
    CatalogEntryNotFound,

    /// 読書記録が存在しない
    #[error("Reading record not found")]
    RecordNotFound,

    /// ステータスタブが WISH / READING / COMPLETED / STOPPED のいずれでもない
    #[error("Invalid status tab: {0}")]
    InvalidStatusTab(String),

    /// MemberRepositoryのエラー
    #[error("Member repository error")]
    MemberRepositoryError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// CatalogRepositoryのエラー
    #[error("Catalog repository error")]
    CatalogRepositoryError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// ReadingRecordRepositoryのエラー
    #[error("Reading record repository error")]
    RecordRepositoryError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// CalendarStampRepositoryのエラー
    #[error("Calendar stamp repository error")]
    CalendarStampRepositoryError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<crate::domain::RecordStatusError> for ReadingRecordApplicationError {
    fn from(err: crate::domain::RecordStatusError) -> Self {
        match err {
            crate::domain::RecordStatusError::UnknownStatusTab(tab) => {
                ReadingRecordApplicationError::InvalidStatusTab(tab)
            }
        }
    }
}

/// 同時書き込みの失敗は、失敗した側のリポジトリのエラーとして扱う
impl From<crate::ports::SaveWithStampError> for ReadingRecordApplicationError {
    fn from(err: crate::ports::SaveWithStampError) -> Self {
        match err {
            crate::ports::SaveWithStampError::Record(e) => {
                ReadingRecordApplicationError::RecordRepositoryError(e)
            }
            crate::ports::SaveWithStampError::Stamp(e) => {
                ReadingRecordApplicationError::CalendarStampRepositoryError(e)
            }
        }
    }
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, ReadingRecordApplicationError>;
