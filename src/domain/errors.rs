#![allow(dead_code)]

/// 読書ステータス記録のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordStatusError {
    /// WISH / READING / COMPLETED / STOPPED のいずれでもないタブ
    UnknownStatusTab(String),
}

impl std::fmt::Display for RecordStatusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordStatusError::UnknownStatusTab(tab) => {
                write!(f, "Unknown status tab: {}", tab)
            }
        }
    }
}

impl std::error::Error for RecordStatusError {}
