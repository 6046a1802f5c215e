#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 会員ID - 会員管理コンテキストへの参照
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberId(Uuid);

impl MemberId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for MemberId {
    fn default() -> Self {
        Self::new()
    }
}

/// 読書記録ID - 読書記録集約のID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReadingRecordId(Uuid);

impl ReadingRecordId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for ReadingRecordId {
    fn default() -> Self {
        Self::new()
    }
}

/// カレンダースタンプID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarStampId(Uuid);

impl CalendarStampId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for CalendarStampId {
    fn default() -> Self {
        Self::new()
    }
}

/// ISBN-13のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IsbnError {
    /// 13桁の数字ではない
    InvalidFormat(String),
}

impl std::fmt::Display for IsbnError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IsbnError::InvalidFormat(raw) => write!(f, "Invalid ISBN-13: {}", raw),
        }
    }
}

impl std::error::Error for IsbnError {}

/// ISBN-13
///
/// 不変条件：ASCII数字ちょうど13桁。
/// カタログ（Aladin）と読書記録を結び付けるキーとして使われる。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Isbn13(String);

impl Isbn13 {
    pub fn parse(raw: &str) -> Result<Self, IsbnError> {
        let trimmed = raw.trim();
        if trimmed.len() != 13 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(IsbnError::InvalidFormat(raw.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Isbn13 {
    type Error = IsbnError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Isbn13> for String {
    fn from(isbn: Isbn13) -> Self {
        isbn.0
    }
}

impl std::fmt::Display for Isbn13 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// 評価のエラー
#[derive(Debug, Clone, PartialEq)]
pub enum RatingError {
    /// 0.0〜5.0の範囲外、または有限値ではない
    OutOfRange(f64),
}

impl std::fmt::Display for RatingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RatingError::OutOfRange(v) => write!(f, "Rating must be within 0.0..=5.0: {}", v),
        }
    }
}

impl std::error::Error for RatingError {}

/// 会員による書籍の評価
///
/// 不変条件：0.0以上5.0以下の有限値
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Rating(f64);

impl Rating {
    pub const MAX: f64 = 5.0;

    pub fn new(value: f64) -> Result<Self, RatingError> {
        if !value.is_finite() || !(0.0..=Self::MAX).contains(&value) {
            return Err(RatingError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Rating {
    type Error = RatingError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for f64 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}
