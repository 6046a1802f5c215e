use crate::domain::{Isbn13, Rating, ReadingStatus};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

fn invalid_data(message: String) -> BoxError {
    Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, message))
}

/// 列の文字列をISBN-13に変換する
pub(super) fn isbn13(raw: &str) -> Result<Isbn13, BoxError> {
    Isbn13::parse(raw).map_err(|e| invalid_data(e.to_string()))
}

/// 列の文字列をReadingStatusに変換する
pub(super) fn status(raw: &str) -> Result<ReadingStatus, BoxError> {
    raw.parse::<ReadingStatus>()
        .map_err(|e| invalid_data(e.to_string()))
}

/// DOUBLE PRECISIONの評価をRatingに変換する
pub(super) fn rating(raw: Option<f64>) -> Result<Option<Rating>, BoxError> {
    raw.map(|v| Rating::new(v).map_err(|e| invalid_data(e.to_string())))
        .transpose()
}

/// INTEGER列のページ数をu32に変換する
pub(super) fn page(raw: i32, column: &str) -> Result<u32, BoxError> {
    u32::try_from(raw).map_err(|_| invalid_data(format!("{} out of range: {}", column, raw)))
}

/// u32のページ数をINTEGER列に変換する
pub(super) fn page_to_i32(page: u32, column: &str) -> Result<i32, BoxError> {
    i32::try_from(page).map_err(|_| invalid_data(format!("{} out of range: {}", column, page)))
}
