use serde::{Deserialize, Serialize};

use super::RecordStatusError;

/// 読書ステータス
///
/// 会員が書籍ごとに持つ4種類の状態。
/// 遷移の制約はなく、どの状態からどの状態へも移れる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReadingStatus {
    /// 読みたい
    Wish,
    /// 読んでいる
    Reading,
    /// 読み終えた
    Completed,
    /// 読むのをやめた
    Stopped,
}

impl ReadingStatus {
    /// 文字列表現を取得する
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingStatus::Wish => "WISH",
            ReadingStatus::Reading => "READING",
            ReadingStatus::Completed => "COMPLETED",
            ReadingStatus::Stopped => "STOPPED",
        }
    }
}

impl std::fmt::Display for ReadingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ステータスタブの解釈（大文字小文字を区別しない。前後の空白は許さない）
impl std::str::FromStr for ReadingStatus {
    type Err = RecordStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "WISH" => Ok(ReadingStatus::Wish),
            "READING" => Ok(ReadingStatus::Reading),
            "COMPLETED" => Ok(ReadingStatus::Completed),
            "STOPPED" => Ok(ReadingStatus::Stopped),
            _ => Err(RecordStatusError::UnknownStatusTab(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("wish".parse::<ReadingStatus>(), Ok(ReadingStatus::Wish));
        assert_eq!("Reading".parse::<ReadingStatus>(), Ok(ReadingStatus::Reading));
        assert_eq!("COMPLETED".parse::<ReadingStatus>(), Ok(ReadingStatus::Completed));
        assert_eq!("sToPpEd".parse::<ReadingStatus>(), Ok(ReadingStatus::Stopped));
    }

    #[test]
    fn test_parse_unknown_tab() {
        let result = "FOO".parse::<ReadingStatus>();
        assert_eq!(
            result,
            Err(RecordStatusError::UnknownStatusTab("FOO".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_surrounding_whitespace() {
        assert_eq!(
            " WISH ".parse::<ReadingStatus>(),
            Err(RecordStatusError::UnknownStatusTab(" WISH ".to_string()))
        );
        assert!("reading\n".parse::<ReadingStatus>().is_err());
    }

    #[test]
    fn test_as_str_round_trips_through_parse() {
        for status in [
            ReadingStatus::Wish,
            ReadingStatus::Reading,
            ReadingStatus::Completed,
            ReadingStatus::Stopped,
        ] {
            assert_eq!(status.as_str().parse::<ReadingStatus>(), Ok(status));
        }
    }
}
