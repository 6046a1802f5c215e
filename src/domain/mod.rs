pub mod calendar_stamp;
pub mod catalog;
pub mod commands;
pub mod errors;
pub mod member;
pub mod reading_record;
pub mod reading_status;
pub mod value_objects;

pub use calendar_stamp::CalendarStamp;
pub use catalog::CatalogEntry;
pub use errors::*;
pub use member::Member;
pub use reading_record::{ReadingRecord, RecordDraft};
pub use reading_status::ReadingStatus;
pub use value_objects::*;
