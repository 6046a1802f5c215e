mod columns;

pub mod calendar_stamp_repository;
pub mod catalog_repository;
pub mod member_repository;
pub mod reading_record_repository;

// パブリックに型を再エクスポート
pub use calendar_stamp_repository::CalendarStampRepository as PostgresCalendarStampRepository;
pub use catalog_repository::CatalogRepository as PostgresCatalogRepository;
pub use member_repository::MemberRepository as PostgresMemberRepository;
pub use reading_record_repository::ReadingRecordRepository as PostgresReadingRecordRepository;
