#[allow(unused_imports)]
pub mod calendar_stamp_repository;
#[allow(unused_imports)]
pub mod catalog_repository;
#[allow(unused_imports)]
pub mod member_repository;
#[allow(unused_imports)]
pub mod reading_record_repository;

#[allow(unused_imports)]
pub use calendar_stamp_repository::CalendarStampRepository;
#[allow(unused_imports)]
pub use catalog_repository::CatalogRepository;
#[allow(unused_imports)]
pub use member_repository::MemberRepository;
#[allow(unused_imports)]
pub use reading_record_repository::{ReadingRecordRepository, SaveWithStampError};
