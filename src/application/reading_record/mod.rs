mod errors;
mod queries;
mod reading_record_service;

#[allow(unused_imports)]
pub use errors::{ReadingRecordApplicationError, Result};
#[allow(unused_imports)]
pub use queries::{find_record, list_calendar_stamps, list_records};
#[allow(unused_imports)]
pub use reading_record_service::{
    ServiceDependencies, exists_record, record_status, record_status_by_isbn13,
    register_catalog_entry,
};
