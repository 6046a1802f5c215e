pub mod reading_record;
