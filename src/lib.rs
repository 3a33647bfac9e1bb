pub mod common;
pub mod config;
pub mod pinyin;
pub mod records;
pub mod records_check;
pub mod records_to_db;
pub mod records_to_plist;
pub mod syllable_table;
