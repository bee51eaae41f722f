#![forbid(unsafe_code)]

pub mod keys;
pub mod records;
pub mod repository;
pub mod sqlite;
