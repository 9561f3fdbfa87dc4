//! Tests for the record stores and repositories

mod audit_repository_tests;
mod json_file_store_tests;
