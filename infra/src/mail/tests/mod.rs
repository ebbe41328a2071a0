//! Unit tests for mail module

pub mod create_service_tests;
pub mod dispatcher_adapter_tests;
