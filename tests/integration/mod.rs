//! Integration tests for workbench-rs
//!
//! These tests verify the interaction between multiple components
//! and test real system behavior without mocking.

pub mod assistant_tests;
pub mod authz_tests;
pub mod error_tests;
pub mod group_tests;
pub mod intent_tests;
