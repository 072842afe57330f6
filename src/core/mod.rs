//! Core functionality for the portal
//!
//! This module contains the core business logic and data structures.

pub mod assistant;
pub mod authz;
pub mod intent;
pub mod models;
