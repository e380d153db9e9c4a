//! Shared data contracts for the EV warranty admin frontend.
//!
//! Everything here is plain data: record types for each REST resource,
//! status enums, the pagination envelope and the helpers that normalize
//! loosely shaped server JSON into those records.

pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
