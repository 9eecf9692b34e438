//! Core types shared across structcmp facilities
//!
//! This crate provides the canonical schema constants used by the logging
//! facility and by anything that asserts on captured log events:
//!
//! - **Field keys**: `component`, `op`, `event`
//! - **Comparison fields**: `path`, `outcome`, `nodes_visited`
//! - **Event names**: `start`, `end`, `end_error`

pub mod schema;
