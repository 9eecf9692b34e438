//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";

// Comparison fields
pub const FIELD_PATH: &str = "path";
pub const FIELD_OUTCOME: &str = "outcome";
pub const FIELD_NODES_VISITED: &str = "nodes_visited";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Comparison outcomes
pub const OUTCOME_EQUAL: &str = "equal";
pub const OUTCOME_DIFFERENT: &str = "different";
