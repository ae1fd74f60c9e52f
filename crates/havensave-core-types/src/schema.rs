//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Subject identifiers
pub const FIELD_SOURCE_ID: &str = "source_id";
pub const FIELD_ARCHIVE: &str = "archive";
pub const FIELD_BACKUP_ROOT: &str = "backup_root";
pub const FIELD_CATEGORY: &str = "category";
pub const FIELD_ID_VALUE: &str = "id_value";

// Counters
pub const FIELD_TOTAL_IDS: &str = "total_ids";
pub const FIELD_UNKNOWN_IDS: &str = "unknown_ids";
pub const FIELD_REMOVED: &str = "removed";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
