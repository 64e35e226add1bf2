/// Routing marker present on every transfer log publication in the capture log.
pub const TOPIC_MARKER: &str = "SYSTEM.FTE/Log/";

/// Separates routing prefix, metadata and payload within one record.
pub const FIELD_SEPARATOR: char = '!';

/// A candidate line must carry the closing tag, otherwise it was cut short.
pub const TRANSACTION_CLOSE_TAG: &str = "</transaction>";

pub const TRANSACTION_ELEMENT: &str = "transaction";

/// Wildcard accepted by the detail queries.
pub const ALL_TRANSFERS: &str = "*";

/// Size reported for queue items and for files without a size attribute.
pub const UNKNOWN_SIZE: &str = "-1";

/// Bytes read per step when walking the log from the end.
pub const BACKWARD_CHUNK_SIZE: usize = 64 * 1024;

// Supplement message codes carried by `completed` publications.
pub const SUPPLEMENT_SUCCESSFUL: &str = "BFGRP0032I";
pub const SUPPLEMENT_PARTIAL: &str = "BFGRP0033I";
pub const SUPPLEMENT_FAILED: &str = "BFGRP0034I";
pub const SUPPLEMENT_NO_FILES: &str = "BFGRP0036I";
pub const SUPPLEMENT_FAILED_OTHER: &str = "BFGRP0037I";

pub const NO_TRANSFER_LOGS: &str = "No transfer logs available";
