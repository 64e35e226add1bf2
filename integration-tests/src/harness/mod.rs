pub mod capture_log;
pub mod tracing;

pub use capture_log::{CaptureLog, FAILED, Item, NO_FILES, PARTIAL, SUCCESSFUL, table_rows};
pub use self::tracing::{CapturedEvent, init_test_tracing};
