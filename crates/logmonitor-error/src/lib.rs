#[macro_use]
pub mod macros;

mod codes;
mod types;
mod utils;

// Re-export all public types and utilities
pub use codes::ErrorCode;
pub use types::{ErrContext, LiftableResult, LmError, LmResult, WrappedError};
pub use utils::is_logmonitor_debug;
