#[macro_use]
pub extern crate logmonitor_error as error;
pub use logmonitor_error::{
    ErrContext, ErrorCode, LiftableResult, LmError, LmResult, WrappedError, ectx, err, lm_err,
};

pub mod constants;
pub mod io_args;
pub mod logging;
pub mod time;
