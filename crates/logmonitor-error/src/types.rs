use std::{
    backtrace::Backtrace,
    fmt::{self, Debug, Display, Formatter},
    io,
};

use super::ErrorCode;
use crate::utils::is_logmonitor_debug;

pub type LmResult<T, E = Box<LmError>> = Result<T, E>;

pub struct LmError {
    pub code: ErrorCode,
    pub context: String,
    cause: Option<WrappedError>,
    backtrace: Backtrace,
}

impl Debug for LmError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LmError")
            .field("code", &self.code)
            .field("context", &self.context)
            .field("cause", &self.cause)
            .finish()
    }
}

impl Display for LmError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.context)?;
        if let Some(cause) = &self.cause {
            if !self.context.is_empty() {
                write!(f, ": ")?;
            }
            write!(f, "{cause}")?
        }
        Ok(())
    }
}

impl std::error::Error for LmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause.as_ref().map(|e| e as &dyn std::error::Error)
    }
}

impl LmError {
    pub fn new(code: ErrorCode, context: impl Into<String>) -> Self {
        LmError {
            code,
            context: context.into(),
            cause: None,
            backtrace: Backtrace::capture(),
        }
    }

    /// True if this error contains a backtrace.
    pub fn has_backtrace(&self) -> bool {
        self.backtrace.status() == std::backtrace::BacktraceStatus::Captured
    }

    /// Returns the backtrace as a string, if available.
    pub fn get_backtrace(&self) -> Option<String> {
        if self.has_backtrace() {
            Some(self.backtrace.to_string())
        } else {
            None
        }
    }

    /// Returns a pretty-printed version of this error, prefixed with the
    /// error code.
    pub fn pretty(&self) -> String {
        let mut s = format!("lm{}: {}", self.code, self);
        if is_logmonitor_debug() {
            if let Some(cause) = &self.cause {
                s.push_str(&format!("\n{cause:#?}"));
            }
        }
        if let Some(backtrace) = self.get_backtrace() {
            s.push_str(&format!("\n{backtrace}"));
        }
        s
    }

    /// Adds a cause to this error, replacing the existing cause if any
    ///
    /// Note: if you attach a cause to an error, make sure you don't format the
    /// cause into the [Self::context] for this error, as then the cause would
    /// be double printed when formatting this error.
    pub fn with_cause(self, cause: impl Into<WrappedError>) -> Self {
        LmError {
            cause: Some(cause.into()),
            ..self
        }
    }

    pub fn with_context(self, context: impl Into<String>) -> Self {
        LmError {
            context: context.into(),
            ..self
        }
    }

    pub fn with_code(self, code: ErrorCode) -> Self {
        LmError { code, ..self }
    }

    pub fn cause(&self) -> Option<&WrappedError> {
        self.cause.as_ref()
    }
}

#[derive(Debug)]
pub enum WrappedError {
    Io(io::Error),
}

impl Display for WrappedError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            WrappedError::Io(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for WrappedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WrappedError::Io(e) => Some(e),
        }
    }
}

pub struct ErrContext {
    pub code: Option<ErrorCode>,
    pub context: Option<String>,
}

/// Lifts a foreign result into an [LmResult], attaching an error code and
/// context on the way.
pub trait LiftableResult<T> {
    fn lift(self, f: impl FnOnce() -> ErrContext) -> LmResult<T>;
}

impl<T> LiftableResult<T> for Result<T, io::Error> {
    fn lift(self, f: impl FnOnce() -> ErrContext) -> LmResult<T> {
        self.map_err(|e| {
            let e = LmError::new(ErrorCode::IoError, "").with_cause(e);
            let ctx = f();
            let e = if let Some(code) = ctx.code {
                e.with_code(code)
            } else {
                e
            };
            let e = if let Some(context) = ctx.context {
                e.with_context(context)
            } else {
                e
            };
            e.into()
        })
    }
}

impl From<io::Error> for Box<LmError> {
    fn from(e: io::Error) -> Self {
        Box::new(LmError::new(ErrorCode::IoError, "").with_cause(WrappedError::Io(e)))
    }
}

impl From<io::Error> for WrappedError {
    fn from(e: io::Error) -> Self {
        WrappedError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ectx, err, lm_err};

    fn failing_io() -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
    }

    #[test]
    fn test_io_error_conversion_keeps_cause() {
        let err: Box<LmError> = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert_eq!(err.code, ErrorCode::IoError);
        assert_eq!(err.to_string(), "pipe closed");
        assert!(matches!(err.cause(), Some(WrappedError::Io(_))));
    }

    #[test]
    fn test_lift_attaches_context_and_code() {
        let err = failing_io()
            .lift(ectx!(code => ErrorCode::AlreadyInitialized, "Cannot reopen '{}'", "a.log"))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::AlreadyInitialized);
        assert_eq!(err.to_string(), "Cannot reopen 'a.log': denied");
    }

    #[test]
    fn test_lift_without_context() {
        let err = failing_io().lift(ectx!(code => ErrorCode::IoError)).unwrap_err();
        assert_eq!(err.code, ErrorCode::IoError);
        assert_eq!(err.to_string(), "denied");
    }

    #[test]
    fn test_macros() {
        let res: LmResult<()> = err!(ErrorCode::AlreadyInitialized, "writer {} set", "already");
        let err = res.unwrap_err();
        assert_eq!(err.code, ErrorCode::AlreadyInitialized);
        assert_eq!(err.to_string(), "writer already set");

        let boxed = lm_err!(ErrorCode::IoError, "plain");
        assert!(boxed.pretty().starts_with("lm0010: plain"));
    }
}
