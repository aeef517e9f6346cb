/// lm_err!(code,msg) construct a user-facing [LmError], to be used for further
/// processing, e.g. typically used in `.map_err(|_| lm_err!(..))`, etc
#[macro_export]
macro_rules! lm_err {
    ($code:expr, $($arg:tt)*) => {
        Box::new($crate::LmError::new(
            $code,
            format!($($arg)*),
        ))
    };
}

/// err! constructs a user-facing [LmError] and immediately wrap it in an `Err`
/// variant of a `Result`, typically used in `return err!(...)`, etc
#[macro_export]
macro_rules! err {
    ($code:expr, $($arg:tt)*) => {
        Err($crate::lm_err!($code, $($arg)*))
    };
}

#[macro_export]
macro_rules! ectx {
    (code => $code:expr, $($arg:tt)*) => {
        || $crate::ErrContext {
            code: Some($code),
            context: Some(format!($($arg)*)),
        }
    };
    (code => $code:expr) => {
        || $crate::ErrContext {
            code: Some($code),
            context: None,
        }
    };
    ($($arg:tt)*) => {
        || $crate::ErrContext {
            code: None,
            context: Some(format!($($arg)*)),
        }
    };
}
