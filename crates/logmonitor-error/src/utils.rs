/// True when `LOGMONITOR_DEBUG` is set to a positive integer.
///
/// Enables printing of error causes in [crate::LmError::pretty].
pub fn is_logmonitor_debug() -> bool {
    std::env::var("LOGMONITOR_DEBUG")
        .as_ref()
        .map(String::as_str)
        .map(str::parse::<i32>)
        .map(Result::unwrap_or_default)
        .unwrap_or_default()
        > 0
}
