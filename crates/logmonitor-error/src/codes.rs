use std::fmt::{self, Display, Formatter};

use strum_macros::{EnumIter, IntoStaticStr};

/// Stable numeric codes for every error the writer stack can surface.
///
/// The numeric value is part of the `pretty()` rendering and must not change
/// once assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[repr(u16)]
pub enum ErrorCode {
    IoError = 10,
    AlreadyInitialized = 30,
}

impl ErrorCode {
    pub fn as_u16(self) -> u16 {
        self as u16
    }

    pub fn name(self) -> &'static str {
        self.into()
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.as_u16())
    }
}
