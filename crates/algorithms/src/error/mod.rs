//! Error handling for keystream primitives

use core::fmt;

use lfcrypt_api::Error as CoreError;

/// The error type for keystream primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Fallback for other errors
    Other(&'static str),
}

/// Result type for keystream primitive operations
pub type Result<T> = core::result::Result<T, Error>;

// Display implementation for error formatting
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::Other(msg) => write!(f, "{}", msg),
        }
    }
}

// Implement std::error::Error when std is available
#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Implement conversion to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Other(msg) => CoreError::Other {
                context: msg,
                #[cfg(feature = "std")]
                message: String::new(),
            },
        }
    }
}

// Include the validation submodule
pub mod validate;
