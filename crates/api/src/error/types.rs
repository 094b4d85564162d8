//! Error type definitions for cipher operations

#[cfg(feature = "std")]
use std::string::String;

/// Primary error type for cipher operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid length error with context
    InvalidLength {
        /// Operation that observed the mismatch
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Malformed textual encoding of cipher bytes
    InvalidEncoding {
        /// What was wrong with the encoding
        context: &'static str,
        #[cfg(feature = "std")]
        /// Detailed error message
        message: String,
    },

    /// Stored-keystream decryption requested with no recorded keystream
    MissingKeystream {
        /// Operation that required a recorded keystream
        context: &'static str,
    },

    /// Random generation error
    RandomGenerationError {
        /// Operation that failed to draw randomness
        context: &'static str,
        #[cfg(feature = "std")]
        /// Detailed error message
        message: String,
    },

    /// Other error
    Other {
        /// Operation the error originated from
        context: &'static str,
        #[cfg(feature = "std")]
        /// Detailed error message
        message: String,
    },
}

/// Result type for cipher operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Add context to an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidEncoding { .. } => Self::InvalidEncoding {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::MissingKeystream { .. } => Self::MissingKeystream { context },
            Self::RandomGenerationError { .. } => Self::RandomGenerationError {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::Other { .. } => Self::Other {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
        }
    }

    /// Add a message to an existing error (when std is available)
    #[cfg(feature = "std")]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidEncoding { context, .. } => Self::InvalidEncoding { context, message },
            Self::MissingKeystream { context } => Self::MissingKeystream { context },
            Self::RandomGenerationError { context, .. } => {
                Self::RandomGenerationError { context, message }
            }
            Self::Other { context, .. } => Self::Other { context, message },
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            #[cfg(feature = "std")]
            Self::InvalidEncoding { context, message } => {
                write!(f, "Invalid encoding: {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::InvalidEncoding { context } => {
                write!(f, "Invalid encoding: {}", context)
            }
            Self::MissingKeystream { context } => {
                write!(f, "{}: no keystream recorded for this session", context)
            }
            #[cfg(feature = "std")]
            Self::RandomGenerationError { context, message } => {
                write!(f, "Random generation error: {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::RandomGenerationError { context } => {
                write!(f, "Random generation error: {}", context)
            }
            #[cfg(feature = "std")]
            Self::Other { context, message } => {
                write!(f, "{}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::Other { context } => {
                write!(f, "Error: {}", context)
            }
        }
    }
}
