//! Error handling for symmetric stream cipher operations
//!
//! This module re-exports the API error system and adds conversions for
//! the primitive error type.

// Re-export the primary API error system
pub use lfcrypt_api::error::{validate, Error, Result, ResultExt};

// Import for conversions
use lfcrypt_algorithms::error::Error as PrimitiveError;

/// Convert a PrimitiveError to an API Error
pub fn from_primitive_error(err: PrimitiveError) -> Error {
    err.into()
}

/// Extension trait to make conversions more ergonomic
pub trait SymmetricResultExt<T> {
    /// Convert a Result with PrimitiveError to a Result with API Error
    fn map_primitive_err(self) -> Result<T>;
}

impl<T> SymmetricResultExt<T> for core::result::Result<T, PrimitiveError> {
    fn map_primitive_err(self) -> Result<T> {
        self.map_err(from_primitive_error)
    }
}

// Specialized result types for different operations
/// Result type for cipher session operations
pub type CipherResult<T> = Result<T>;
/// Result type for keystream recombination operations
pub type StreamResult<T> = Result<T>;
