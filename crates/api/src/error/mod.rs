//! Error handling for the lfcrypt ecosystem

pub mod traits;
pub mod types;
pub mod validate;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Re-export error traits
pub use traits::ResultExt;

// Implement standard Error trait when std is available
#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Specialized result types for different operations
/// Result type for cipher operations
pub type CipherResult<T> = Result<T>;
/// Result type for keystream operations
pub type StreamResult<T> = Result<T>;
