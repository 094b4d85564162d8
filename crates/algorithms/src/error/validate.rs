//! Validation helpers for keystream primitives

use super::{Error, Result};

/// Check that a slice length matches the expected length
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}
