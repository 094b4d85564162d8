//! Validation helpers shared by the lfcrypt crates

use super::types::{Error, Result};

/// Check that `actual` matches the `expected` length for `context`
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}
