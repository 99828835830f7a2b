//! Validation utilities shared by the cipher and mode layers

use super::{Error, Result};

/// Validate an exact length
#[inline(always)]
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

/// Validate a minimum length
#[inline(always)]
pub fn min_length(context: &'static str, actual: usize, min: usize) -> Result<()> {
    if actual < min {
        return Err(Error::Length {
            context,
            expected: min,
            actual,
        });
    }
    Ok(())
}

/// Validate that a buffer is a whole number of `block` bytes
#[inline(always)]
pub fn block_aligned(context: &'static str, actual: usize, block: usize) -> Result<()> {
    if actual % block != 0 {
        let expected = (actual / block + 1) * block;
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a mode-level minimum ciphertext length
#[inline(always)]
pub fn ciphertext_len(mode: &'static str, actual: usize, min: usize) -> Result<()> {
    if actual < min {
        return Err(Error::CiphertextTooShort { mode, actual, min });
    }
    Ok(())
}
