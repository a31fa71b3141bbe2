//! Fallible buffer allocation.

use crate::error::PathError;

/// Allocate a `Vec` of `len` copies of `value` without aborting on
/// allocation failure.
pub fn try_filled<T: Clone>(len: usize, value: T) -> Result<Vec<T>, PathError> {
    let mut buf = Vec::new();
    if buf.try_reserve_exact(len).is_err() {
        log::error!("could not reserve {len} cells");
        return Err(PathError::AllocationFailure { cells: len });
    }
    buf.resize(len, value);
    Ok(buf)
}
