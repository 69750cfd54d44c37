//! Vector Factory
//!
//! The two operations the host runtime uses to obtain serial vectors.

use tracing::{debug, warn};

use crate::config::{BridgeConfig, LimitsConfig};

use super::handle::{HandleManager, VectorHandle, INVALID_HANDLE};
use super::serial::SerialVector;
use super::VectorError;

/// Per-runtime vector subsystem setup hook.
///
/// Reserved for future setup; currently there is nothing to do. Idempotent
/// and safe to call any number of times.
pub fn init_vectors() {}

/// Allocate a length-`n` serial vector and return its handle.
///
/// Every failure (negative length, configured limit exceeded, allocator
/// exhaustion) collapses to [`INVALID_HANDLE`]; the caller must check the
/// handle before use.
pub fn new_vector(n: i64) -> VectorHandle {
    match try_new_vector(n) {
        Ok(vector) => {
            let handle = HandleManager::store(vector);
            debug!(len = n, handle, "allocated serial vector");
            handle
        }
        Err(err) => {
            warn!(len = n, error = %err, "vector allocation failed");
            INVALID_HANDLE
        }
    }
}

/// `Result`-typed constructor backing [`new_vector`], using the process-wide
/// allocation limits.
pub fn try_new_vector(n: i64) -> Result<SerialVector, VectorError> {
    try_new_vector_with(n, &BridgeConfig::global().limits)
}

/// `Result`-typed constructor with explicit allocation limits.
pub fn try_new_vector_with(n: i64, limits: &LimitsConfig) -> Result<SerialVector, VectorError> {
    if n < 0 {
        return Err(VectorError::InvalidLength(n));
    }
    let requested = n as usize;
    if requested > limits.max_vector_len {
        return Err(VectorError::LengthLimitExceeded {
            requested,
            max: limits.max_vector_len,
        });
    }
    SerialVector::with_len(requested)
}
