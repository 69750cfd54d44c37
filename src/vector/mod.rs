//! Serial Vector Layer
//!
//! Owns the serial vectors the host runtime works with and hands out opaque
//! handles for them. The factory is the only allocation path; the handle
//! manager is the only way a handle resolves back to a vector.
//!
//! # Architecture
//!
//! ```text
//! Host runtime
//!       │
//!       ▼
//! factory::new_vector(n)
//!       │
//!       ▼
//! SerialVector::with_len(n)   (ndarray-backed, fallible)
//!       │
//!       ▼
//! HandleManager::store(v) ──▶ VectorHandle (0 = invalid)
//! ```

mod factory;
mod handle;
mod serial;

pub use factory::{init_vectors, new_vector, try_new_vector, try_new_vector_with};
pub use handle::{HandleManager, VectorHandle, INVALID_HANDLE};
pub use serial::SerialVector;

use thiserror::Error;

/// Error type for vector construction
#[derive(Debug, Error)]
pub enum VectorError {
    /// The underlying allocator could not satisfy the request
    #[error("Allocation of {requested} elements failed")]
    AllocationFailure { requested: usize },

    /// Length was not interpretable as a non-negative element count
    #[error("Invalid vector length: {0}")]
    InvalidLength(i64),

    /// Length exceeds the configured allocation limit
    #[error("Vector length {requested} exceeds configured limit {max}")]
    LengthLimitExceeded { requested: usize, max: usize },
}
