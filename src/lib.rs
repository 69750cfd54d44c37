//! Odevec - Serial Vector Bridge
//!
//! The vector layer of a binding that embeds a differential-equation solver
//! in a host scripting runtime. The host obtains serial numeric vectors from
//! an external vector-math library through two entry points: a one-time setup
//! hook and a length-`n` constructor that returns an opaque handle.
//!
//! # Features
//!
//! - **Opaque handles**: vectors never cross the runtime boundary by value;
//!   the host holds a `u64` handle and the store owns the vector
//! - **Null sentinel on failure**: allocation failure yields the invalid
//!   handle rather than a panic or abort
//! - **Fallible allocation**: buffer memory is reserved with
//!   `try_reserve_exact`, so memory exhaustion is an error value
//! - **Configurable limits**: `odevec.toml` can cap the largest vector the
//!   factory will allocate
//!
//! # Example
//!
//! ```rust
//! use odevec::{HandleManager, HostRegistry, INVALID_HANDLE};
//!
//! let registry = HostRegistry::with_vector_ops();
//!
//! // Host runtime sets up the vector subsystem, then allocates a vector.
//! registry.call_by_name("init_vectors", &[], &mut []).unwrap();
//!
//! let mut outputs = [0u64; 1];
//! registry.call_by_name("new_vector", &[10], &mut outputs).unwrap();
//! assert_ne!(outputs[0], INVALID_HANDLE);
//! assert_eq!(HandleManager::len_of(outputs[0]), Some(10));
//!
//! // The receiving runtime owns the handle and releases it when done.
//! HandleManager::remove(outputs[0]);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │   Host runtime   │  Scripting program driving the solver
//! └────────┬─────────┘
//!          │ call_by_name("new_vector", [n], outputs)
//!          ▼
//! ┌──────────────────┐
//! │   HostRegistry   │  Resolves operation name -> registered closure
//! └────────┬─────────┘
//!          │
//!          ▼
//! ┌──────────────────┐
//! │  Vector factory  │  init_vectors / new_vector
//! └────────┬─────────┘
//!          │
//!          ▼
//! ┌──────────────────┐
//! │  HandleManager   │  Owns live vectors, issues opaque handles
//! └──────────────────┘
//! ```

#![warn(clippy::all)]

pub mod bridge;
pub mod config;
pub mod vector;

// Re-export commonly used types
pub use bridge::{register_vector_ops, BridgeError, HostFn, HostRegistry, OpEntry, OpSignature};
pub use config::{BridgeConfig, ConfigError, ConfigResult, LimitsConfig};
pub use vector::{
    init_vectors, new_vector, try_new_vector, try_new_vector_with, HandleManager, SerialVector,
    VectorError, VectorHandle, INVALID_HANDLE,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_vector_roundtrip() {
        let handle = new_vector(10);
        assert_ne!(handle, INVALID_HANDLE);
        assert_eq!(HandleManager::len_of(handle), Some(10));
        HandleManager::remove(handle);
    }

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
