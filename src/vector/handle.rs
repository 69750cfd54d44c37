//! Vector Handle Management
//!
//! Opaque handles for vectors that cross the host-runtime boundary. The
//! store owns every live vector; the runtime that receives a handle is
//! responsible for releasing it with [`HandleManager::remove`].

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use super::SerialVector;

/// A handle to a vector stored in the global handle manager
pub type VectorHandle = u64;

/// Null sentinel returned when allocation fails.
///
/// Never issued for a live vector; callers must check for it before use.
pub const INVALID_HANDLE: VectorHandle = 0;

static NEXT_HANDLE: AtomicU64 = AtomicU64::new(1);

fn next_handle() -> VectorHandle {
    NEXT_HANDLE.fetch_add(1, Ordering::Relaxed)
}

lazy_static::lazy_static! {
    /// Global storage for vectors referenced by handles held in the host runtime
    static ref VECTOR_STORAGE: RwLock<HashMap<VectorHandle, SerialVector>> =
        RwLock::new(HashMap::new());
}

/// Manager for vector handles
pub struct HandleManager;

impl HandleManager {
    /// Store a vector and return its handle
    pub fn store(vector: SerialVector) -> VectorHandle {
        let handle = next_handle();
        let mut storage = VECTOR_STORAGE.write().unwrap();
        storage.insert(handle, vector);
        handle
    }

    /// Run a closure against a vector by handle
    pub fn with<F, R>(handle: VectorHandle, f: F) -> Option<R>
    where
        F: FnOnce(&SerialVector) -> R,
    {
        let storage = VECTOR_STORAGE.read().unwrap();
        storage.get(&handle).map(f)
    }

    /// Mutate a vector by handle
    pub fn with_mut<F, R>(handle: VectorHandle, f: F) -> Option<R>
    where
        F: FnOnce(&mut SerialVector) -> R,
    {
        let mut storage = VECTOR_STORAGE.write().unwrap();
        storage.get_mut(&handle).map(f)
    }

    /// Remove a vector by handle and return it, releasing the library object
    /// when the returned value is dropped
    pub fn remove(handle: VectorHandle) -> Option<SerialVector> {
        let mut storage = VECTOR_STORAGE.write().unwrap();
        storage.remove(&handle)
    }

    /// Check if a handle refers to a live vector
    pub fn exists(handle: VectorHandle) -> bool {
        let storage = VECTOR_STORAGE.read().unwrap();
        storage.contains_key(&handle)
    }

    /// Length of the vector behind a handle, if it is live
    pub fn len_of(handle: VectorHandle) -> Option<usize> {
        Self::with(handle, |v| v.len())
    }

    /// Get the number of live vectors
    pub fn count() -> usize {
        let storage = VECTOR_STORAGE.read().unwrap();
        storage.len()
    }

    /// Release all live vectors (runtime teardown)
    pub fn clear() {
        let mut storage = VECTOR_STORAGE.write().unwrap();
        storage.clear();
    }
}
