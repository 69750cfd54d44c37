//! Host Bridge
//!
//! Registry of operations the embedding runtime can call. The runtime
//! resolves an operation by name or id, passes arguments in `u64` register
//! slots, and reads results back from the output slots.
//!
//! # Architecture
//!
//! ```text
//! Host runtime calls:  registry.call_by_name("new_vector", [n], outputs)
//!                             │
//!                             ▼
//! HostRegistry resolves the operation entry
//!                             │
//!                             ▼
//! Registered closure runs the vector factory; outputs[0] = handle
//! ```

pub mod ops;

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

pub use ops::register_vector_ops;

/// Error type for host bridge operations
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Operation id is not registered
    #[error("Operation {0} not found")]
    NotFound(u32),

    /// Operation name is not registered
    #[error("Unknown operation: {0}")]
    UnknownOp(String),

    /// Wrong number of argument slots
    #[error("Expected {expected} arguments, got {got}")]
    InvalidArgCount { expected: usize, got: usize },

    /// The operation itself failed
    #[error("Operation failed: {0}")]
    OpFailed(String),
}

/// Function signature for a host-callable operation
pub type HostFn = Arc<dyn Fn(&[u64], &mut [u64]) -> Result<i64, BridgeError> + Send + Sync>;

/// Signature metadata for a registered operation
#[derive(Debug, Clone)]
pub struct OpSignature {
    /// Operation name the host resolves
    pub name: String,
    /// Description of what the operation does
    pub description: String,
    /// Number of input argument slots
    pub arg_count: usize,
    /// Whether the operation writes an output slot
    pub has_return: bool,
}

/// A registered operation
#[derive(Clone)]
pub struct OpEntry {
    /// Unique id assigned at registration
    pub id: u32,
    /// Signature metadata
    pub signature: OpSignature,
    /// The operation itself
    pub func: HostFn,
}

/// Registry of operations callable from the host runtime
pub struct HostRegistry {
    by_id: HashMap<u32, OpEntry>,
    by_name: HashMap<String, u32>,
    next_id: u32,
}

impl HostRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            by_id: HashMap::new(),
            by_name: HashMap::new(),
            next_id: 1,
        }
    }

    /// Create a registry with the vector operations registered
    pub fn with_vector_ops() -> Self {
        let mut registry = Self::new();
        ops::register_vector_ops(&mut registry);
        registry
    }

    /// Register an operation and return its id
    pub fn register(
        &mut self,
        name: &str,
        description: &str,
        arg_count: usize,
        has_return: bool,
        func: HostFn,
    ) -> u32 {
        let id = self.next_id;
        self.next_id += 1;

        let signature = OpSignature {
            name: name.to_string(),
            description: description.to_string(),
            arg_count,
            has_return,
        };

        self.by_name.insert(name.to_string(), id);
        self.by_id.insert(
            id,
            OpEntry {
                id,
                signature,
                func,
            },
        );

        debug!(id, name, "registered host operation");
        id
    }

    /// Get an operation by id
    pub fn get(&self, id: u32) -> Option<&OpEntry> {
        self.by_id.get(&id)
    }

    /// Get an operation id by name
    pub fn get_id(&self, name: &str) -> Option<u32> {
        self.by_name.get(name).copied()
    }

    /// Get an operation by name
    pub fn get_by_name(&self, name: &str) -> Option<&OpEntry> {
        self.by_name.get(name).and_then(|id| self.by_id.get(id))
    }

    /// Call an operation by id
    pub fn call(&self, id: u32, args: &[u64], outputs: &mut [u64]) -> Result<i64, BridgeError> {
        let entry = self.by_id.get(&id).ok_or(BridgeError::NotFound(id))?;
        if args.len() != entry.signature.arg_count {
            return Err(BridgeError::InvalidArgCount {
                expected: entry.signature.arg_count,
                got: args.len(),
            });
        }
        (entry.func)(args, outputs)
    }

    /// Call an operation by name
    pub fn call_by_name(
        &self,
        name: &str,
        args: &[u64],
        outputs: &mut [u64],
    ) -> Result<i64, BridgeError> {
        let id = self
            .by_name
            .get(name)
            .ok_or_else(|| BridgeError::UnknownOp(name.to_string()))?;
        self.call(*id, args, outputs)
    }

    /// List all registered operations
    pub fn list(&self) -> Vec<&OpSignature> {
        self.by_id.values().map(|e| &e.signature).collect()
    }

    /// Get the number of registered operations
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl Default for HostRegistry {
    fn default() -> Self {
        Self::with_vector_ops()
    }
}
