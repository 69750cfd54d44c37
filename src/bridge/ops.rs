//! Vector Operation Wiring
//!
//! Registers the vector factory's entry points with the host registry.
//! Allocation failure is reported through the invalid-handle sentinel in the
//! output slot, never through `Err`, so the host checks the handle before use.

use std::sync::Arc;

use crate::vector;

use super::HostRegistry;

/// Register the vector entry points with the host registry
pub fn register_vector_ops(registry: &mut HostRegistry) {
    registry.register(
        "init_vectors",
        "Per-runtime vector subsystem setup hook. No arguments, no outputs.",
        0,
        false,
        Arc::new(|_args: &[u64], _outputs: &mut [u64]| {
            vector::init_vectors();
            Ok(0)
        }),
    );

    registry.register(
        "new_vector",
        "Allocate a serial vector. Args: length (i64). \
         Writes the vector handle to the first output slot; the invalid \
         handle signals allocation failure.",
        1,
        true,
        Arc::new(|args: &[u64], outputs: &mut [u64]| {
            let len = args[0] as i64;
            outputs[0] = vector::new_vector(len);
            Ok(0)
        }),
    );
}
