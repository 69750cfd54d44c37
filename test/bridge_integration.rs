//! Integration Tests for the Host Bridge
//!
//! Drives the two vector entry points the way an embedding runtime would:
//! resolve by name, pass register-slot arguments, read the handle back from
//! the output slot.

use odevec::{HandleManager, HostRegistry, INVALID_HANDLE};

#[test]
fn test_vector_ops_are_registered() {
    let registry = HostRegistry::with_vector_ops();

    assert_eq!(registry.len(), 2);
    assert!(registry.get_id("init_vectors").is_some());
    assert!(registry.get_id("new_vector").is_some());

    let init = registry.get_by_name("init_vectors").unwrap();
    assert_eq!(init.signature.arg_count, 0);
    assert!(!init.signature.has_return);

    let new = registry.get_by_name("new_vector").unwrap();
    assert_eq!(new.signature.arg_count, 1);
    assert!(new.signature.has_return);
}

#[test]
fn test_default_registry_has_vector_ops() {
    let registry = HostRegistry::default();
    assert!(registry.get_id("new_vector").is_some());
}

#[test]
fn test_init_then_allocate() {
    let registry = HostRegistry::with_vector_ops();

    let status = registry.call_by_name("init_vectors", &[], &mut []).unwrap();
    assert_eq!(status, 0);

    let mut outputs = [0u64; 1];
    let status = registry
        .call_by_name("new_vector", &[10], &mut outputs)
        .unwrap();
    assert_eq!(status, 0);

    let handle = outputs[0];
    assert_ne!(handle, INVALID_HANDLE);
    assert_eq!(HandleManager::len_of(handle), Some(10));

    HandleManager::remove(handle);
}

#[test]
fn test_allocate_by_id() {
    let registry = HostRegistry::with_vector_ops();
    let id = registry.get_id("new_vector").unwrap();

    let mut outputs = [0u64; 1];
    registry.call(id, &[4], &mut outputs).unwrap();

    assert_eq!(HandleManager::len_of(outputs[0]), Some(4));
    HandleManager::remove(outputs[0]);
}

#[test]
fn test_negative_length_through_bridge() {
    let registry = HostRegistry::with_vector_ops();

    // -1 in the u64 register slot
    let mut outputs = [u64::MAX; 1];
    let status = registry
        .call_by_name("new_vector", &[(-1i64) as u64], &mut outputs)
        .unwrap();

    // The call itself succeeds; failure is the sentinel in the output slot
    assert_eq!(status, 0);
    assert_eq!(outputs[0], INVALID_HANDLE);
}

#[test]
fn test_zero_length_through_bridge() {
    let registry = HostRegistry::with_vector_ops();

    let mut outputs = [0u64; 1];
    registry
        .call_by_name("new_vector", &[0], &mut outputs)
        .unwrap();

    assert_ne!(outputs[0], INVALID_HANDLE);
    assert_eq!(HandleManager::len_of(outputs[0]), Some(0));
    HandleManager::remove(outputs[0]);
}

#[test]
fn test_repeated_init_through_bridge() {
    let registry = HostRegistry::with_vector_ops();

    for _ in 0..10 {
        let status = registry.call_by_name("init_vectors", &[], &mut []).unwrap();
        assert_eq!(status, 0);
    }
}

#[test]
fn test_each_allocation_gets_a_fresh_handle() {
    let registry = HostRegistry::with_vector_ops();
    let mut handles = Vec::new();

    for _ in 0..8 {
        let mut outputs = [0u64; 1];
        registry
            .call_by_name("new_vector", &[16], &mut outputs)
            .unwrap();
        handles.push(outputs[0]);
    }

    let mut deduped = handles.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), handles.len());

    for handle in handles {
        HandleManager::remove(handle);
    }
}
