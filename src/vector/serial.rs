//! Serial Vector Resource
//!
//! Owned wrapper around the vector-math library's serial vector object.

use ndarray::Array1;

use super::VectorError;

/// A single-process contiguous numeric vector owned on behalf of the host
/// runtime.
///
/// Construction is the only fallible operation; the library object is
/// released when the value is dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct SerialVector {
    data: Array1<f64>,
}

impl SerialVector {
    /// Allocate a vector of `len` elements from the vector-math library.
    ///
    /// The buffer is acquired fallibly, so memory exhaustion surfaces as
    /// [`VectorError::AllocationFailure`] instead of aborting the process.
    /// Contents after construction are unspecified.
    pub fn with_len(len: usize) -> Result<Self, VectorError> {
        let mut buf: Vec<f64> = Vec::new();
        buf.try_reserve_exact(len)
            .map_err(|_| VectorError::AllocationFailure { requested: len })?;
        buf.resize(len, 0.0);
        Ok(Self {
            data: Array1::from_vec(buf),
        })
    }

    /// Number of elements in the vector
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the vector has zero elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// View the underlying buffer
    pub fn as_slice(&self) -> &[f64] {
        // A freshly constructed Array1 is always contiguous in standard layout
        self.data.as_slice().expect("serial vector is contiguous")
    }

    /// Mutably view the underlying buffer
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        self.data
            .as_slice_mut()
            .expect("serial vector is contiguous")
    }
}
