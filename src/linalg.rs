//! Trivially-distributed vectors over a [`Communicator`] group.
//!
//! Layout is the degenerate one the probe needs: rank 0 owns the complete
//! index range `[0, global_len)` and there are no ghost entries. Norms are
//! still computed the distributed way (local partial sum, then an
//! all-reduce), so the code path matches what a real multi-rank layout
//! would execute.

use std::ops::Range;

use num_traits::Float;

use crate::comm::{Communicator, NoComm};
use crate::probe_error::ProbeError;

/// Vector with a trivial single-rank ownership layout.
#[derive(Clone, Debug)]
pub struct DistributedVector<T, C: Communicator = NoComm> {
    values: Vec<T>,
    comm: C,
}

impl<T: Float, C: Communicator> DistributedVector<T, C> {
    /// Create a vector of `global_len` zeros owned entirely by this rank.
    pub fn reinit(comm: C, global_len: usize) -> Result<Self, ProbeError> {
        if global_len == 0 {
            return Err(ProbeError::EmptyVectorLayout);
        }
        Ok(Self {
            values: vec![T::zero(); global_len],
            comm,
        })
    }

    /// Overwrite every owned entry with `value`.
    pub fn fill(&mut self, value: T) {
        for v in &mut self.values {
            *v = value;
        }
    }

    /// Global number of elements.
    pub fn global_len(&self) -> usize {
        self.values.len()
    }

    /// Index range owned by the calling rank.
    pub fn owned_range(&self) -> Range<usize> {
        // Single-rank layout: everything is local.
        debug_assert_eq!(self.comm.size(), 1);
        0..self.values.len()
    }

    /// Euclidean norm, reduced across the communicator group.
    pub fn l2_norm(&self) -> T {
        let local: T = self
            .values
            .iter()
            .fold(T::zero(), |acc, &v| acc + v * v);
        self.comm.all_reduce_sum(local).sqrt()
    }
}
