//! Degenerate communicator seam for trivially-distributed objects.
//!
//! The probe initializes its "distributed" runtime with a single rank, so no
//! actual message passing ever happens. The seam still exists as a trait so
//! the vector layout code reads the same way it would against a real
//! communicator, but the only implementation is an explicit no-op group.

use num_traits::Float;

/// Minimal process-group interface (reduction only by design).
pub trait Communicator {
    /// Rank of the calling process within the group.
    fn rank(&self) -> usize;
    /// Number of processes in the group.
    fn size(&self) -> usize;
    /// Sum `local` across all ranks; every rank receives the result.
    fn all_reduce_sum<T: Float>(&self, local: T) -> T;
}

/// Trivial single-process group: rank 0 of 1, reductions are the identity.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoComm;

impl Communicator for NoComm {
    fn rank(&self) -> usize {
        0
    }

    fn size(&self) -> usize {
        1
    }

    fn all_reduce_sum<T: Float>(&self, local: T) -> T {
        local
    }
}
