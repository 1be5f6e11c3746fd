//! # mesh-probe
//!
//! mesh-probe is a build-capability smoke probe for a minimal structured mesh
//! kernel. It runs one deterministic operation sequence — generate a 2D unit
//! hypercube, refine it globally, count active cells, optionally take the L2
//! norm of a trivially-distributed all-ones vector — and prints a short,
//! stable capability report (kernel version, mesh statistics, compile-time
//! solver support flags).
//!
//! ## Determinism
//!
//! The report is a pure function of the build: no timestamps, no randomness,
//! no runtime configuration. Running the probe twice in the same build
//! produces byte-identical output, which is what makes it usable as a smoke
//! test — failure to print the expected report *is* the diagnostic.
//!
//! ## Features
//! - `trilinos-support`: distributed-linear-algebra capability (adds the
//!   vector-norm block to the report)
//! - `mpi-support`: message-passing capability flag
//! - `petsc-support`: alternate-solver capability flag
//!
//! All three resolve into [`capabilities::Capabilities`] at startup; nothing
//! else in the crate is conditionally compiled.

pub mod capabilities;
pub mod comm;
pub mod linalg;
pub mod mesh;
pub mod probe_error;
pub mod report;
pub mod version;

/// A convenient prelude to import the most-used types:
pub mod prelude {
    pub use crate::capabilities::Capabilities;
    pub use crate::comm::{Communicator, NoComm};
    pub use crate::linalg::DistributedVector;
    pub use crate::mesh::{hyper_cube, subdivided_hyper_cube, Triangulation};
    pub use crate::probe_error::ProbeError;
    pub use crate::report::{run_probe, ProbeReport};
    pub use crate::version::{kernel_version, VersionTriple};
}
