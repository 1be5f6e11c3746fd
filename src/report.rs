//! The probe itself: run the kernel's reference sequence and render the report.
//!
//! A [`ProbeReport`] is a pure function of the capability set plus the
//! kernel's responses: the original smoke test's two preprocessor-gated build
//! variants collapse into this one code path. Rendering is fully
//! deterministic, so two runs of the same build print byte-identical output.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::capabilities::Capabilities;
use crate::comm::NoComm;
use crate::linalg::DistributedVector;
use crate::mesh::hyper_cube;
use crate::probe_error::ProbeError;
use crate::version::{kernel_version, VersionTriple};

/// Reference domain lower bound.
pub const HYPER_CUBE_MIN: f64 = -1.0;
/// Reference domain upper bound.
pub const HYPER_CUBE_MAX: f64 = 1.0;
/// Global refinement passes applied to the reference mesh.
pub const GLOBAL_REFINEMENTS: usize = 2;
/// Length of the all-ones vector used for the norm check.
pub const PROBE_VECTOR_LEN: usize = 10;

/// One run's capability report, built top-to-bottom then printed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProbeReport {
    pub version: VersionTriple,
    pub active_cells: usize,
    /// Present only when the distributed-linear-algebra capability ran.
    pub vector_norm: Option<f64>,
    pub capabilities: Capabilities,
}

fn flag(enabled: bool) -> &'static str {
    if enabled { "ENABLED" } else { "DISABLED" }
}

impl fmt::Display for ProbeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "mesh-probe version: {}", self.version)?;
        writeln!(f, "Number of active cells: {}", self.active_cells)?;
        writeln!(f, "Trilinos support: {}", flag(self.capabilities.trilinos))?;
        if let Some(norm) = self.vector_norm {
            writeln!(f, "Trilinos vector norm: {norm:.5}")?;
        }
        writeln!(f, "MPI support: {}", flag(self.capabilities.mpi))?;
        writeln!(f, "PETSc support: {}", flag(self.capabilities.petsc))
    }
}

/// Run the reference operation sequence against the given capability set.
///
/// Sequence: build the `[-1, 1]^2` hypercube, refine it globally twice and
/// count active cells; then, only if the distributed-linear-algebra
/// capability is set, stand up a single-rank group, fill a 10-element vector
/// with ones and take its L2 norm.
pub fn run_probe(capabilities: &Capabilities) -> Result<ProbeReport, ProbeError> {
    let mut tria = hyper_cube(HYPER_CUBE_MIN, HYPER_CUBE_MAX)?;
    tria.refine_global(GLOBAL_REFINEMENTS);
    log::debug!(
        "reference mesh refined {GLOBAL_REFINEMENTS}x: {} active cells",
        tria.n_active_cells()
    );

    let vector_norm = if capabilities.trilinos {
        let mut vec = DistributedVector::<f64>::reinit(NoComm, PROBE_VECTOR_LEN)?;
        vec.fill(1.0);
        Some(vec.l2_norm())
    } else {
        None
    };

    Ok(ProbeReport {
        version: kernel_version(),
        active_cells: tria.n_active_cells(),
        vector_norm,
        capabilities: *capabilities,
    })
}
