//! Probe binary: no arguments, no configuration, exit 0 on success.
//!
//! Diagnostics go to stderr through the `log` facade (`RUST_LOG=debug` to see
//! them); the report itself is the only thing written to stdout.

use mesh_probe::capabilities::Capabilities;
use mesh_probe::probe_error::ProbeError;
use mesh_probe::report::run_probe;

fn main() -> Result<(), ProbeError> {
    env_logger::init();

    let capabilities = Capabilities::from_build();
    let report = run_probe(&capabilities)?;
    print!("{report}");
    Ok(())
}
