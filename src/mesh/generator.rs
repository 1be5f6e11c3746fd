//! Structured generators for the reference domains the probe builds.

use itertools::iproduct;

use crate::mesh::Triangulation;
use crate::probe_error::ProbeError;

fn invalid_geometry(message: impl Into<String>) -> ProbeError {
    ProbeError::InvalidGeometry(message.into())
}

/// Generate the 2D unit hypercube `[min, max]^2` as a single quad cell.
pub fn hyper_cube(min: f64, max: f64) -> Result<Triangulation, ProbeError> {
    subdivided_hyper_cube(1, min, max)
}

/// Generate `[min, max]^2` as an `n`×`n` structured quad grid.
pub fn subdivided_hyper_cube(n: usize, min: f64, max: f64) -> Result<Triangulation, ProbeError> {
    if n == 0 {
        return Err(ProbeError::InvalidSubdivision(
            "repetitions must be positive".into(),
        ));
    }
    // `!(min < max)` also rejects NaN bounds.
    if !(min < max) {
        return Err(invalid_geometry(format!(
            "hypercube bounds must satisfy min < max, got [{min}, {max}]"
        )));
    }

    let h = (max - min) / n as f64;
    let mut vertices = Vec::with_capacity((n + 1) * (n + 1));
    for (j, i) in iproduct!(0..=n, 0..=n) {
        vertices.push([min + h * i as f64, min + h * j as f64]);
    }

    let row_stride = n + 1;
    let mut cells = Vec::with_capacity(n * n);
    for (j, i) in iproduct!(0..n, 0..n) {
        let v0 = j * row_stride + i;
        let v1 = v0 + 1;
        let v3 = v0 + row_stride;
        let v2 = v3 + 1;
        cells.push([v0, v1, v2, v3]);
    }

    log::debug!(
        "generated {n}x{n} hypercube over [{min}, {max}]^2: {} cells, {} vertices",
        cells.len(),
        vertices.len()
    );
    Ok(Triangulation::new(vertices, cells))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hyper_cube_is_one_cell() {
        let tria = hyper_cube(-1.0, 1.0).unwrap();
        assert_eq!(tria.n_active_cells(), 1);
        assert_eq!(tria.n_vertices(), 4);
        assert_eq!(tria.bounding_box(), ([-1.0, -1.0], [1.0, 1.0]));
    }

    #[test]
    fn subdivided_counts() {
        let tria = subdivided_hyper_cube(3, 0.0, 1.0).unwrap();
        assert_eq!(tria.n_active_cells(), 9);
        assert_eq!(tria.n_vertices(), 16);
    }

    #[test]
    fn corner_ordering_matches_grid_layout() {
        let tria = subdivided_hyper_cube(2, 0.0, 2.0).unwrap();
        let first = *tria.cells().next().unwrap();
        assert_eq!(tria.vertex(first[0]), [0.0, 0.0]);
        assert_eq!(tria.vertex(first[1]), [1.0, 0.0]);
        assert_eq!(tria.vertex(first[2]), [1.0, 1.0]);
        assert_eq!(tria.vertex(first[3]), [0.0, 1.0]);
    }

    #[test]
    fn degenerate_bounds_are_rejected() {
        assert!(matches!(
            hyper_cube(1.0, 1.0),
            Err(ProbeError::InvalidGeometry(_))
        ));
        assert!(matches!(
            hyper_cube(2.0, -2.0),
            Err(ProbeError::InvalidGeometry(_))
        ));
        assert!(matches!(
            hyper_cube(f64::NAN, 1.0),
            Err(ProbeError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn zero_repetitions_are_rejected() {
        assert!(matches!(
            subdivided_hyper_cube(0, -1.0, 1.0),
            Err(ProbeError::InvalidSubdivision(_))
        ));
    }
}
