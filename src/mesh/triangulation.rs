//! `Triangulation`: a 2D quadrilateral mesh with uniform refinement.
//!
//! # Expected invariants
//! - Every cell stores its four corner vertices in counter-clockwise order
//!   `[bottom-left, bottom-right, top-right, top-left]`.
//! - Cells sharing an edge reference the same two vertex indices for it, so
//!   refinement can reuse mid-edge vertices instead of duplicating them.
//! - Only active (leaf) cells are stored; refinement replaces each cell by
//!   its four children rather than keeping a coarse-to-fine hierarchy.

use hashbrown::HashMap;

/// Active-cells-only quadrilateral mesh.
#[derive(Clone, Debug, Default)]
pub struct Triangulation {
    vertices: Vec<[f64; 2]>,
    cells: Vec<[usize; 4]>,
}

impl Triangulation {
    pub(crate) fn new(vertices: Vec<[f64; 2]>, cells: Vec<[usize; 4]>) -> Self {
        Self { vertices, cells }
    }

    /// Number of active cells.
    pub fn n_active_cells(&self) -> usize {
        self.cells.len()
    }

    /// Number of distinct vertices.
    pub fn n_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Coordinates of vertex `index`.
    pub fn vertex(&self, index: usize) -> [f64; 2] {
        self.vertices[index]
    }

    /// Iterate over active cells as corner-index quadruples.
    pub fn cells(&self) -> impl Iterator<Item = &[usize; 4]> {
        self.cells.iter()
    }

    /// Axis-aligned bounding box of all vertices as `(min, max)` corners.
    pub fn bounding_box(&self) -> ([f64; 2], [f64; 2]) {
        let mut lo = [f64::INFINITY; 2];
        let mut hi = [f64::NEG_INFINITY; 2];
        for v in &self.vertices {
            for d in 0..2 {
                lo[d] = lo[d].min(v[d]);
                hi[d] = hi[d].max(v[d]);
            }
        }
        (lo, hi)
    }

    /// Refine every active cell `passes` times.
    ///
    /// Each pass splits every quad into four congruent children, so the
    /// active-cell count grows by a factor of 4 per pass.
    pub fn refine_global(&mut self, passes: usize) {
        for pass in 0..passes {
            self.refine_once();
            log::trace!(
                "refinement pass {}: {} active cells, {} vertices",
                pass + 1,
                self.cells.len(),
                self.vertices.len()
            );
        }
    }

    fn refine_once(&mut self) {
        // Mid-edge vertices are shared between the two cells on either side
        // of an edge, keyed by the sorted endpoint pair.
        let mut mid_edge: HashMap<(usize, usize), usize> = HashMap::new();
        let coarse = std::mem::take(&mut self.cells);
        let mut refined = Vec::with_capacity(coarse.len() * 4);

        for [v0, v1, v2, v3] in coarse {
            let bottom = self.mid_edge_vertex(&mut mid_edge, v0, v1);
            let right = self.mid_edge_vertex(&mut mid_edge, v1, v2);
            let top = self.mid_edge_vertex(&mut mid_edge, v2, v3);
            let left = self.mid_edge_vertex(&mut mid_edge, v3, v0);
            // The cell center is interior to exactly one coarse cell and is
            // never shared.
            let center = self.push_midpoint(bottom, top);

            refined.push([v0, bottom, center, left]);
            refined.push([bottom, v1, right, center]);
            refined.push([center, right, v2, top]);
            refined.push([left, center, top, v3]);
        }

        self.cells = refined;
    }

    fn mid_edge_vertex(
        &mut self,
        cache: &mut HashMap<(usize, usize), usize>,
        a: usize,
        b: usize,
    ) -> usize {
        let key = (a.min(b), a.max(b));
        match cache.get(&key) {
            Some(&mid) => mid,
            None => {
                let mid = self.push_midpoint(a, b);
                cache.insert(key, mid);
                mid
            }
        }
    }

    fn push_midpoint(&mut self, a: usize, b: usize) -> usize {
        let pa = self.vertices[a];
        let pb = self.vertices[b];
        self.vertices
            .push([(pa[0] + pb[0]) * 0.5, (pa[1] + pb[1]) * 0.5]);
        self.vertices.len() - 1
    }
}
