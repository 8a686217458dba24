use crate::math::{Point2, Vector3, TOLERANCE};
use crate::strip::CoordinateGrids;

use super::TriangleMesh;

/// Tessellates sampled coordinate grids into a triangle mesh.
///
/// Every grid node becomes one vertex (row-major order) and every grid cell
/// two triangles. Vertex normals average the adjacent triangle normals,
/// weighted by triangle area; nodes surrounded only by degenerate triangles
/// get a zero normal.
pub struct TessellateStrip<'a> {
    coordinates: &'a CoordinateGrids,
}

impl<'a> TessellateStrip<'a> {
    /// Creates a new `TessellateStrip` operation.
    #[must_use]
    pub fn new(coordinates: &'a CoordinateGrids) -> Self {
        Self { coordinates }
    }

    /// Executes the tessellation, returning a triangle mesh.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn execute(&self) -> TriangleMesh {
        let (rows, cols) = self.coordinates.shape();
        let mut mesh = TriangleMesh::default();
        mesh.vertices.reserve(rows * cols);
        mesh.uvs.reserve(rows * cols);
        mesh.indices.reserve(rows.saturating_sub(1) * cols.saturating_sub(1) * 2);

        for i in 0..rows {
            for j in 0..cols {
                mesh.vertices.push(self.coordinates.point(i, j));
                mesh.uvs.push(Point2::new(fraction(j, cols), fraction(i, rows)));
            }
        }

        // Two triangles per quad cell
        for i in 0..rows.saturating_sub(1) {
            for j in 0..cols.saturating_sub(1) {
                let i00 = (i * cols + j) as u32;
                let i01 = (i * cols + j + 1) as u32;
                let i10 = ((i + 1) * cols + j) as u32;
                let i11 = ((i + 1) * cols + j + 1) as u32;
                mesh.indices.push([i00, i01, i11]);
                mesh.indices.push([i00, i11, i10]);
            }
        }

        mesh.normals = vertex_normals(&mesh);
        mesh
    }
}

#[allow(clippy::cast_precision_loss)]
fn fraction(index: usize, count: usize) -> f64 {
    if count < 2 {
        0.0
    } else {
        index as f64 / (count - 1) as f64
    }
}

fn vertex_normals(mesh: &TriangleMesh) -> Vec<Vector3> {
    let mut sums = vec![Vector3::zeros(); mesh.vertices.len()];
    for tri in &mesh.indices {
        let v0 = mesh.vertices[tri[0] as usize];
        let v1 = mesh.vertices[tri[1] as usize];
        let v2 = mesh.vertices[tri[2] as usize];
        // Unnormalized: magnitude is twice the triangle area.
        let n = (v1 - v0).cross(&(v2 - v0));
        for &idx in tri {
            sums[idx as usize] += n;
        }
    }
    sums.into_iter()
        .map(|n| n.try_normalize(TOLERANCE).unwrap_or_else(Vector3::zeros))
        .collect()
}
