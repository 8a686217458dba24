//! Surface plot output.
//!
//! Writes the tessellated surface of a strip as a titled Wavefront OBJ model
//! that any 3D viewer can display. Nothing here feeds back into the
//! estimators.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::strip::MobiusStrip;
use crate::tessellation::TriangleMesh;

/// Title written at the top of every plot unless overridden.
pub const DEFAULT_TITLE: &str = "Möbius Strip Visualization";

/// A 3D surface plot of a sampled strip.
pub struct SurfacePlot {
    mesh: TriangleMesh,
    title: String,
}

impl SurfacePlot {
    /// Creates a plot of the strip's surface with the default title.
    #[must_use]
    pub fn new(strip: &MobiusStrip) -> Self {
        Self {
            mesh: strip.tessellate(),
            title: DEFAULT_TITLE.to_owned(),
        }
    }

    /// Replaces the plot title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Returns the plot title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the triangulated surface.
    #[must_use]
    pub fn mesh(&self) -> &TriangleMesh {
        &self.mesh
    }

    /// Writes the plot as OBJ text.
    ///
    /// Layout: title and count comments, an `o` object line, one `v` line per
    /// grid node, one `vt` line per node parameter coordinate, one `vn` line
    /// per node normal, then one `f v/vt/vn` line per triangle with 1-based
    /// indices.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_obj<W: Write>(&self, mut writer: W) -> Result<()> {
        writeln!(writer, "# {}", self.title)?;
        writeln!(writer, "# Vertices: {}", self.mesh.vertices.len())?;
        writeln!(writer, "# Faces: {}", self.mesh.indices.len())?;
        writeln!(writer, "o mobius_strip")?;

        for v in &self.mesh.vertices {
            writeln!(writer, "v {:.9} {:.9} {:.9}", v.x, v.y, v.z)?;
        }
        for uv in &self.mesh.uvs {
            writeln!(writer, "vt {:.6} {:.6}", uv.x, uv.y)?;
        }
        for n in &self.mesh.normals {
            writeln!(writer, "vn {:.6} {:.6} {:.6}", n.x, n.y, n.z)?;
        }
        for tri in &self.mesh.indices {
            let [a, b, c] = tri.map(|i| i + 1);
            writeln!(writer, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Saves the plot to an OBJ file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn save(&self, path: &Path) -> Result<()> {
        info!("Saving surface plot to {:?} (OBJ format)", path);
        let file = File::create(path)?;
        self.write_obj(BufWriter::new(file))?;
        info!(
            "Saved {} vertices and {} faces to {:?}",
            self.mesh.vertices.len(),
            self.mesh.indices.len(),
            path
        );
        Ok(())
    }
}
