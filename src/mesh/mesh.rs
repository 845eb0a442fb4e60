use std::sync::Arc;

use nalgebra::{Point3, Vector2, Vector3};

use crate::misc::{CoordinateProvider, FloatingPoint};

/// Where a mesh takes its vertex positions from
#[derive(Clone, Debug)]
pub enum VertexSource<T: FloatingPoint> {
    /// The control points of the surface, indexed as a grid
    ControlPoints(Arc<dyn CoordinateProvider<T>>),
    /// Vertices produced by the tessellator
    Tessellated {
        points: Vec<Point3<T>>,
        normals: Vec<Vector3<T>>,
        uvs: Vec<Vector2<T>>,
    },
}

/// How a mesh came to be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshProvenance {
    /// Synchronous placeholder built from the control grid
    Coarse,
    /// Result of a completed tessellation job
    Final,
}

/// Triangle list mesh
#[derive(Clone, Debug)]
pub struct Mesh<T: FloatingPoint> {
    /// triangle list, 3 indices per face
    indices: Vec<u32>,
    vertices: VertexSource<T>,
    provenance: MeshProvenance,
}

impl<T: FloatingPoint> Mesh<T> {
    pub fn new(indices: Vec<u32>, vertices: VertexSource<T>, provenance: MeshProvenance) -> Self {
        Self {
            indices,
            vertices,
            provenance,
        }
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertices(&self) -> &VertexSource<T> {
        &self.vertices
    }

    pub fn provenance(&self) -> MeshProvenance {
        self.provenance
    }

    pub fn is_coarse(&self) -> bool {
        self.provenance == MeshProvenance::Coarse
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Vertex positions, whichever source they come from
    pub fn points(&self) -> &[Point3<T>] {
        match &self.vertices {
            VertexSource::ControlPoints(provider) => provider.points(),
            VertexSource::Tessellated { points, .. } => points,
        }
    }
}
