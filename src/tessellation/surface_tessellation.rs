use nalgebra::{Point3, Vector2, Vector3};

use crate::{
    mesh::{Mesh, MeshProvenance, VertexSource},
    misc::FloatingPoint,
};

/// Surface tessellation representation
/// This struct is what a tessellator hands back for a job, before it becomes a [`Mesh`]
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceTessellation<T: FloatingPoint> {
    pub(crate) points: Vec<Point3<T>>,
    pub(crate) normals: Vec<Vector3<T>>,
    pub(crate) faces: Vec<[usize; 3]>,
    pub(crate) uvs: Vec<Vector2<T>>,
}

impl<T: FloatingPoint> SurfaceTessellation<T> {
    pub fn new(
        points: Vec<Point3<T>>,
        normals: Vec<Vector3<T>>,
        faces: Vec<[usize; 3]>,
        uvs: Vec<Vector2<T>>,
    ) -> Self {
        Self {
            points,
            normals,
            faces,
            uvs,
        }
    }

    pub fn points(&self) -> &[Point3<T>] {
        &self.points
    }

    pub fn normals(&self) -> &[Vector3<T>] {
        &self.normals
    }

    pub fn uvs(&self) -> &[Vector2<T>] {
        &self.uvs
    }

    pub fn faces(&self) -> &[[usize; 3]] {
        &self.faces
    }

    /// Turn the tessellation into a final mesh
    /// # Failures
    /// - if a face refers to a point that does not exist
    /// - if normals or uvs are given but not one per point
    /// - if an index does not fit into `u32`
    pub fn try_into_mesh(self) -> anyhow::Result<Mesh<T>> {
        let n = self.points.len();
        anyhow::ensure!(
            self.normals.is_empty() || self.normals.len() == n,
            "Invalid number of normals, got {}, expected {}",
            self.normals.len(),
            n
        );
        anyhow::ensure!(
            self.uvs.is_empty() || self.uvs.len() == n,
            "Invalid number of uvs, got {}, expected {}",
            self.uvs.len(),
            n
        );

        let indices = self
            .faces
            .iter()
            .flatten()
            .map(|i| {
                anyhow::ensure!(*i < n, "Face index {} out of range for {} points", i, n);
                Ok(u32::try_from(*i)?)
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Mesh::new(
            indices,
            VertexSource::Tessellated {
                points: self.points,
                normals: self.normals,
                uvs: self.uvs,
            },
            MeshProvenance::Final,
        ))
    }
}
