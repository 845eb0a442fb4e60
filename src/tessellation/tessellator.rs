use crate::{misc::FloatingPoint, payload::TessellationPayload};

use super::SurfaceTessellation;

/// The external tessellator that turns a job payload into triangles
/// It runs on worker threads, one payload at a time per worker.
pub trait Tessellator<T: FloatingPoint>: Send + Sync {
    fn tessellate(&self, payload: &TessellationPayload<T>)
        -> anyhow::Result<SurfaceTessellation<T>>;
}

impl<T, F> Tessellator<T> for F
where
    T: FloatingPoint,
    F: Fn(&TessellationPayload<T>) -> anyhow::Result<SurfaceTessellation<T>> + Send + Sync,
{
    fn tessellate(
        &self,
        payload: &TessellationPayload<T>,
    ) -> anyhow::Result<SurfaceTessellation<T>> {
        self(payload)
    }
}
