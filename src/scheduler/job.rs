use std::fmt;

use crate::{error::TessResult, mesh::Mesh, misc::FloatingPoint, payload::TessellationPayload};

/// Stable identifier of a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceId(pub u64);

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface#{}", self.0)
    }
}

/// Stable identifier of a tessellation job, unique per scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JobId(pub u64);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "job#{}", self.0)
    }
}

/// The job a surface is currently waiting for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobHandle {
    pub id: JobId,
    pub owner: SurfaceId,
}

/// Status of a job that has not been settled yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    /// Queued or running, its result will be applied
    Dispatched,
    /// Superseded by a newer job, its result will be dropped
    Discarded,
}

/// A job waiting in, or taken from, the worker queue
#[derive(Debug)]
pub(crate) struct QueuedJob<T: FloatingPoint> {
    pub(crate) id: JobId,
    pub(crate) owner: SurfaceId,
    pub(crate) payload: TessellationPayload<T>,
}

/// What a worker reports back for a job
#[derive(Debug)]
pub struct JobOutcome<T: FloatingPoint> {
    pub job: JobId,
    pub owner: SurfaceId,
    pub result: TessResult<Mesh<T>>,
}
