use crate::scheduler::SurfaceId;

/// Errors raised while normalizing trim curves, building placeholder meshes
/// or running tessellation jobs.
#[derive(Debug, thiserror::Error)]
pub enum TessError {
    /// Invalid trim curve data: too few points, mismatched weights, bad knots
    #[error("malformed trim curve: {0}")]
    MalformedCurve(String),

    /// The control grid is too small to span a single cell
    #[error("invalid grid dimensions {u}x{v}, both must be at least 2")]
    InvalidDimensions { u: usize, v: usize },

    /// The external tessellator reported an error for a job that was still current
    #[error("tessellation failed: {0:#}")]
    TessellationFailure(anyhow::Error),

    /// The worker queue is bounded and already holds `capacity` jobs
    #[error("tessellation queue is full ({capacity} jobs pending)")]
    QueueFull { capacity: usize },

    #[error("unknown surface {0}")]
    UnknownSurface(SurfaceId),

    #[error("failed to spawn tessellation worker: {0}")]
    WorkerSpawn(#[source] std::io::Error),

    /// Every worker has gone away, so no result can arrive anymore
    #[error("tessellation workers disconnected")]
    Disconnected,
}

impl TessError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        TessError::MalformedCurve(reason.into())
    }
}

/// Shorthand for results carrying a [`TessError`]
pub type TessResult<T> = Result<T, TessError>;
