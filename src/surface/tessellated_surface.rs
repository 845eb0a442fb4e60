use crate::{
    error::TessResult,
    mesh::{coarse_mesh, Mesh},
    misc::FloatingPoint,
    scheduler::{JobHandle, JobId, SurfaceId},
};

use super::SurfaceDefinition;

/// Where a surface stands with respect to tessellation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TessellationState {
    /// No job has been dispatched yet
    Idle,
    /// Waiting for the given job
    Dispatched(JobId),
    /// The mesh of the given job is active
    Completed(JobId),
    /// The given job failed, the previous mesh stays active
    Failed(JobId),
}

/// A trimmed surface together with the mesh currently shown for it
#[derive(Debug, Clone)]
pub struct TessellatedSurface<T: FloatingPoint> {
    id: SurfaceId,
    definition: SurfaceDefinition<T>,
    mesh: Option<Mesh<T>>,
    current_job: Option<JobHandle>,
    state: TessellationState,
}

impl<T: FloatingPoint> TessellatedSurface<T> {
    pub fn new(id: SurfaceId, definition: SurfaceDefinition<T>) -> Self {
        Self {
            id,
            definition,
            mesh: None,
            current_job: None,
            state: TessellationState::Idle,
        }
    }

    pub fn id(&self) -> SurfaceId {
        self.id
    }

    pub fn definition(&self) -> &SurfaceDefinition<T> {
        &self.definition
    }

    pub fn mesh(&self) -> Option<&Mesh<T>> {
        self.mesh.as_ref()
    }

    pub fn current_job(&self) -> Option<JobHandle> {
        self.current_job
    }

    pub fn state(&self) -> TessellationState {
        self.state
    }

    /// Give the surface a placeholder mesh if it has none yet
    /// Returns `true` if a coarse mesh was built
    pub fn ensure_coarse_mesh(&mut self) -> TessResult<bool> {
        if self.mesh.is_some() {
            return Ok(false);
        }
        let mesh = coarse_mesh(
            self.definition.u_dimension,
            self.definition.v_dimension,
            self.definition.control_points.clone(),
        )?;
        self.mesh = Some(mesh);
        Ok(true)
    }

    pub(crate) fn set_definition(&mut self, definition: SurfaceDefinition<T>) {
        self.definition = definition;
    }

    /// Make `job` the current one, returning the job it supersedes
    pub(crate) fn replace_job(&mut self, job: JobHandle) -> Option<JobHandle> {
        self.state = TessellationState::Dispatched(job.id);
        self.current_job.replace(job)
    }

    pub(crate) fn is_current(&self, job: JobId) -> bool {
        self.current_job.is_some_and(|h| h.id == job)
    }

    pub(crate) fn complete(&mut self, job: JobId, mesh: Mesh<T>) {
        self.current_job = None;
        self.mesh = Some(mesh);
        self.state = TessellationState::Completed(job);
    }

    pub(crate) fn fail(&mut self, job: JobId) {
        self.current_job = None;
        self.state = TessellationState::Failed(job);
    }

    pub(crate) fn take_current_job(&mut self) -> Option<JobHandle> {
        self.current_job.take()
    }
}
