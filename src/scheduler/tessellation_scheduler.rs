use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, TryRecvError};
use std::sync::Arc;
use std::time::Duration;

use crate::{
    error::{TessError, TessResult},
    misc::FloatingPoint,
    payload::TessellationPayload,
    pool::WorkerPool,
    scene::SceneHost,
    surface::TessellatedSurface,
    tessellation::Tessellator,
};

use super::{
    JobHandle, JobId, JobOutcome, JobStatus, ProgressTracker, QueuedJob, SchedulerConfig,
    SurfaceId,
};

/// What settling an outcome did to its surface
#[derive(Debug)]
pub enum SurfaceEvent {
    /// The job's mesh replaced the surface's active mesh
    MeshReplaced { surface: SurfaceId, job: JobId },
    /// The tessellator failed, the surface keeps its previous mesh
    Failed {
        surface: SurfaceId,
        job: JobId,
        error: TessError,
    },
}

impl SurfaceEvent {
    pub fn surface(&self) -> SurfaceId {
        match self {
            SurfaceEvent::MeshReplaced { surface, .. } | SurfaceEvent::Failed { surface, .. } => {
                *surface
            }
        }
    }
}

#[derive(Debug)]
struct JobRecord {
    owner: SurfaceId,
    status: JobStatus,
}

/// Runs tessellation jobs off the calling thread
///
/// At most one job per surface is current: dispatching a new job discards the
/// previous one, which still runs to completion but whose outcome is dropped.
/// Outcomes are handed back through a channel and settled by the owner of the
/// surfaces, one at a time.
pub struct TessellationScheduler<T: FloatingPoint> {
    pool: WorkerPool<QueuedJob<T>>,
    outcomes: Receiver<JobOutcome<T>>,
    jobs: HashMap<JobId, JobRecord>,
    progress: ProgressTracker,
    host: Arc<dyn SceneHost>,
    next_job: u64,
}

impl<T: FloatingPoint> TessellationScheduler<T> {
    /// Spawn the worker pool
    /// # Failures
    /// - if a worker thread cannot be spawned
    pub fn new(
        config: &SchedulerConfig,
        tessellator: Arc<dyn Tessellator<T>>,
        host: Arc<dyn SceneHost>,
    ) -> TessResult<Self> {
        let (tx, outcomes) = mpsc::channel();
        let pool = WorkerPool::new(config, move |job: QueuedJob<T>| {
            let outcome = run_job(tessellator.as_ref(), job);
            if tx.send(outcome).is_err() {
                log::debug!("scheduler is gone, dropping a tessellation outcome");
            }
        })?;
        log::debug!(
            "tessellation scheduler started with {} workers",
            pool.num_workers()
        );

        Ok(Self {
            pool,
            outcomes,
            jobs: HashMap::new(),
            progress: ProgressTracker::new(),
            host,
            next_job: 0,
        })
    }

    /// Enqueue a job for `surface`, superseding the job it is waiting for
    ///
    /// The superseded job stays queued or running; only its outcome is ignored.
    /// # Failures
    /// - `QueueFull` if the queue is bounded and full, the surface keeps its current job
    pub fn dispatch(
        &mut self,
        surface: &mut TessellatedSurface<T>,
        payload: TessellationPayload<T>,
    ) -> TessResult<JobHandle> {
        let handle = JobHandle {
            id: JobId(self.next_job),
            owner: surface.id(),
        };
        self.pool.submit(QueuedJob {
            id: handle.id,
            owner: handle.owner,
            payload,
        })?;
        self.next_job += 1;

        self.jobs.insert(
            handle.id,
            JobRecord {
                owner: handle.owner,
                status: JobStatus::Dispatched,
            },
        );
        if let Some(previous) = surface.replace_job(handle) {
            self.discard(previous.id);
        }
        log::debug!("dispatched {} for {}", handle.id, handle.owner);

        if self.progress.begin() {
            self.host.tessellation_progress(true);
        }
        Ok(handle)
    }

    /// Mark a job as discarded, its outcome will have no effect
    pub fn discard(&mut self, job: JobId) {
        if let Some(record) = self.jobs.get_mut(&job) {
            if record.status == JobStatus::Dispatched {
                log::debug!("discarding {} of {}", job, record.owner);
            }
            record.status = JobStatus::Discarded;
        }
    }

    /// Status of a job that has not been settled yet
    pub fn job_status(&self, job: JobId) -> Option<JobStatus> {
        self.jobs.get(&job).map(|r| r.status)
    }

    /// Take the next outcome without blocking
    pub fn try_next_outcome(&self) -> TessResult<Option<JobOutcome<T>>> {
        match self.outcomes.try_recv() {
            Ok(outcome) => Ok(Some(outcome)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(TessError::Disconnected),
        }
    }

    /// Wait up to `timeout` for the next outcome
    pub fn next_outcome_timeout(&self, timeout: Duration) -> TessResult<Option<JobOutcome<T>>> {
        match self.outcomes.recv_timeout(timeout) {
            Ok(outcome) => Ok(Some(outcome)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Err(TessError::Disconnected),
        }
    }

    /// Apply an outcome to the surface that requested it
    ///
    /// `surface` is the owner of the outcome, or `None` if it no longer exists.
    /// Outcomes of discarded jobs, and of jobs whose surface is gone, are dropped
    /// without any effect besides counting the job as settled.
    pub fn settle(
        &mut self,
        outcome: JobOutcome<T>,
        surface: Option<&mut TessellatedSurface<T>>,
    ) -> Option<SurfaceEvent> {
        let Some(record) = self.jobs.remove(&outcome.job) else {
            log::warn!("ignoring outcome of unknown {}", outcome.job);
            return None;
        };

        let event = match surface {
            Some(surface)
                if record.status == JobStatus::Dispatched
                    && surface.id() == record.owner
                    && surface.is_current(outcome.job) =>
            {
                Some(self.apply(surface, outcome))
            }
            _ => {
                log::debug!(
                    "dropping outcome of discarded {} for {}",
                    outcome.job,
                    record.owner
                );
                None
            }
        };

        if self.progress.finish() {
            self.host.tessellation_progress(false);
        }
        event
    }

    fn apply(
        &self,
        surface: &mut TessellatedSurface<T>,
        outcome: JobOutcome<T>,
    ) -> SurfaceEvent {
        let JobOutcome { job, owner, result } = outcome;
        match result {
            Ok(mesh) => {
                log::debug!(
                    "{} finished {} with {} triangles",
                    job,
                    owner,
                    mesh.triangle_count()
                );
                surface.complete(job, mesh);
                self.host.mesh_replaced(owner);
                SurfaceEvent::MeshReplaced {
                    surface: owner,
                    job,
                }
            }
            Err(error) => {
                log::warn!("{} failed for {}: {}", job, owner, error);
                surface.fail(job);
                SurfaceEvent::Failed {
                    surface: owner,
                    job,
                    error,
                }
            }
        }
    }

    /// Number of dispatched jobs that are not settled yet, discarded ones included
    pub fn outstanding(&self) -> usize {
        self.progress.outstanding()
    }

    pub fn is_idle(&self) -> bool {
        self.progress.is_idle()
    }

    /// Number of jobs waiting for a worker
    pub fn pending(&self) -> usize {
        self.pool.pending()
    }

    pub fn num_workers(&self) -> usize {
        self.pool.num_workers()
    }
}

/// Tessellate one job on a worker thread
fn run_job<T: FloatingPoint>(tessellator: &dyn Tessellator<T>, job: QueuedJob<T>) -> JobOutcome<T> {
    log::trace!("tessellating {} for {}", job.id, job.owner);
    let result = catch_unwind(AssertUnwindSafe(|| tessellator.tessellate(&job.payload)))
        .unwrap_or_else(|panic| {
            let message = panic
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| panic.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            Err(anyhow::anyhow!("tessellator panicked: {}", message))
        })
        .and_then(|tess| tess.try_into_mesh())
        .map_err(TessError::TessellationFailure);

    JobOutcome {
        job: job.id,
        owner: job.owner,
        result,
    }
}
