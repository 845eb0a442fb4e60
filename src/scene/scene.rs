use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::{
    error::{TessError, TessResult},
    misc::FloatingPoint,
    payload::TessellationPayload,
    scheduler::{
        JobHandle, JobId, JobOutcome, JobStatus, SchedulerConfig, SurfaceEvent, SurfaceId,
        TessellationScheduler,
    },
    surface::{SurfaceDefinition, TessellatedSurface},
    tessellation::Tessellator,
};

use super::SceneHost;

/// Owner of the trimmed surfaces and the only writer of their meshes
///
/// Every definition change dispatches a tessellation job; results are applied
/// when the owner calls [`Scene::process_completed`] or [`Scene::wait_for_completion`].
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use std::time::Duration;
/// use nalgebra::Point3;
/// use trimtess::prelude::*;
///
/// let tessellator = |payload: &TessellationPayload<f64>| {
///     let points = payload.control_points.clone();
///     let faces = vec![[0, 1, 5], [0, 5, 4]];
///     Ok::<_, anyhow::Error>(SurfaceTessellation::new(points, vec![], faces, vec![]))
/// };
/// let mut scene = Scene::new(
///     &SchedulerConfig::default().with_num_workers(1),
///     Arc::new(tessellator),
///     Arc::new(NoopHost),
/// )
/// .unwrap();
///
/// let grid: Vec<Point3<f64>> = (0..12)
///     .map(|i| Point3::new((i % 4) as f64, (i / 4) as f64, 0.))
///     .collect();
/// let id = scene.insert(SurfaceDefinition::new(4, 3, Arc::new(grid))).unwrap();
/// assert!(scene.surface(id).unwrap().mesh().unwrap().is_coarse());
///
/// scene.wait_for_completion(Duration::from_secs(5)).unwrap();
/// assert!(!scene.surface(id).unwrap().mesh().unwrap().is_coarse());
/// ```
pub struct Scene<T: FloatingPoint> {
    surfaces: HashMap<SurfaceId, TessellatedSurface<T>>,
    scheduler: TessellationScheduler<T>,
    next_surface: u64,
}

impl<T: FloatingPoint> Scene<T> {
    pub fn new(
        config: &SchedulerConfig,
        tessellator: Arc<dyn Tessellator<T>>,
        host: Arc<dyn SceneHost>,
    ) -> TessResult<Self> {
        Ok(Self {
            surfaces: HashMap::new(),
            scheduler: TessellationScheduler::new(config, tessellator, host)?,
            next_surface: 0,
        })
    }

    /// Add a surface: it gets a coarse mesh right away and a tessellation job
    /// # Failures
    /// - `InvalidDimensions` if the control grid is smaller than 2x2
    /// - `MalformedCurve` if a trimming curve is malformed
    /// - `QueueFull` if the worker queue is bounded and full
    ///
    /// Nothing is added on failure.
    pub fn insert(&mut self, definition: SurfaceDefinition<T>) -> TessResult<SurfaceId> {
        let id = SurfaceId(self.next_surface);
        let payload = TessellationPayload::try_new(&definition)?;
        let mut surface = TessellatedSurface::new(id, definition);
        surface.ensure_coarse_mesh()?;
        self.scheduler.dispatch(&mut surface, payload)?;

        self.next_surface += 1;
        self.surfaces.insert(id, surface);
        Ok(id)
    }

    /// Replace the definition of a surface and dispatch a job for it
    ///
    /// A job still pending for the surface is discarded. If the new definition
    /// is rejected the surface is left exactly as it was.
    pub fn update(
        &mut self,
        id: SurfaceId,
        definition: SurfaceDefinition<T>,
    ) -> TessResult<JobHandle> {
        let surface = self
            .surfaces
            .get_mut(&id)
            .ok_or(TessError::UnknownSurface(id))?;
        let payload = TessellationPayload::try_new(&definition)?;

        let old_definition = surface.definition().clone();
        surface.set_definition(definition);
        if let Err(e) = surface.ensure_coarse_mesh() {
            surface.set_definition(old_definition);
            return Err(e);
        }
        match self.scheduler.dispatch(surface, payload) {
            Ok(handle) => Ok(handle),
            Err(e) => {
                surface.set_definition(old_definition);
                Err(e)
            }
        }
    }

    /// Change one or more fields of a surface definition, then [`Scene::update`] it
    pub fn modify<F>(&mut self, id: SurfaceId, f: F) -> TessResult<JobHandle>
    where
        F: FnOnce(&mut SurfaceDefinition<T>),
    {
        let mut definition = self
            .surfaces
            .get(&id)
            .ok_or(TessError::UnknownSurface(id))?
            .definition()
            .clone();
        f(&mut definition);
        self.update(id, definition)
    }

    /// Remove a surface, a job still pending for it is discarded
    pub fn remove(&mut self, id: SurfaceId) -> Option<TessellatedSurface<T>> {
        let mut surface = self.surfaces.remove(&id)?;
        if let Some(job) = surface.take_current_job() {
            self.scheduler.discard(job.id);
        }
        Some(surface)
    }

    pub fn surface(&self, id: SurfaceId) -> Option<&TessellatedSurface<T>> {
        self.surfaces.get(&id)
    }

    pub fn surfaces(&self) -> impl Iterator<Item = &TessellatedSurface<T>> {
        self.surfaces.values()
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    pub fn scheduler(&self) -> &TessellationScheduler<T> {
        &self.scheduler
    }

    pub fn job_status(&self, job: JobId) -> Option<JobStatus> {
        self.scheduler.job_status(job)
    }

    /// `true` while any dispatched job, discarded or not, is unsettled
    pub fn is_tessellating(&self) -> bool {
        !self.scheduler.is_idle()
    }

    /// Settle every outcome that has arrived so far, without blocking
    pub fn process_completed(&mut self) -> TessResult<Vec<SurfaceEvent>> {
        let mut events = vec![];
        while let Some(outcome) = self.scheduler.try_next_outcome()? {
            events.extend(self.settle(outcome));
        }
        Ok(events)
    }

    /// Settle outcomes until no job is outstanding or `timeout` has passed
    /// Check [`Scene::is_tessellating`] to tell both apart.
    pub fn wait_for_completion(&mut self, timeout: Duration) -> TessResult<Vec<SurfaceEvent>> {
        let deadline = Instant::now() + timeout;
        let mut events = vec![];
        while !self.scheduler.is_idle() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                log::debug!(
                    "gave up waiting with {} jobs outstanding",
                    self.scheduler.outstanding()
                );
                break;
            }
            match self.scheduler.next_outcome_timeout(remaining)? {
                Some(outcome) => events.extend(self.settle(outcome)),
                None => break,
            }
        }
        Ok(events)
    }

    fn settle(&mut self, outcome: JobOutcome<T>) -> Option<SurfaceEvent> {
        let surface = self.surfaces.get_mut(&outcome.owner);
        self.scheduler.settle(outcome, surface)
    }
}
