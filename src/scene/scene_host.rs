use crate::scheduler::SurfaceId;

/// The render host that reacts to tessellation
///
/// Both notifications are delivered on the thread that drives the [`Scene`](super::Scene).
pub trait SceneHost: Send + Sync {
    /// A surface got a new final mesh: mark its dependents dirty and request a redraw
    fn mesh_replaced(&self, surface: SurfaceId);

    /// Tessellation started (`true`) or the last outstanding job settled (`false`)
    fn tessellation_progress(&self, active: bool);
}

/// A host that ignores every notification
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHost;

impl SceneHost for NoopHost {
    fn mesh_replaced(&self, _surface: SurfaceId) {}

    fn tessellation_progress(&self, _active: bool) {}
}
