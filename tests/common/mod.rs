#![allow(dead_code)]

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Condvar, Mutex};
use std::time::Duration;

use itertools::iproduct;
use nalgebra::{Point2, Point3};
use trimtess::prelude::*;

/// Density hints that steer [`ScriptedTessellator`]
pub const GATED: i32 = 1;
pub const FAIL: i32 = -1;
pub const GATED_FAIL: i32 = -2;
pub const PANIC: i32 = -3;

pub fn grid(u: usize, v: usize) -> Arc<dyn CoordinateProvider<f64>> {
    Arc::new(
        (0..u * v)
            .map(|k| Point3::new((k % u) as f64, (k / u) as f64, 0.))
            .collect::<Vec<_>>(),
    )
}

pub fn surface(u: usize, v: usize, hint: i32) -> SurfaceDefinition<f64> {
    SurfaceDefinition::new(u, v, grid(u, v))
        .with_orders(2, 2)
        .with_weights(vec![1.; u * v])
        .with_tessellation(hint, hint)
}

pub fn square_contour() -> Contour2D<f64> {
    Contour2D::new(vec![RawTrimCurve::polyline(&[
        Point2::new(0.25, 0.25),
        Point2::new(0.75, 0.25),
        Point2::new(0.75, 0.75),
        Point2::new(0.25, 0.25),
    ])])
}

/// Blocks gated jobs until opened
#[derive(Default)]
pub struct Gate {
    open: Mutex<bool>,
    opened: Condvar,
}

impl Gate {
    pub fn wait(&self) {
        let mut open = self.open.lock().unwrap();
        while !*open {
            open = self.opened.wait(open).unwrap();
        }
    }

    pub fn open(&self) {
        *self.open.lock().unwrap() = true;
        self.opened.notify_all();
    }
}

/// Tessellator whose behaviour is chosen by the payload's u tessellation hint
/// Successful meshes are the control grid lifted to `z = hint`.
pub struct ScriptedTessellator {
    pub gate: Arc<Gate>,
    started: Mutex<Sender<i32>>,
    pub payloads: Mutex<Vec<TessellationPayload<f64>>>,
}

impl ScriptedTessellator {
    pub fn new() -> (Arc<Self>, Receiver<i32>) {
        let (tx, rx) = mpsc::channel();
        let tessellator = Arc::new(Self {
            gate: Arc::new(Gate::default()),
            started: Mutex::new(tx),
            payloads: Mutex::new(vec![]),
        });
        (tessellator, rx)
    }
}

impl Tessellator<f64> for ScriptedTessellator {
    fn tessellate(
        &self,
        payload: &TessellationPayload<f64>,
    ) -> anyhow::Result<SurfaceTessellation<f64>> {
        let hint = payload.u_tessellation;
        self.payloads.lock().unwrap().push(payload.clone());
        let _ = self.started.lock().unwrap().send(hint);

        match hint {
            GATED | GATED_FAIL => self.gate.wait(),
            PANIC => panic!("scripted panic"),
            _ => {}
        }
        anyhow::ensure!(hint != FAIL && hint != GATED_FAIL, "scripted failure");

        let u = payload.u_last_index + 1;
        let v = payload.v_last_index + 1;
        let points = payload
            .control_points
            .iter()
            .map(|p| Point3::new(p.x, p.y, hint as f64))
            .collect();
        let faces = iproduct!(0..v - 1, 0..u - 1)
            .flat_map(|(j, i)| {
                let a = j * u + i;
                [[a, a + 1, a + u + 1], [a, a + u + 1, a + u]]
            })
            .collect();
        Ok(SurfaceTessellation::new(points, vec![], faces, vec![]))
    }
}

/// Host that records every notification
#[derive(Default)]
pub struct RecordingHost {
    pub redraws: Mutex<Vec<SurfaceId>>,
    pub progress: Mutex<Vec<bool>>,
}

impl RecordingHost {
    pub fn redraws(&self) -> Vec<SurfaceId> {
        self.redraws.lock().unwrap().clone()
    }

    pub fn progress(&self) -> Vec<bool> {
        self.progress.lock().unwrap().clone()
    }
}

impl SceneHost for RecordingHost {
    fn mesh_replaced(&self, surface: SurfaceId) {
        self.redraws.lock().unwrap().push(surface);
    }

    fn tessellation_progress(&self, active: bool) {
        self.progress.lock().unwrap().push(active);
    }
}

pub const TIMEOUT: Duration = Duration::from_secs(10);

pub fn scene(
    workers: usize,
    capacity: Option<usize>,
) -> (
    Scene<f64>,
    Arc<ScriptedTessellator>,
    Arc<RecordingHost>,
    Receiver<i32>,
) {
    let (tessellator, started) = ScriptedTessellator::new();
    let host = Arc::new(RecordingHost::default());
    let config = SchedulerConfig::default()
        .with_num_workers(workers)
        .with_queue_capacity(capacity)
        .with_thread_name_prefix(Some("tess-test".to_string()));
    let scene = Scene::new(&config, tessellator.clone(), host.clone()).unwrap();
    (scene, tessellator, host, started)
}

/// Settle outcomes until at least one event was produced
pub fn next_events(scene: &mut Scene<f64>) -> Vec<SurfaceEvent> {
    let deadline = std::time::Instant::now() + TIMEOUT;
    loop {
        let events = scene.process_completed().unwrap();
        if !events.is_empty() {
            return events;
        }
        assert!(
            std::time::Instant::now() < deadline,
            "no tessellation event arrived in time"
        );
        std::thread::sleep(Duration::from_millis(5));
    }
}

pub fn mesh_height(scene: &Scene<f64>, id: SurfaceId) -> Option<f64> {
    let mesh = scene.surface(id)?.mesh()?;
    if mesh.is_coarse() {
        return None;
    }
    mesh.points().first().map(|p| p.z)
}
