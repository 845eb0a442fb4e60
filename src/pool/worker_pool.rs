//! Fixed-size pool of worker threads fed from one FIFO queue
//!
//! Each worker takes the oldest pending job, runs it to completion and only
//! then takes the next one. Submitting never blocks: a bounded queue rejects
//! jobs once it is full.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};

use crate::error::{TessError, TessResult};
use crate::scheduler::SchedulerConfig;

struct PoolShared<J> {
    queue: Mutex<VecDeque<J>>,
    available: Condvar,
    shutdown: AtomicBool,
    capacity: Option<usize>,
}

impl<J> PoolShared<J> {
    /// Block until a job is available, `None` once the pool shuts down
    fn next_job(&self) -> Option<J> {
        let mut queue = self.queue.lock().ok()?;
        loop {
            if self.shutdown.load(Ordering::Acquire) {
                return None;
            }
            if let Some(job) = queue.pop_front() {
                return Some(job);
            }
            queue = self.available.wait(queue).ok()?;
        }
    }
}

/// A pool of worker threads sharing one job queue
pub struct WorkerPool<J> {
    shared: Arc<PoolShared<J>>,
    workers: Vec<JoinHandle<()>>,
}

impl<J> WorkerPool<J>
where
    J: Send + 'static,
{
    /// Spawn `config.num_workers` threads running `worker_fn` for every submitted job
    pub fn new<F>(config: &SchedulerConfig, worker_fn: F) -> TessResult<Self>
    where
        F: Fn(J) + Send + Sync + 'static,
    {
        let shared = Arc::new(PoolShared {
            queue: Mutex::new(VecDeque::new()),
            available: Condvar::new(),
            shutdown: AtomicBool::new(false),
            capacity: config.queue_capacity,
        });
        let worker_fn: Arc<dyn Fn(J) + Send + Sync> = Arc::new(worker_fn);

        let mut pool = Self {
            shared,
            workers: Vec::with_capacity(config.num_workers),
        };
        for worker_id in 0..config.num_workers.max(1) {
            let shared = Arc::clone(&pool.shared);
            let worker_fn = Arc::clone(&worker_fn);

            let mut builder = thread::Builder::new();
            if let Some(prefix) = &config.thread_name_prefix {
                builder = builder.name(format!("{}-{}", prefix, worker_id));
            }

            // dropping `pool` on error stops the workers spawned so far
            let handle = builder
                .spawn(move || Self::worker_loop(worker_id, shared, worker_fn))
                .map_err(TessError::WorkerSpawn)?;
            pool.workers.push(handle);
        }

        Ok(pool)
    }

    fn worker_loop(
        worker_id: usize,
        shared: Arc<PoolShared<J>>,
        worker_fn: Arc<dyn Fn(J) + Send + Sync>,
    ) {
        log::trace!("tessellation worker {} started", worker_id);
        while let Some(job) = shared.next_job() {
            worker_fn(job);
        }
        log::trace!("tessellation worker {} stopped", worker_id);
    }

    /// Enqueue a job without blocking
    /// # Failures
    /// - `QueueFull` if the queue is bounded and at capacity
    /// - `Disconnected` if the pool is shutting down
    pub fn submit(&self, job: J) -> TessResult<()> {
        let mut queue = self
            .shared
            .queue
            .lock()
            .map_err(|_| TessError::Disconnected)?;
        if self.shared.shutdown.load(Ordering::Acquire) {
            return Err(TessError::Disconnected);
        }
        if let Some(capacity) = self.shared.capacity {
            if queue.len() >= capacity {
                return Err(TessError::QueueFull { capacity });
            }
        }
        queue.push_back(job);
        drop(queue);
        self.shared.available.notify_one();
        Ok(())
    }

    /// Number of jobs waiting for a worker
    pub fn pending(&self) -> usize {
        self.shared.queue.lock().map(|q| q.len()).unwrap_or(0)
    }

    pub fn num_workers(&self) -> usize {
        self.workers.len()
    }
}

impl<J> Drop for WorkerPool<J> {
    fn drop(&mut self) {
        // flip the flag under the lock so no worker misses the wakeup
        match self.shared.queue.lock() {
            Ok(mut queue) => {
                self.shared.shutdown.store(true, Ordering::Release);
                queue.clear();
            }
            Err(_) => self.shared.shutdown.store(true, Ordering::Release),
        }
        self.shared.available.notify_all();

        while let Some(handle) = self.workers.pop() {
            let _ = handle.join();
        }
    }
}
