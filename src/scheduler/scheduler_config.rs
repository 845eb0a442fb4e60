/// Options for the tessellation worker pool
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SchedulerConfig {
    /// Number of worker threads, each running one job at a time
    pub num_workers: usize,
    /// Maximum number of jobs waiting for a worker, `None` for unbounded
    pub queue_capacity: Option<usize>,
    /// Worker threads are named "{prefix}-{id}"
    pub thread_name_prefix: Option<String>,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            num_workers: std::thread::available_parallelism()
                .map(|n| n.get().min(4))
                .unwrap_or(2),
            queue_capacity: None,
            thread_name_prefix: Some("tessellation".to_string()),
        }
    }
}

impl SchedulerConfig {
    pub fn with_num_workers(mut self, num_workers: usize) -> Self {
        self.num_workers = num_workers;
        self
    }

    pub fn with_queue_capacity(mut self, queue_capacity: Option<usize>) -> Self {
        self.queue_capacity = queue_capacity;
        self
    }

    pub fn with_thread_name_prefix(mut self, prefix: Option<String>) -> Self {
        self.thread_name_prefix = prefix;
        self
    }
}
