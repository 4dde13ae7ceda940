//! Least-loaded job dispatch across a fixed worker pool.
//!
//! Jobs are added one at a time, in non-decreasing arrival order, and each
//! goes to the worker with the smallest committed load at that moment. The
//! committed load is a greedy serial-finish estimate (`max(load, arrival)
//! + size`): cheap to maintain online, and deliberately distinct from the
//! exact completion times the service loops compute afterwards. Placement
//! never waits on simulation, and simulation never re-balances placement.
//!
//! # Algorithm
//!
//! 1. Peek the load heap for the least-loaded worker (ties go to the
//!    smaller pool index).
//! 2. Append the job to the arena, assign it to that worker, bump the
//!    worker's committed load.
//! 3. Re-sift the heap root; only its key changed, and only upward.
//! 4. On `simulate`, run each active worker's service loop and collect
//!    every job into an ascending-id report.
//!
//! # Reference
//! Graham (1966), "Bounds for Certain Multiprocessing Anomalies"

use std::error::Error;
use std::fmt;

use crate::heap::{Heap, HeapOrder};
use crate::models::{CompletionReport, Job};

use super::worker::{JobPool, Worker};

/// Fixed pool of workers. The load heap ranks indices into this pool.
#[derive(Debug)]
pub(crate) struct WorkerPool(pub(crate) Vec<Worker>);

/// Placement order: smaller committed load first, ties to the smaller
/// pool index, so placement is deterministic for identical inputs.
impl HeapOrder for WorkerPool {
    type Element = usize;

    fn precedes(&self, lhs: &usize, rhs: &usize) -> bool {
        (self.0[*lhs].committed_load(), *lhs) < (self.0[*rhs].committed_load(), *rhs)
    }
}

/// Error returned when a dispatcher is built with an empty worker pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoWorkersError;

impl fmt::Display for NoWorkersError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a dispatcher needs at least one worker")
    }
}

impl Error for NoWorkersError {}

/// Places arriving jobs on the least-loaded worker, then runs every
/// worker's service loop to produce exact completion times.
///
/// The two phases are strictly ordered by construction: [`Dispatcher::simulate`]
/// consumes the dispatcher, so no job can be added once processing starts
/// and no report can be produced twice.
///
/// # Example
///
/// ```
/// use u_simsched::models::Job;
/// use u_simsched::scheduler::Dispatcher;
///
/// let mut dispatcher = Dispatcher::new(1).expect("worker count is positive");
/// dispatcher.add_job(Job::new(1, 5, 0));
/// dispatcher.add_job(Job::new(2, 3, 1));
///
/// let report = dispatcher.simulate();
/// assert_eq!(report.completion_of(1), Some(5));
/// assert_eq!(report.completion_of(2), Some(8));
/// ```
#[derive(Debug)]
pub struct Dispatcher {
    pool: WorkerPool,
    load_heap: Heap<WorkerPool>,
    jobs: JobPool,
    /// Workers that received at least one job, in first-assignment order.
    /// Only these run a service loop.
    active: Vec<usize>,
}

impl Dispatcher {
    /// Creates a dispatcher over a fixed pool of `worker_count` workers.
    pub fn new(worker_count: usize) -> Result<Self, NoWorkersError> {
        if worker_count == 0 {
            return Err(NoWorkersError);
        }

        let pool = WorkerPool((0..worker_count).map(|_| Worker::new()).collect());
        let mut load_heap = Heap::new();
        for index in 0..worker_count {
            load_heap.push(&pool, index);
        }

        Ok(Self {
            pool,
            load_heap,
            jobs: JobPool::default(),
            active: Vec::new(),
        })
    }

    /// Places `job` on the currently least-loaded worker.
    ///
    /// Jobs must be added in non-decreasing arrival order; within a worker,
    /// assignment order is then arrival order, which the service loop
    /// relies on. The order is not re-checked here (see
    /// [`crate::validation::validate_jobs`] for the caller-side checker).
    /// Progress state on the incoming job is ignored: `remaining` is
    /// re-primed from `size` and any stale completion is cleared.
    pub fn add_job(&mut self, mut job: Job) {
        job.remaining = job.size;
        job.completion = None;

        let chosen = *self
            .load_heap
            .peek()
            .expect("load heap holds every worker; the pool is non-empty by construction");
        if self.pool.0[chosen].is_idle() {
            self.active.push(chosen);
        }

        let index = self.jobs.push(job);
        let job = &self.jobs.0[index];
        self.pool.0[chosen].assign(index, job);

        // Only the root's key changed, and it can only have grown.
        self.load_heap.sift_down(&self.pool, 0);
    }

    /// Read-only view of the worker pool.
    pub fn workers(&self) -> &[Worker] {
        &self.pool.0
    }

    /// Number of workers in the pool.
    pub fn worker_count(&self) -> usize {
        self.pool.0.len()
    }

    /// Number of jobs added so far.
    pub fn job_count(&self) -> usize {
        self.jobs.0.len()
    }

    /// Runs every active worker's service loop and returns the finished
    /// jobs in ascending-id order.
    ///
    /// Workers that never received a job are skipped entirely.
    pub fn simulate(mut self) -> CompletionReport {
        for &index in &self.active {
            self.pool.0[index].process(&mut self.jobs);
        }
        CompletionReport::from_jobs(self.jobs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{JobId, Tick};
    use crate::workload::Workload;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn completions(report: &CompletionReport) -> Vec<(JobId, Tick)> {
        report
            .jobs
            .iter()
            .map(|job| (job.id, job.completion.unwrap()))
            .collect()
    }

    #[test]
    fn test_zero_workers_is_an_error() {
        assert_eq!(Dispatcher::new(0).unwrap_err(), NoWorkersError);
    }

    #[test]
    fn test_new_pool_is_unloaded() {
        let dispatcher = Dispatcher::new(3).unwrap();
        assert_eq!(dispatcher.worker_count(), 3);
        assert_eq!(dispatcher.job_count(), 0);
        assert!(dispatcher.workers().iter().all(|w| w.committed_load() == 0));
    }

    #[test]
    fn test_round_robin_under_equal_loads() {
        // Equal sizes and paired arrivals: loads tie at every step, so the
        // index tie-break alternates workers.
        let mut dispatcher = Dispatcher::new(2).unwrap();
        for (id, arrival) in [(1, 0), (2, 0), (3, 1), (4, 1)] {
            dispatcher.add_job(Job::new(id, 2, arrival));
        }

        assert_eq!(dispatcher.workers()[0].assigned_count(), 2);
        assert_eq!(dispatcher.workers()[1].assigned_count(), 2);

        // Each worker serves {arrival 0, arrival 1} back to back.
        let report = dispatcher.simulate();
        assert_eq!(completions(&report), vec![(1, 2), (2, 2), (3, 4), (4, 4)]);
    }

    #[test]
    fn test_new_job_goes_to_least_loaded_worker() {
        let mut dispatcher = Dispatcher::new(2).unwrap();
        dispatcher.add_job(Job::new(1, 10, 0)); // worker 0, load 10
        dispatcher.add_job(Job::new(2, 1, 0)); // worker 1, load 1
        dispatcher.add_job(Job::new(3, 1, 0)); // worker 1 again, load 2

        assert_eq!(dispatcher.workers()[0].assigned_count(), 1);
        assert_eq!(dispatcher.workers()[1].assigned_count(), 2);
        assert_eq!(dispatcher.workers()[0].committed_load(), 10);
        assert_eq!(dispatcher.workers()[1].committed_load(), 2);
    }

    #[test]
    fn test_arrival_gap_raises_committed_load_floor() {
        let mut dispatcher = Dispatcher::new(1).unwrap();
        dispatcher.add_job(Job::new(1, 2, 0));
        dispatcher.add_job(Job::new(2, 3, 7)); // max(2, 7) + 3 = 10

        assert_eq!(dispatcher.workers()[0].committed_load(), 10);
    }

    #[test]
    fn test_report_is_sorted_by_id_not_insertion() {
        let mut dispatcher = Dispatcher::new(1).unwrap();
        for id in [3, 1, 2] {
            dispatcher.add_job(Job::new(id, 1, 0));
        }

        let report = dispatcher.simulate();
        let ids: Vec<JobId> = report.jobs.iter().map(|job| job.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_stale_progress_state_is_reset_at_intake() {
        let mut job = Job::new(1, 5, 0);
        job.remaining = 1;
        job.completion = Some(99);

        let mut dispatcher = Dispatcher::new(1).unwrap();
        dispatcher.add_job(job);

        let report = dispatcher.simulate();
        assert_eq!(report.completion_of(1), Some(5));
    }

    #[test]
    fn test_empty_simulation() {
        let report = Dispatcher::new(4).unwrap().simulate();
        assert!(report.is_empty());
        assert_eq!(report.makespan(), 0);
    }

    #[test]
    fn test_idle_workers_stay_untouched() {
        let mut dispatcher = Dispatcher::new(3).unwrap();
        dispatcher.add_job(Job::new(1, 4, 0));

        assert_eq!(dispatcher.workers()[1].assigned_count(), 0);
        assert_eq!(dispatcher.workers()[2].assigned_count(), 0);

        let report = dispatcher.simulate();
        assert_eq!(report.completion_of(1), Some(4));
    }

    #[test]
    fn test_generated_stream_completes_consistently() {
        let mut rng = SmallRng::seed_from_u64(42);
        let jobs = Workload::new(200)
            .with_size_range(1, 30)
            .with_max_gap(5)
            .generate(&mut rng);

        let mut dispatcher = Dispatcher::new(4).unwrap();
        for job in jobs {
            dispatcher.add_job(job);
        }
        assert_eq!(dispatcher.job_count(), 200);

        let report = dispatcher.simulate();
        assert!(report.is_complete());
        assert_eq!(report.job_count(), 200);

        // No job finishes before its own serial lower bound, and ids come
        // back sorted.
        for pair in report.jobs.windows(2) {
            assert!(pair[0].id < pair[1].id);
        }
        for job in &report.jobs {
            assert!(job.completion.unwrap() >= job.arrival + job.size);
            assert_eq!(job.remaining, 0);
        }
    }
}
