//! Per-worker preemptive service loop.
//!
//! A worker owns the jobs assigned to it (in arrival order) and a private
//! run queue ranked by service rank: `remaining + arrival`, ties to the
//! smaller id. The loop advances the clock from one arrival boundary to
//! the next instead of tick by tick. Between two arrivals the queue order
//! can only change through the job being served, so at most one job is
//! partially serviced per boundary and everything else is exact
//! extraction arithmetic.
//!
//! # Algorithm
//!
//! 1. Take the next assigned job, jump the clock to its arrival, push it
//!    on the run queue.
//! 2. While the clock has not reached the next arrival: a queue-front job
//!    that would finish strictly before that boundary is popped and
//!    finalized; otherwise the front job absorbs exactly the service that
//!    fits, the root is re-sifted, and the clock lands on the boundary.
//! 3. After the last arrival, drain the queue, finalizing jobs in rank
//!    order.
//!
//! A job whose remaining service hits zero exactly on a boundary keeps its
//! queue slot and is finalized by extraction on a later pass; it adds
//! nothing to the clock then, so its recorded completion is the instant it
//! actually finished.
//!
//! # Complexity
//! O(k log k) for k assigned jobs: each job is pushed and popped once, and
//! each arrival boundary costs at most one extra sift.
//!
//! # Reference
//! Schrage (1968), "A Proof of the Optimality of the Shortest Remaining
//! Processing Time Discipline"

use crate::heap::{Heap, HeapOrder};
use crate::models::{Job, Tick};

/// Append-only arena of every job handed to the dispatcher, in insertion
/// order. Workers and heaps refer to jobs by index into this pool, so job
/// state has a single owner no matter how many queues rank it.
#[derive(Debug, Default)]
pub(crate) struct JobPool(pub(crate) Vec<Job>);

impl JobPool {
    /// Appends a job, returning its pool index.
    pub(crate) fn push(&mut self, job: Job) -> usize {
        self.0.push(job);
        self.0.len() - 1
    }
}

/// Run-queue discipline: lower service rank first, ties to the smaller id.
impl HeapOrder for JobPool {
    type Element = usize;

    fn precedes(&self, lhs: &usize, rhs: &usize) -> bool {
        let (a, b) = (&self.0[*lhs], &self.0[*rhs]);
        (a.service_rank(), a.id) < (b.service_rank(), b.id)
    }
}

/// A single serving context: the jobs assigned to it and the run queue
/// that decides which of them holds the clock.
#[derive(Debug)]
pub struct Worker {
    /// Pool indices in assignment order. Non-decreasing arrival by the
    /// dispatcher's intake contract.
    assigned: Vec<usize>,
    /// Jobs that have arrived but not yet been finalized.
    run_queue: Heap<JobPool>,
    /// Greedy serial-finish estimate used for placement only; the exact
    /// completion times computed by `process` generally differ.
    committed_load: Tick,
}

impl Worker {
    pub(crate) fn new() -> Self {
        Self {
            assigned: Vec::new(),
            run_queue: Heap::new(),
            committed_load: 0,
        }
    }

    /// Whether no job has been assigned yet.
    pub(crate) fn is_idle(&self) -> bool {
        self.assigned.is_empty()
    }

    /// Committed load under the greedy placement estimate.
    #[inline]
    pub fn committed_load(&self) -> Tick {
        self.committed_load
    }

    /// Number of jobs assigned to this worker.
    pub fn assigned_count(&self) -> usize {
        self.assigned.len()
    }

    /// Records an assignment: the pool job at `index` joins this worker
    /// and bumps the committed load past its arrival.
    pub(crate) fn assign(&mut self, index: usize, job: &Job) {
        self.assigned.push(index);
        self.committed_load = self.committed_load.max(job.arrival) + job.size;
    }

    /// Runs the service loop, finalizing every assigned job in `pool`.
    pub(crate) fn process(&mut self, pool: &mut JobPool) {
        let mut time: Tick = 0;

        for i in 0..self.assigned.len() {
            let current = self.assigned[i];
            time = pool.0[current].arrival;
            self.run_queue.push(pool, current);

            let successor = match self.assigned.get(i + 1) {
                Some(&next) => next,
                None => {
                    // Final arrival: drain the queue in rank order.
                    while let Ok(index) = self.run_queue.pop(pool) {
                        let job = &mut pool.0[index];
                        time += job.remaining;
                        job.remaining = 0;
                        job.completion = Some(time);
                    }
                    return;
                }
            };

            let boundary = pool.0[successor].arrival;
            while time != boundary {
                let front = match self.run_queue.peek() {
                    Some(&index) => index,
                    // Queue ran dry before the next arrival; the outer
                    // loop jumps the clock forward.
                    None => break,
                };

                if time + pool.0[front].remaining < boundary {
                    let index = self
                        .run_queue
                        .pop(pool)
                        .expect("run queue is non-empty after peek");
                    let job = &mut pool.0[index];
                    time += job.remaining;
                    job.remaining = 0;
                    job.completion = Some(time);
                } else {
                    // Still running when the successor arrives (or done
                    // exactly then): absorb the service that fits and
                    // keep the queue slot.
                    pool.0[front].remaining -= boundary - time;
                    self.run_queue.sift_down(pool, 0);
                    time = boundary;
                }
            }
        }
    }
}
