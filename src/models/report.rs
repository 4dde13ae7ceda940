//! Completion report (solution) model.
//!
//! A completion report is the solution side of a simulation run: the full
//! job set with completion times filled in, held in ascending-id order so
//! consumers can align it with their submission records regardless of how
//! the jobs were spread across workers.

use serde::{Deserialize, Serialize};

use super::job::{Job, JobId, Tick};

/// Final state of a simulation run.
///
/// Produced by the dispatcher after every worker has run its service loop.
/// Jobs are ordered by ascending id, not by completion time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompletionReport {
    /// All jobs, finished, in ascending-id order.
    pub jobs: Vec<Job>,
}

impl CompletionReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a report from finished jobs, sorting them by ascending id.
    pub fn from_jobs(mut jobs: Vec<Job>) -> Self {
        jobs.sort_unstable_by_key(|job| job.id);
        Self { jobs }
    }

    /// Completion time of a given job, if present and finished.
    pub fn completion_of(&self, id: JobId) -> Option<Tick> {
        self.jobs
            .iter()
            .find(|job| job.id == id)
            .and_then(|job| job.completion)
    }

    /// Makespan: latest completion time across all jobs (0 when empty).
    pub fn makespan(&self) -> Tick {
        self.jobs
            .iter()
            .filter_map(|job| job.completion)
            .max()
            .unwrap_or(0)
    }

    /// Completion times in ascending-id order, eliding unfinished jobs.
    pub fn completion_times(&self) -> Vec<Tick> {
        self.jobs.iter().filter_map(|job| job.completion).collect()
    }

    /// Whether every job in the report has finished.
    pub fn is_complete(&self) -> bool {
        self.jobs.iter().all(|job| job.is_finished())
    }

    /// Number of jobs.
    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    /// Whether the report holds no jobs.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}
