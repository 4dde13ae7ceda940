//! Random job stream generation.
//!
//! Produces job streams that satisfy the dispatcher's intake contract by
//! construction: ids are unique, sizes are positive, and arrivals are
//! non-decreasing. Deterministic under a seeded RNG, which is how the
//! simulation tests and benchmark harnesses use it.

use rand::Rng;

use crate::models::{Job, Tick};

/// Parameters for generating a job stream.
///
/// # Example
///
/// ```
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
/// use u_simsched::workload::Workload;
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let jobs = Workload::new(50).with_size_range(1, 20).generate(&mut rng);
/// assert_eq!(jobs.len(), 50);
/// ```
#[derive(Debug, Clone)]
pub struct Workload {
    /// Number of jobs to generate.
    pub job_count: usize,
    /// Smallest possible job size (clamped to at least 1).
    pub min_size: Tick,
    /// Largest possible job size.
    pub max_size: Tick,
    /// Largest gap between consecutive arrivals (0 = simultaneous).
    pub max_gap: Tick,
    /// Arrival time of the first job.
    pub first_arrival: Tick,
}

impl Default for Workload {
    fn default() -> Self {
        Self {
            job_count: 100,
            min_size: 1,
            max_size: 50,
            max_gap: 10,
            first_arrival: 0,
        }
    }
}

impl Workload {
    /// Creates a workload of `job_count` jobs with default ranges.
    pub fn new(job_count: usize) -> Self {
        Self {
            job_count,
            ..Self::default()
        }
    }

    /// Sets the size range. Zero bounds are clamped so sizes stay positive.
    pub fn with_size_range(mut self, min_size: Tick, max_size: Tick) -> Self {
        self.min_size = min_size.max(1);
        self.max_size = max_size.max(self.min_size);
        self
    }

    /// Sets the largest gap between consecutive arrivals.
    pub fn with_max_gap(mut self, max_gap: Tick) -> Self {
        self.max_gap = max_gap;
        self
    }

    /// Sets the arrival time of the first job.
    pub fn with_first_arrival(mut self, first_arrival: Tick) -> Self {
        self.first_arrival = first_arrival;
        self
    }

    /// Generates the stream: ids `1..=job_count`, non-decreasing arrivals,
    /// sizes drawn uniformly from the configured range.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Job> {
        let mut arrival = self.first_arrival;
        (1..=self.job_count as u64)
            .map(|id| {
                let size = rng.random_range(self.min_size..=self.max_size);
                let job = Job::new(id, size, arrival);
                arrival += rng.random_range(0..=self.max_gap);
                job
            })
            .collect()
    }
}
