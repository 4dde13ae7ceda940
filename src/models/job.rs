//! Job model.
//!
//! A job is the unit of work in the simulation: it arrives at a fixed time,
//! needs a fixed amount of service, and is eventually run to completion by
//! the worker it was assigned to.
//!
//! # Reference
//! Harchol-Balter (2013), "Performance Modeling and Design of Computer
//! Systems", Ch. 29 (scheduling disciplines)

use serde::{Deserialize, Serialize};

/// Unique job identifier.
pub type JobId = u64;

/// Discrete simulation time unit.
pub type Tick = u64;

/// A unit of work to be scheduled.
///
/// Identity (`id`, `size`, `arrival`) is fixed at construction; `remaining`
/// and `completion` are progress state owned by the engine.
///
/// # Time Representation
/// All times are in ticks relative to a simulation epoch (t=0). The consumer
/// defines what a tick means (seconds, slots, frames).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Unique identifier. Also the final report sort key and the
    /// service-rank tie-break.
    pub id: JobId,
    /// Total service time required. Must be positive.
    pub size: Tick,
    /// Time at which the job becomes eligible for service.
    pub arrival: Tick,
    /// Service time not yet delivered. Starts at `size`, hits zero when the
    /// job finishes.
    pub remaining: Tick,
    /// Completion time. Set exactly once, when the job finishes.
    pub completion: Option<Tick>,
}

impl Job {
    /// Creates a new job with `remaining` primed to the full size.
    pub fn new(id: JobId, size: Tick, arrival: Tick) -> Self {
        Self {
            id,
            size,
            arrival,
            remaining: size,
            completion: None,
        }
    }

    /// Service rank: `remaining + arrival`, lower runs first.
    ///
    /// Shrinks as service is delivered, so a long job loses ground to later
    /// short arrivals and the run-queue order stays preemption-aware.
    #[inline]
    pub fn service_rank(&self) -> Tick {
        self.remaining + self.arrival
    }

    /// Whether the job has received all of its service.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.completion.is_some()
    }

    /// Flow time (`completion - arrival`). `None` until the job finishes.
    pub fn flow_time(&self) -> Option<Tick> {
        self.completion.map(|done| done - self.arrival)
    }

    /// Waiting time (`flow - size`): time spent eligible but not in
    /// service. `None` until the job finishes.
    pub fn waiting_time(&self) -> Option<Tick> {
        self.flow_time().map(|flow| flow - self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_primes_remaining() {
        let job = Job::new(1, 5, 3);
        assert_eq!(job.id, 1);
        assert_eq!(job.size, 5);
        assert_eq!(job.arrival, 3);
        assert_eq!(job.remaining, 5);
        assert_eq!(job.completion, None);
        assert!(!job.is_finished());
    }

    #[test]
    fn test_service_rank_tracks_remaining() {
        let mut job = Job::new(1, 10, 4);
        assert_eq!(job.service_rank(), 14);

        job.remaining = 2;
        assert_eq!(job.service_rank(), 6);
    }

    #[test]
    fn test_flow_and_waiting_time() {
        let mut job = Job::new(2, 3, 1);
        assert_eq!(job.flow_time(), None);
        assert_eq!(job.waiting_time(), None);

        job.remaining = 0;
        job.completion = Some(8);
        assert!(job.is_finished());
        assert_eq!(job.flow_time(), Some(7));
        assert_eq!(job.waiting_time(), Some(4));
    }
}
