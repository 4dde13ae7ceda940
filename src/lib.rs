//! Deterministic simulation of preemptive multi-worker scheduling.
//!
//! Jobs arrive in time order and are placed on the least-loaded worker of
//! a fixed pool; each worker then serves its assignments under a
//! preemptive discipline ranked by remaining service plus arrival time.
//! The result is an exact completion time for every job, reproducible
//! across runs for identical inputs.
//!
//! # Modules
//!
//! - **`heap`**: comparator-driven binary min-heap shared by every
//!   priority queue in the crate (`Heap`, `HeapOrder`)
//! - **`models`**: domain types — `Job`, `CompletionReport`
//! - **`scheduler`**: the engine — `Dispatcher`, `Worker`, `SimulationKpi`
//! - **`validation`**: job-stream integrity checks (duplicate IDs, zero
//!   sizes, arrival order)
//! - **`workload`**: seeded random stream generation for experiments
//!
//! # Architecture
//!
//! Placement and processing are two separate tiers. The dispatcher ranks
//! workers by a cheap committed-load estimate maintained online; the exact
//! completion times come afterwards from each worker's arrival-boundary
//! service loop. The estimate is intentionally never corrected from
//! simulation results, so adding a job stays O(log w) regardless of how
//! much history the pool carries.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Harchol-Balter (2013), "Performance Modeling and Design of Computer Systems"
//! - Conway, Maxwell & Miller (1967), "Theory of Scheduling"

pub mod heap;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;
