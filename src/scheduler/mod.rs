//! Dispatching, per-worker simulation, and KPI evaluation.
//!
//! Provides the two-phase simulation engine and quality metrics for its
//! output.
//!
//! # Phases
//!
//! `Dispatcher` places each arriving job on the least-loaded worker under a
//! greedy serial-finish estimate. `Worker` then serves its assignments with
//! a preemptive discipline ranked by remaining service plus arrival time,
//! producing exact completion times. Placement is decided online and never
//! revised by simulation results.
//!
//! # KPI
//!
//! `SimulationKpi` computes standard metrics from the completion report:
//! makespan, flow time, waiting time, and slowdown.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 5
//! - Harchol-Balter (2013), "Performance Modeling and Design of Computer
//!   Systems", Ch. 28-31

mod dispatcher;
mod kpi;
mod worker;

pub use dispatcher::{Dispatcher, NoWorkersError};
pub use kpi::SimulationKpi;
pub use worker::Worker;
