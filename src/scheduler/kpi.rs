//! Simulation quality metrics (KPIs).
//!
//! Computes standard scheduling performance indicators from a finished
//! completion report.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan (C_max) | Latest completion time |
//! | Total Flow Time | Sum of completion - arrival |
//! | Avg Flow Time | Mean time from arrival to completion |
//! | Avg Waiting Time | Mean of flow - size |
//! | Max Waiting Time | Largest single wait |
//! | Avg Slowdown | Mean of flow / size |
//!
//! # Reference
//! Harchol-Balter (2013), "Performance Modeling and Design of Computer
//! Systems", Ch. 28: Performance Metrics

use crate::models::{CompletionReport, Tick};

/// Simulation performance indicators.
///
/// All time values are in ticks.
#[derive(Debug, Clone)]
pub struct SimulationKpi {
    /// Makespan: latest completion time (ticks).
    pub makespan: Tick,
    /// Sum of flow times across finished jobs (ticks).
    pub total_flow_time: Tick,
    /// Average flow time: mean(completion - arrival) in ticks.
    pub avg_flow_time: f64,
    /// Average waiting time: mean(flow - size) in ticks.
    pub avg_waiting_time: f64,
    /// Maximum waiting time of any single job (ticks).
    pub max_waiting_time: Tick,
    /// Average slowdown: mean(flow / size).
    pub avg_slowdown: f64,
    /// Number of finished jobs the averages cover.
    pub finished_count: usize,
}

impl SimulationKpi {
    /// Computes KPIs from a completion report.
    ///
    /// Unfinished jobs (possible only for hand-built reports) are left out
    /// of every metric.
    pub fn calculate(report: &CompletionReport) -> Self {
        let mut total_flow: Tick = 0;
        let mut total_waiting: Tick = 0;
        let mut max_waiting: Tick = 0;
        let mut total_slowdown: f64 = 0.0;
        let mut finished: usize = 0;

        for job in &report.jobs {
            let (flow, waiting) = match (job.flow_time(), job.waiting_time()) {
                (Some(flow), Some(waiting)) => (flow, waiting),
                _ => continue,
            };
            finished += 1;
            total_flow += flow;
            total_waiting += waiting;
            max_waiting = max_waiting.max(waiting);
            total_slowdown += flow as f64 / job.size as f64;
        }

        let avg_flow_time = if finished == 0 {
            0.0
        } else {
            total_flow as f64 / finished as f64
        };
        let avg_waiting_time = if finished == 0 {
            0.0
        } else {
            total_waiting as f64 / finished as f64
        };
        let avg_slowdown = if finished == 0 {
            0.0
        } else {
            total_slowdown / finished as f64
        };

        Self {
            makespan: report.makespan(),
            total_flow_time: total_flow,
            avg_flow_time,
            avg_waiting_time,
            max_waiting_time: max_waiting,
            avg_slowdown,
            finished_count: finished,
        }
    }

    /// Whether the run meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_waiting: Tick, max_makespan: Tick) -> bool {
        self.max_waiting_time <= max_waiting && self.makespan <= max_makespan
    }
}
