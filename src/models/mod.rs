//! Simulation domain models.
//!
//! Provides the data types flowing through a simulation: jobs on the way
//! in, completion reports on the way out. Domain-agnostic within
//! scheduling — a "job" maps onto whatever the consumer's unit of work is.
//!
//! # Domain Mappings
//!
//! | u-simsched | Batch Compute | Support Desk | Logistics |
//! |------------|---------------|--------------|-----------|
//! | Job | Task/Container | Ticket | Shipment |
//! | Worker | Node | Agent | Dock |
//! | CompletionReport | Run Log | Resolution Log | Dispatch Log |

mod job;
mod report;

pub use job::{Job, JobId, Tick};
pub use report::CompletionReport;
