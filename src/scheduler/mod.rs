//! CPU scheduling disciplines and KPI evaluation.
//!
//! Each discipline is a pure function of an initial process snapshot
//! (and the quantum, for Round-Robin). A run consumes a freshly reset
//! `Vec<Process>` and returns the same records with finish times set,
//! together with the Gantt chart it produced.
//!
//! # Disciplines
//!
//! | Discipline | Preemptive | Gantt granularity |
//! |------------|-----------|-------------------|
//! | FCFS | no | one entry per process |
//! | SRT | every tick | one entry per time unit |
//! | RR | at quantum expiry | one entry per dispatch |
//!
//! # KPI
//!
//! `ScheduleKpi` derives waiting time, turnaround time, averages and
//! CPU utilization from the finish times of a completed run.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod arrivals;
mod fcfs;
mod kpi;
mod round_robin;
mod srt;

pub use fcfs::Fcfs;
pub use kpi::{ProcessMetrics, ScheduleKpi};
pub use round_robin::RoundRobin;
pub use srt::Srt;

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

use crate::models::{GanttChart, Process};

/// Outcome of one algorithm run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRun {
    /// Execution trace.
    pub gantt: GanttChart,
    /// Run-local process records in id order, all complete.
    pub processes: Vec<Process>,
}

/// A CPU scheduling discipline.
///
/// Implementations receive an exclusive, freshly reset snapshot and must
/// run every process to completion.
pub trait SchedulingAlgorithm: Send + Sync + Debug {
    /// Short name (e.g., "FCFS", "RR").
    fn name(&self) -> &'static str;

    /// Runs the discipline over `processes` until all complete.
    fn run(&self, processes: Vec<Process>) -> ScheduleRun;

    /// Long name.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Selectable scheduling discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Preemptive Shortest-Remaining-Time.
    Srt,
    /// Round-Robin with a fixed quantum.
    RoundRobin {
        /// Maximum slice per dispatch.
        quantum: i64,
    },
}

impl Algorithm {
    /// Round-Robin with the given quantum, clamped to at least 1 the
    /// same way [`RoundRobin::new`] does.
    pub fn round_robin(quantum: i64) -> Self {
        Self::RoundRobin {
            quantum: RoundRobin::new(quantum).quantum(),
        }
    }

    /// The standard FCFS, SRT, RR(quantum) line-up.
    pub fn all(quantum: i64) -> [Algorithm; 3] {
        [Self::Fcfs, Self::Srt, Self::round_robin(quantum)]
    }

    /// Whether the discipline can interrupt a running process.
    pub fn is_preemptive(&self) -> bool {
        !matches!(self, Self::Fcfs)
    }

    /// Effective quantum, for Round-Robin only.
    pub fn quantum(&self) -> Option<i64> {
        match self {
            Self::RoundRobin { quantum } => Some(RoundRobin::new(*quantum).quantum()),
            _ => None,
        }
    }
}

impl SchedulingAlgorithm for Algorithm {
    fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => Fcfs.name(),
            Self::Srt => Srt.name(),
            Self::RoundRobin { quantum } => RoundRobin::new(*quantum).name(),
        }
    }

    fn run(&self, processes: Vec<Process>) -> ScheduleRun {
        match self {
            Self::Fcfs => Fcfs.run(processes),
            Self::Srt => Srt.run(processes),
            Self::RoundRobin { quantum } => RoundRobin::new(*quantum).run(processes),
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Self::Fcfs => Fcfs.description(),
            Self::Srt => Srt.description(),
            Self::RoundRobin { quantum } => RoundRobin::new(*quantum).description(),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundRobin { quantum } => {
                write!(f, "RR (quantum {})", RoundRobin::new(*quantum).quantum())
            }
            other => f.write_str(other.name()),
        }
    }
}
