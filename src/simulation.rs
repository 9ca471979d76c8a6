//! Simulation driver.
//!
//! # Algorithm
//!
//! For each requested discipline:
//! 1. Take a fresh snapshot of the canonical process set.
//! 2. Run the discipline on the snapshot.
//! 3. Merge finish times back into the canonical set.
//! 4. Compute KPIs from the run's own records.
//!
//! Every run returns its own [`SimulationResult`], so reporting one
//! discipline never depends on another's state.

use serde::{Deserialize, Serialize};

use crate::loader::Workload;
use crate::models::{GanttChart, Process, ProcessSet};
use crate::scheduler::{Algorithm, ScheduleKpi, SchedulingAlgorithm};

/// Outcome of simulating one discipline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Discipline that produced this result.
    pub algorithm: Algorithm,
    /// Execution trace.
    pub gantt: GanttChart,
    /// Process records with finish times, in id order.
    pub processes: Vec<Process>,
    /// Derived metrics.
    pub kpi: ScheduleKpi,
}

/// Runs disciplines against a canonical process set.
///
/// # Example
///
/// ```
/// use cpu_sched_sim::models::ProcessSet;
/// use cpu_sched_sim::scheduler::Algorithm;
/// use cpu_sched_sim::simulation::Simulator;
///
/// let processes = ProcessSet::from_records([(0, 5), (1, 3), (2, 8)]);
/// let mut simulator = Simulator::new(processes, 4);
///
/// let fcfs = simulator.run(Algorithm::Fcfs);
/// assert_eq!(fcfs.kpi.makespan, 16);
///
/// let results = simulator.run_all();
/// assert_eq!(results.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Simulator {
    processes: ProcessSet,
    quantum: i64,
}

impl Simulator {
    /// Creates a simulator over `processes` with the Round-Robin quantum.
    pub fn new(processes: ProcessSet, quantum: i64) -> Self {
        Self { processes, quantum }
    }

    /// Creates a simulator from a loaded workload.
    pub fn from_workload(workload: &Workload) -> Self {
        Self::new(workload.process_set(), workload.quantum)
    }

    /// Canonical process set (finish times from the most recent run).
    pub fn processes(&self) -> &ProcessSet {
        &self.processes
    }

    /// Configured Round-Robin quantum.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }

    /// Runs one discipline: snapshot, run, merge, measure.
    pub fn run(&mut self, algorithm: Algorithm) -> SimulationResult {
        log::debug!(
            "running {algorithm} over {} processes",
            self.processes.len()
        );

        let run = algorithm.run(self.processes.snapshot());
        self.processes.merge_finish_times(&run.processes);
        let kpi = ScheduleKpi::calculate(&run.processes);

        log::debug!(
            "{algorithm} finished: makespan {}, {} Gantt entries, avg wait {:.2}",
            kpi.makespan,
            run.gantt.len(),
            kpi.avg_waiting_time
        );

        SimulationResult {
            algorithm,
            gantt: run.gantt,
            processes: run.processes,
            kpi,
        }
    }

    /// Runs FCFS, SRT and RR(quantum), in that order.
    pub fn run_all(&mut self) -> Vec<SimulationResult> {
        Algorithm::all(self.quantum)
            .into_iter()
            .map(|algorithm| self.run(algorithm))
            .collect()
    }
}
