//! Schedule quality metrics (KPIs).
//!
//! Computes standard CPU-scheduling performance indicators from the
//! process records of a completed run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | finish - arrival |
//! | Waiting | turnaround - burst |
//! | Makespan | Latest finish time |
//! | CPU Utilization | 100 * sum(burst) / makespan |
//! | Idle Time | makespan - sum(burst) |
//! | Throughput | completed / makespan |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::Process;

/// Timing metrics of one completed process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Process id.
    pub process_id: usize,
    /// Arrival time.
    pub arrival_time: i64,
    /// Burst time.
    pub burst_time: i64,
    /// Completion time.
    pub finish_time: i64,
    /// finish - arrival.
    pub turnaround_time: i64,
    /// turnaround - burst.
    pub waiting_time: i64,
}

impl ProcessMetrics {
    /// Metrics for a completed process; `None` if it has not finished.
    pub fn from_process(process: &Process) -> Option<Self> {
        let finish_time = process.finish_time?;
        let turnaround_time = finish_time - process.arrival_time;
        Some(Self {
            process_id: process.id,
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            finish_time,
            turnaround_time,
            waiting_time: turnaround_time - process.burst_time,
        })
    }
}

/// Run-level performance indicators.
///
/// Computed fresh for every run; nothing carries over between algorithms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Per-process metrics, in id order, completed processes only.
    pub processes: Vec<ProcessMetrics>,
    /// Sum of waiting times.
    pub total_waiting_time: i64,
    /// Sum of turnaround times.
    pub total_turnaround_time: i64,
    /// Sum of burst times (CPU busy time).
    pub total_burst_time: i64,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Percentage of the makespan the CPU was busy (0.0..=100.0).
    pub cpu_utilization: f64,
    /// Latest finish time.
    pub makespan: i64,
    /// Idle time before the makespan.
    pub idle_time: i64,
    /// Completed processes per time unit.
    pub throughput: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from the process records of a run.
    ///
    /// Processes without a finish time are not counted.
    pub fn calculate(processes: &[Process]) -> Self {
        let metrics: Vec<ProcessMetrics> =
            processes.iter().filter_map(ProcessMetrics::from_process).collect();

        let total_waiting_time: i64 = metrics.iter().map(|m| m.waiting_time).sum();
        let total_turnaround_time: i64 = metrics.iter().map(|m| m.turnaround_time).sum();
        let total_burst_time: i64 = metrics.iter().map(|m| m.burst_time).sum();
        let makespan = metrics.iter().map(|m| m.finish_time).max().unwrap_or(0);

        let count = metrics.len();
        let (avg_waiting_time, avg_turnaround_time) = if count == 0 {
            (0.0, 0.0)
        } else {
            (
                total_waiting_time as f64 / count as f64,
                total_turnaround_time as f64 / count as f64,
            )
        };

        let (cpu_utilization, throughput) = if makespan <= 0 {
            (0.0, 0.0)
        } else {
            (
                100.0 * total_burst_time as f64 / makespan as f64,
                count as f64 / makespan as f64,
            )
        };

        Self {
            processes: metrics,
            total_waiting_time,
            total_turnaround_time,
            total_burst_time,
            avg_waiting_time,
            avg_turnaround_time,
            cpu_utilization,
            makespan,
            idle_time: makespan - total_burst_time,
            throughput,
        }
    }

    /// Number of processes counted.
    pub fn completed_count(&self) -> usize {
        self.processes.len()
    }

    /// Metrics for a single process.
    pub fn metrics_for(&self, process_id: usize) -> Option<&ProcessMetrics> {
        self.processes.iter().find(|m| m.process_id == process_id)
    }

    /// Whether the CPU never idled before the last completion.
    pub fn is_fully_utilized(&self) -> bool {
        self.makespan > 0 && self.idle_time == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished(id: usize, arrival: i64, burst: i64, finish: i64) -> Process {
        let mut p = Process::new(id, arrival, burst);
        p.remaining_time = 0;
        p.finish_time = Some(finish);
        p
    }

    #[test]
    fn test_kpi_basic() {
        // FCFS on [(0,5),(1,3),(2,8)]
        let processes = vec![
            finished(1, 0, 5, 5),
            finished(2, 1, 3, 8),
            finished(3, 2, 8, 16),
        ];
        let kpi = ScheduleKpi::calculate(&processes);

        let waits: Vec<i64> = kpi.processes.iter().map(|m| m.waiting_time).collect();
        assert_eq!(waits, vec![0, 4, 6]);
        assert_eq!(kpi.total_waiting_time, 10);
        assert!((kpi.avg_waiting_time - 10.0 / 3.0).abs() < 1e-10);
        assert!((kpi.avg_turnaround_time - 26.0 / 3.0).abs() < 1e-10); // (5+7+14)/3
        assert_eq!(kpi.makespan, 16);
        assert!((kpi.cpu_utilization - 100.0).abs() < 1e-10);
        assert!(kpi.is_fully_utilized());
    }

    #[test]
    fn test_kpi_sum_identity() {
        let processes = vec![finished(1, 0, 8, 17), finished(2, 1, 4, 5)];
        let kpi = ScheduleKpi::calculate(&processes);
        assert_eq!(
            kpi.total_waiting_time + kpi.total_burst_time,
            kpi.total_turnaround_time
        );
    }

    #[test]
    fn test_kpi_idle_utilization() {
        // Busy 0..2 and 5..8 → 5 busy units over 8
        let processes = vec![finished(1, 0, 2, 2), finished(2, 5, 3, 8)];
        let kpi = ScheduleKpi::calculate(&processes);
        assert_eq!(kpi.makespan, 8);
        assert_eq!(kpi.idle_time, 3);
        assert!((kpi.cpu_utilization - 62.5).abs() < 1e-10);
        assert!((kpi.throughput - 0.25).abs() < 1e-10);
        assert!(!kpi.is_fully_utilized());
    }

    #[test]
    fn test_kpi_skips_unfinished() {
        let processes = vec![finished(1, 0, 2, 2), Process::new(2, 0, 3)];
        let kpi = ScheduleKpi::calculate(&processes);
        assert_eq!(kpi.completed_count(), 1);
        assert!(kpi.metrics_for(2).is_none());
        assert_eq!(kpi.metrics_for(1).unwrap().turnaround_time, 2);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = ScheduleKpi::calculate(&[]);
        assert_eq!(kpi.makespan, 0);
        assert_eq!(kpi.total_waiting_time, 0);
        assert!((kpi.avg_waiting_time - 0.0).abs() < 1e-10);
        assert!((kpi.cpu_utilization - 0.0).abs() < 1e-10);
        assert!(!kpi.is_fully_utilized());
    }
}
