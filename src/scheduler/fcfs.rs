//! First-Come-First-Served.
//!
//! # Algorithm
//!
//! 1. Stable-sort processes by arrival time (equal arrivals keep id order).
//! 2. For each process, wait for its arrival if the CPU is ahead of it.
//! 3. Run it to completion in one slice.
//!
//! # Complexity
//! O(n log n) for the sort.

use super::{ScheduleRun, SchedulingAlgorithm};
use crate::models::{GanttChart, Process};

/// Non-preemptive FCFS.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingAlgorithm for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn run(&self, mut processes: Vec<Process>) -> ScheduleRun {
        let mut gantt = GanttChart::new();

        let mut order: Vec<usize> = (0..processes.len()).collect();
        order.sort_by_key(|&i| processes[i].arrival_time);

        let mut current_time = 0;
        for idx in order {
            let p = &mut processes[idx];
            // Idle gaps leave no Gantt entry
            current_time = current_time.max(p.arrival_time);
            let start = current_time;
            let burst = p.remaining_time;
            current_time += p.execute(start, burst);
            gantt.record(start, current_time, p.id);
        }

        ScheduleRun { gantt, processes }
    }

    fn description(&self) -> &'static str {
        "First-Come First-Served (FCFS)"
    }
}
