//! Round-Robin with a fixed quantum.
//!
//! # Algorithm
//!
//! 1. Enqueue every process whose arrival time has been reached.
//! 2. Dispatch the front of the FIFO queue for `min(quantum, remaining)`.
//! 3. Enqueue the processes that arrived during that slice, in arrival order.
//! 4. If the dispatched process is unfinished, re-enqueue it behind them.
//! 5. With an empty queue, the clock jumps to the next arrival.
//!
//! Each process enters the queue through step 1 or 3 exactly once.
//!
//! # Complexity
//! O(n log n + D) where D = number of dispatches.

use std::collections::VecDeque;

use super::arrivals::ArrivalCursor;
use super::{ScheduleRun, SchedulingAlgorithm};
use crate::models::{GanttChart, Process};

/// Preemptive Round-Robin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobin {
    quantum: i64,
}

impl RoundRobin {
    /// Creates a Round-Robin discipline with the given quantum.
    ///
    /// A non-positive quantum is treated as 1 so every dispatch makes progress.
    pub fn new(quantum: i64) -> Self {
        Self {
            quantum: quantum.max(1),
        }
    }

    /// Effective quantum.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

impl SchedulingAlgorithm for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn run(&self, mut processes: Vec<Process>) -> ScheduleRun {
        let mut gantt = GanttChart::new();
        let mut arrivals = ArrivalCursor::new(&processes);
        let mut queue: VecDeque<usize> = VecDeque::with_capacity(processes.len());
        let mut completed = 0;
        let mut current_time = 0;

        while completed < processes.len() {
            while let Some(idx) = arrivals.pop_arrived(&processes, current_time) {
                queue.push_back(idx);
            }

            let Some(idx) = queue.pop_front() else {
                match arrivals.next_arrival_time(&processes) {
                    Some(t) => {
                        current_time = t;
                        continue;
                    }
                    None => break,
                }
            };

            let start = current_time;
            let p = &mut processes[idx];
            current_time += p.execute(start, self.quantum);
            gantt.record(start, current_time, p.id);
            log::trace!(
                "RR t={start}..{current_time}: P{} (remaining {})",
                p.id,
                p.remaining_time
            );
            let finished = p.is_complete();

            // Arrivals in (start, current_time] go ahead of the preempted process
            while let Some(arrived) = arrivals.pop_arrived(&processes, current_time) {
                queue.push_back(arrived);
            }

            if finished {
                completed += 1;
            } else {
                queue.push_back(idx);
            }
        }

        ScheduleRun { gantt, processes }
    }

    fn description(&self) -> &'static str {
        "Round-Robin (RR)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GanttEntry, ProcessSet};

    fn run(records: &[(i64, i64)], quantum: i64) -> ScheduleRun {
        RoundRobin::new(quantum).run(ProcessSet::from_records(records.iter().copied()).snapshot())
    }

    fn finishes(run: &ScheduleRun) -> Vec<i64> {
        run.processes.iter().filter_map(|p| p.finish_time).collect()
    }

    #[test]
    fn test_rr_textbook() {
        let r = run(&[(0, 5), (1, 3), (2, 8)], 4);
        assert_eq!(
            r.gantt.entries(),
            &[
                GanttEntry::new(0, 4, 1),
                GanttEntry::new(4, 7, 2),
                GanttEntry::new(7, 11, 3),
                GanttEntry::new(11, 12, 1),
                GanttEntry::new(12, 16, 3),
            ]
        );
        assert_eq!(finishes(&r), vec![12, 7, 16]);
    }

    #[test]
    fn test_rr_arrivals_during_slice_precede_incumbent() {
        // P2 arrives mid-slice, so it runs before P1's second turn
        let r = run(&[(0, 4), (1, 2)], 2);
        let order: Vec<usize> = r.gantt.iter().map(|e| e.process_id).collect();
        assert_eq!(order, vec![1, 2, 1]);
        assert_eq!(finishes(&r), vec![6, 4]);
    }

    #[test]
    fn test_rr_arrival_at_slice_end_precedes_incumbent() {
        let r = run(&[(0, 4), (2, 2)], 2);
        let order: Vec<usize> = r.gantt.iter().map(|e| e.process_id).collect();
        assert_eq!(order, vec![1, 2, 1]);
    }

    #[test]
    fn test_rr_arrival_during_final_slice_is_not_lost() {
        // P1 completes in its only slice while P2 arrives inside it
        let r = run(&[(0, 3), (1, 2)], 5);
        assert_eq!(
            r.gantt.entries(),
            &[GanttEntry::new(0, 3, 1), GanttEntry::new(3, 5, 2)]
        );
    }

    #[test]
    fn test_rr_short_burst_single_dispatch() {
        let r = run(&[(0, 3)], 10);
        assert_eq!(r.gantt.entries(), &[GanttEntry::new(0, 3, 1)]);
    }

    #[test]
    fn test_rr_slices_bounded_by_quantum() {
        let r = run(&[(0, 7), (0, 5), (3, 9)], 3);
        assert!(r.gantt.iter().all(|e| e.duration() <= 3));
        assert_eq!(r.gantt.busy_time(), 21);
    }

    #[test]
    fn test_rr_idle_gap() {
        let r = run(&[(0, 1), (5, 2)], 4);
        assert_eq!(r.gantt.idle_gaps(), vec![(1, 5)]);
        assert_eq!(finishes(&r), vec![1, 7]);
    }

    #[test]
    fn test_rr_non_positive_quantum_still_terminates() {
        let rr = RoundRobin::new(0);
        assert_eq!(rr.quantum(), 1);
        let r = rr.run(ProcessSet::from_records([(0, 2), (0, 1)]).snapshot());
        assert_eq!(finishes(&r), vec![3, 2]);
    }
}
