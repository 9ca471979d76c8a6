//! Preemptive Shortest-Remaining-Time.
//!
//! # Algorithm
//!
//! Discrete simulation, one time unit per step:
//! 1. Admit every process whose arrival time has been reached.
//! 2. Pick the ready process with the least remaining time and run it
//!    for one unit. Ties go to the earliest-admitted process.
//! 3. A finished process leaves; otherwise it returns to the ready set
//!    with its original admission rank.
//! 4. With nothing ready, the clock jumps to the next arrival.
//!
//! # Complexity
//! O(B log n) where B = sum of burst times.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::arrivals::ArrivalCursor;
use super::{ScheduleRun, SchedulingAlgorithm};
use crate::models::{GanttChart, Process};

/// Preemptive SRT (a.k.a. SRTF).
#[derive(Debug, Clone, Copy, Default)]
pub struct Srt;

/// Heap key: (remaining time, admission rank, process index).
///
/// Admission ranks are unique, so the index never takes part in ordering.
type ReadyKey = Reverse<(i64, usize, usize)>;

impl SchedulingAlgorithm for Srt {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn run(&self, mut processes: Vec<Process>) -> ScheduleRun {
        let mut gantt = GanttChart::new();
        let mut arrivals = ArrivalCursor::new(&processes);
        let mut ready: BinaryHeap<ReadyKey> = BinaryHeap::with_capacity(processes.len());
        let mut admitted = 0;
        let mut completed = 0;
        let mut current_time = 0;

        while completed < processes.len() {
            while let Some(idx) = arrivals.pop_arrived(&processes, current_time) {
                ready.push(Reverse((processes[idx].remaining_time, admitted, idx)));
                admitted += 1;
            }

            let Some(Reverse((_, rank, idx))) = ready.pop() else {
                match arrivals.next_arrival_time(&processes) {
                    Some(t) => {
                        current_time = t;
                        continue;
                    }
                    None => break,
                }
            };

            let p = &mut processes[idx];
            let start = current_time;
            current_time += p.execute(start, 1);
            gantt.record(start, current_time, p.id);
            log::trace!("SRT t={start}: P{} (remaining {})", p.id, p.remaining_time);

            if p.is_complete() {
                completed += 1;
            } else {
                ready.push(Reverse((p.remaining_time, rank, idx)));
            }
        }

        ScheduleRun { gantt, processes }
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time (SRT)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessSet;

    fn run(records: &[(i64, i64)]) -> ScheduleRun {
        Srt.run(ProcessSet::from_records(records.iter().copied()).snapshot())
    }

    fn finishes(run: &ScheduleRun) -> Vec<i64> {
        run.processes.iter().filter_map(|p| p.finish_time).collect()
    }

    #[test]
    fn test_srt_textbook() {
        let r = run(&[(0, 8), (1, 4), (2, 9), (3, 5)]);
        assert_eq!(finishes(&r), vec![17, 5, 26, 10]);

        let waits: Vec<i64> = r.processes.iter().filter_map(|p| p.waiting_time()).collect();
        assert_eq!(waits, vec![9, 0, 15, 2]);
        let avg = waits.iter().sum::<i64>() as f64 / waits.len() as f64;
        assert!((avg - 6.5).abs() < 1e-10);
    }

    #[test]
    fn test_srt_one_entry_per_tick() {
        let r = run(&[(0, 8), (1, 4), (2, 9), (3, 5)]);
        assert_eq!(r.gantt.len(), 26);
        assert!(r.gantt.iter().all(|e| e.duration() == 1));

        let coalesced: Vec<(i64, i64, usize)> = r
            .gantt
            .coalesced()
            .iter()
            .map(|e| (e.start_time, e.end_time, e.process_id))
            .collect();
        assert_eq!(
            coalesced,
            vec![(0, 1, 1), (1, 5, 2), (5, 10, 4), (10, 17, 1), (17, 26, 3)]
        );
    }

    #[test]
    fn test_srt_preempts_on_shorter_arrival() {
        let r = run(&[(0, 10), (2, 1)]);
        assert_eq!(r.gantt.running_at(2), Some(2));
        assert_eq!(finishes(&r), vec![11, 3]);
    }

    #[test]
    fn test_srt_tie_goes_to_earliest_admission() {
        // t=0: P2 runs (4 -> 3). t=1: P1 arrives with 3, tying P2; P2 was admitted first.
        let r = run(&[(1, 3), (0, 4)]);
        assert_eq!(r.gantt.running_at(1), Some(2));
        assert_eq!(finishes(&r), vec![7, 4]);
    }

    #[test]
    fn test_srt_tie_same_tick_uses_input_order() {
        let r = run(&[(0, 2), (0, 2)]);
        let order: Vec<usize> = r.gantt.coalesced().iter().map(|e| e.process_id).collect();
        assert_eq!(order, vec![1, 2]);
    }

    #[test]
    fn test_srt_idle_until_first_arrival() {
        let r = run(&[(4, 2)]);
        assert_eq!(r.gantt.entries()[0].start_time, 4);
        assert_eq!(r.gantt.idle_gaps(), vec![(0, 4)]);
        assert_eq!(finishes(&r), vec![6]);
    }

    #[test]
    fn test_srt_idle_between_bursts() {
        let r = run(&[(0, 1), (3, 1)]);
        assert_eq!(r.gantt.idle_gaps(), vec![(1, 3)]);
        assert_eq!(finishes(&r), vec![1, 4]);
    }
}
