//! Canonical process set.
//!
//! Holds the input records in id order. Algorithms never mutate it
//! directly: each run takes a [`ProcessSet::snapshot`], and completion
//! times are written back with [`ProcessSet::merge_finish_times`] once the
//! run is over.

use serde::{Deserialize, Serialize};

use super::Process;

/// The process records of a workload, indexed by `id - 1`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSet {
    processes: Vec<Process>,
}

impl ProcessSet {
    /// Builds a set from `(arrival, burst)` pairs, assigning ids 1..=N in order.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        let processes = records
            .into_iter()
            .enumerate()
            .map(|(idx, (arrival, burst))| Process::new(idx + 1, arrival, burst))
            .collect();
        Self { processes }
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Looks up a process by its 1-based id.
    pub fn get(&self, id: usize) -> Option<&Process> {
        id.checked_sub(1).and_then(|idx| self.processes.get(idx))
    }

    /// Iterates processes in id order.
    pub fn iter(&self) -> std::slice::Iter<'_, Process> {
        self.processes.iter()
    }

    /// Sum of all burst times.
    pub fn total_burst_time(&self) -> i64 {
        self.processes.iter().map(|p| p.burst_time).sum()
    }

    /// Returns an independent copy with every process reset to its
    /// pre-run state.
    pub fn snapshot(&self) -> Vec<Process> {
        self.processes
            .iter()
            .cloned()
            .map(|mut p| {
                p.reset();
                p
            })
            .collect()
    }

    /// Overwrites canonical finish and remaining times from a completed run.
    ///
    /// Records whose id is not part of this set are ignored.
    pub fn merge_finish_times(&mut self, finished: &[Process]) {
        for run_state in finished {
            if let Some(slot) = run_state
                .id
                .checked_sub(1)
                .and_then(|idx| self.processes.get_mut(idx))
            {
                slot.finish_time = run_state.finish_time;
                slot.remaining_time = run_state.remaining_time;
            }
        }
    }
}

impl<'a> IntoIterator for &'a ProcessSet {
    type Item = &'a Process;
    type IntoIter = std::slice::Iter<'a, Process>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
