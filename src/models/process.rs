//! Process model.
//!
//! A process is a unit of CPU work with a fixed arrival time and burst
//! time, plus the mutable state a simulation run advances (remaining
//! time, finish time).
//!
//! # Time Representation
//! All times are integer simulated time units relative to t=0.

use serde::{Deserialize, Serialize};

/// A process to be scheduled on a single CPU.
///
/// `remaining_time` starts equal to `burst_time` and is decremented as the
/// process executes. `finish_time` is `None` until `remaining_time` reaches 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique 1-based identifier, assigned by input order.
    pub id: usize,
    /// Time unit at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
    /// CPU time still required in the current run.
    pub remaining_time: i64,
    /// Time unit at which the process completed, if it has.
    pub finish_time: Option<i64>,
}

impl Process {
    /// Creates a fresh process with `remaining_time = burst_time`.
    pub fn new(id: usize, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            remaining_time: burst_time,
            finish_time: None,
        }
    }

    /// Restores the pre-run state.
    pub fn reset(&mut self) {
        self.remaining_time = self.burst_time;
        self.finish_time = None;
    }

    /// Whether the process has no remaining work.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.remaining_time == 0
    }

    /// Executes for up to `units` time units and returns the units consumed.
    ///
    /// When the process finishes inside the slice, `finish_time` is set to
    /// `start + consumed`.
    pub fn execute(&mut self, start: i64, units: i64) -> i64 {
        let consumed = units.min(self.remaining_time);
        self.remaining_time -= consumed;
        if self.remaining_time == 0 {
            self.finish_time = Some(start + consumed);
        }
        consumed
    }

    /// Turnaround time: `finish - arrival`. `None` before completion.
    pub fn turnaround_time(&self) -> Option<i64> {
        self.finish_time.map(|finish| finish - self.arrival_time)
    }

    /// Waiting time: `turnaround - burst`. `None` before completion.
    pub fn waiting_time(&self) -> Option<i64> {
        self.turnaround_time().map(|t| t - self.burst_time)
    }
}
