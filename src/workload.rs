//! Random workload generation.
//!
//! Produces valid workloads for stress runs and property tests. Pass a
//! seeded RNG (e.g. `SmallRng::seed_from_u64`) for reproducible output.

use rand::Rng;

use crate::loader::Workload;

/// Parameters for random workloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkloadGenerator {
    /// Number of processes.
    pub count: usize,
    /// Arrival times are drawn from `0..=max_arrival`.
    pub max_arrival: i64,
    /// Burst times are drawn from `1..=max_burst`.
    pub max_burst: i64,
    /// Round-Robin quantum of the generated workload.
    pub quantum: i64,
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self {
            count: 8,
            max_arrival: 20,
            max_burst: 10,
            quantum: 4,
        }
    }
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes with default ranges.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Default::default()
        }
    }

    /// Sets the latest arrival time.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the longest burst time.
    pub fn with_max_burst(mut self, max_burst: i64) -> Self {
        self.max_burst = max_burst;
        self
    }

    /// Sets the quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Draws a workload. Out-of-range parameters are clamped so the
    /// result always validates.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Workload {
        let max_arrival = self.max_arrival.max(0);
        let max_burst = self.max_burst.max(1);
        let records: Vec<(i64, i64)> = (0..self.count.max(1))
            .map(|_| {
                (
                    rng.random_range(0..=max_arrival),
                    rng.random_range(1..=max_burst),
                )
            })
            .collect();
        Workload::new(self.quantum.max(1), records)
    }
}
