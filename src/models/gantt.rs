//! Gantt chart (execution trace) model.
//!
//! A Gantt chart is the ordered, append-only log of which process held
//! the CPU during which interval. Idle intervals are never recorded; they
//! are the gaps between entries.

use serde::{Deserialize, Serialize};

/// One execution slice: `process_id` ran during `[start_time, end_time)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttEntry {
    /// Slice start (inclusive).
    pub start_time: i64,
    /// Slice end (exclusive).
    pub end_time: i64,
    /// Process that ran.
    pub process_id: usize,
}

impl GanttEntry {
    /// Creates a new entry.
    pub fn new(start_time: i64, end_time: i64, process_id: usize) -> Self {
        Self {
            start_time,
            end_time,
            process_id,
        }
    }

    /// Slice length.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }
}

/// Ordered execution log produced by one algorithm run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttChart {
    entries: Vec<GanttEntry>,
}

impl GanttChart {
    /// Creates an empty chart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slice. Slices must be recorded in time order.
    pub fn record(&mut self, start_time: i64, end_time: i64, process_id: usize) {
        debug_assert!(start_time < end_time, "empty Gantt slice");
        debug_assert!(
            self.entries.last().map_or(true, |e| e.end_time <= start_time),
            "Gantt slices must not overlap"
        );
        self.entries.push(GanttEntry::new(start_time, end_time, process_id));
    }

    /// All entries in time order.
    pub fn entries(&self) -> &[GanttEntry] {
        &self.entries
    }

    /// Iterates entries in time order.
    pub fn iter(&self) -> std::slice::Iter<'_, GanttEntry> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Makespan: end of the last slice (0 when empty).
    pub fn makespan(&self) -> i64 {
        self.entries.last().map(|e| e.end_time).unwrap_or(0)
    }

    /// Total time the CPU was busy.
    pub fn busy_time(&self) -> i64 {
        self.entries.iter().map(|e| e.duration()).sum()
    }

    /// Idle intervals `[start, end)` between t=0 and the makespan.
    pub fn idle_gaps(&self) -> Vec<(i64, i64)> {
        let mut gaps = Vec::new();
        let mut cursor = 0;
        for e in &self.entries {
            if e.start_time > cursor {
                gaps.push((cursor, e.start_time));
            }
            cursor = e.end_time;
        }
        gaps
    }

    /// Total idle time before the makespan.
    pub fn idle_time(&self) -> i64 {
        self.idle_gaps().iter().map(|(s, e)| e - s).sum()
    }

    /// Returns all entries for a given process.
    pub fn entries_for_process(&self, process_id: usize) -> Vec<&GanttEntry> {
        self.entries
            .iter()
            .filter(|e| e.process_id == process_id)
            .collect()
    }

    /// Completion time of a process (end of its last slice).
    pub fn completion_time(&self, process_id: usize) -> Option<i64> {
        self.entries
            .iter()
            .rev()
            .find(|e| e.process_id == process_id)
            .map(|e| e.end_time)
    }

    /// Process running at time `t`, if any.
    pub fn running_at(&self, t: i64) -> Option<usize> {
        self.entries
            .iter()
            .find(|e| e.start_time <= t && t < e.end_time)
            .map(|e| e.process_id)
    }

    /// Merges contiguous slices of the same process into one entry.
    ///
    /// Used for display; the per-tick SRT trace collapses into ranges.
    pub fn coalesced(&self) -> GanttChart {
        let mut merged: Vec<GanttEntry> = Vec::with_capacity(self.entries.len());
        for e in &self.entries {
            match merged.last_mut() {
                Some(last) if last.process_id == e.process_id && last.end_time == e.start_time => {
                    last.end_time = e.end_time;
                }
                _ => merged.push(*e),
            }
        }
        GanttChart { entries: merged }
    }
}

impl<'a> IntoIterator for &'a GanttChart {
    type Item = &'a GanttEntry;
    type IntoIter = std::slice::Iter<'a, GanttEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
