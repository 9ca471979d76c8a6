//! Arrival cursor shared by the preemptive disciplines.
//!
//! Walks processes in (arrival time, id) order and hands each one out
//! exactly once, as soon as the clock reaches its arrival time.

use crate::models::Process;

#[derive(Debug, Clone)]
pub(crate) struct ArrivalCursor {
    order: Vec<usize>,
    next: usize,
}

impl ArrivalCursor {
    /// Builds the cursor over indices into `processes`.
    pub(crate) fn new(processes: &[Process]) -> Self {
        let mut order: Vec<usize> = (0..processes.len()).collect();
        // Stable: equal arrivals keep input (id) order
        order.sort_by_key(|&i| processes[i].arrival_time);
        Self { order, next: 0 }
    }

    /// Returns the next process that has arrived by `now`, if any.
    pub(crate) fn pop_arrived(&mut self, processes: &[Process], now: i64) -> Option<usize> {
        let idx = *self.order.get(self.next)?;
        if processes[idx].arrival_time > now {
            return None;
        }
        self.next += 1;
        Some(idx)
    }

    /// Arrival time of the next process not yet handed out.
    pub(crate) fn next_arrival_time(&self, processes: &[Process]) -> Option<i64> {
        self.order
            .get(self.next)
            .map(|&idx| processes[idx].arrival_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessSet;

    #[test]
    fn test_hands_out_each_process_once_in_arrival_order() {
        let procs = ProcessSet::from_records([(3, 1), (0, 1), (3, 1), (1, 1)]).snapshot();
        let mut cursor = ArrivalCursor::new(&procs);

        assert_eq!(cursor.pop_arrived(&procs, 0), Some(1));
        assert_eq!(cursor.pop_arrived(&procs, 0), None);
        assert_eq!(cursor.next_arrival_time(&procs), Some(1));

        let mut at_three = Vec::new();
        while let Some(idx) = cursor.pop_arrived(&procs, 3) {
            at_three.push(idx);
        }
        assert_eq!(at_three, vec![3, 0, 2]);
        assert_eq!(cursor.pop_arrived(&procs, 100), None);
        assert_eq!(cursor.next_arrival_time(&procs), None);
    }
}
