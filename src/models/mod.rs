//! CPU scheduling domain models.
//!
//! Provides the data types shared by every scheduling discipline:
//! processes, the canonical process set, and the Gantt chart a run
//! produces.
//!
//! # Lifecycle
//!
//! | Stage | Type |
//! |-------|------|
//! | Input records | `ProcessSet` |
//! | Per-run working copy | `Vec<Process>` from `ProcessSet::snapshot` |
//! | Execution trace | `GanttChart` of `GanttEntry` |

mod gantt;
mod process;
mod process_set;

pub use gantt::{GanttChart, GanttEntry};
pub use process::Process;
pub use process_set::ProcessSet;
