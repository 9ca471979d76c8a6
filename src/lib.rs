//! Discrete-time CPU scheduling simulator.
//!
//! Simulates First-Come-First-Served, preemptive Shortest-Remaining-Time
//! and Round-Robin over a static set of processes, producing a Gantt
//! chart and timing metrics for each discipline.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `ProcessSet`, `GanttChart`, `GanttEntry`
//! - **`scheduler`**: Disciplines (`Fcfs`, `Srt`, `RoundRobin`), the `Algorithm`
//!   selector, and `ScheduleKpi`
//! - **`simulation`**: Snapshot-run-merge driver (`Simulator`)
//! - **`loader`**: `Workload` from the text or JSON format
//! - **`validation`**: Input integrity checks (arrival, burst, quantum)
//! - **`report`**: Text and JSON rendering of results
//! - **`workload`**: Seeded random workload generation
//!
//! # Architecture
//!
//! The simulation is single-threaded and deterministic. Each discipline
//! runs on its own freshly reset copy of the process set, so runs are
//! independent and repeatable.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod loader;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod simulation;
pub mod validation;
pub mod workload;
