//! Result rendering.
//!
//! Turns a [`SimulationResult`] into the classic console report: a Gantt
//! log, a per-process table, and the aggregate metrics.

use std::fmt::Write;

use crate::models::GanttChart;
use crate::scheduler::SchedulingAlgorithm;
use crate::simulation::SimulationResult;

/// Renders one result as text.
///
/// With `coalesce`, contiguous slices of the same process are shown as
/// one Gantt line.
pub fn render_text(result: &SimulationResult, coalesce: bool) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_text(&mut out, result, coalesce);
    out
}

fn write_text(out: &mut String, result: &SimulationResult, coalesce: bool) -> std::fmt::Result {
    writeln!(out, "\n=== {} Results ===\n", result.algorithm.description())?;
    if let Some(quantum) = result.algorithm.quantum() {
        writeln!(out, "Quantum: {quantum}\n")?;
    }

    let coalesced;
    let gantt: &GanttChart = if coalesce {
        coalesced = result.gantt.coalesced();
        &coalesced
    } else {
        &result.gantt
    };

    writeln!(out, "Gantt Chart:")?;
    writeln!(out, "-----------")?;
    for entry in gantt {
        if coalesce {
            writeln!(
                out,
                "Time {}-{}: Process {}",
                entry.start_time, entry.end_time, entry.process_id
            )?;
        } else {
            writeln!(out, "Time {}: Process {}", entry.start_time, entry.process_id)?;
        }
    }

    writeln!(out, "\nProcess Metrics:")?;
    writeln!(
        out,
        "{:>10}{:>10}{:>10}{:>10}{:>10}{:>15}",
        "Process", "Arrival", "Burst", "Finish", "Wait", "Turnaround"
    )?;
    for m in &result.kpi.processes {
        writeln!(
            out,
            "{:>10}{:>10}{:>10}{:>10}{:>10}{:>15}",
            m.process_id, m.arrival_time, m.burst_time, m.finish_time, m.waiting_time, m.turnaround_time
        )?;
    }

    let kpi = &result.kpi;
    writeln!(out, "\nAverage Waiting Time: {:.2}", kpi.avg_waiting_time)?;
    writeln!(out, "Average Turnaround Time: {:.2}", kpi.avg_turnaround_time)?;
    writeln!(out, "CPU Utilization: {:.2}%", kpi.cpu_utilization)?;
    writeln!(out, "Makespan: {}", kpi.makespan)?;
    Ok(())
}

/// Renders results as pretty-printed JSON.
pub fn render_json(results: &[SimulationResult]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}
