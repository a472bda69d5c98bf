//! Text rendering of a finished schedule.
//!
//! Produces the results table (sorted by process ID), the average
//! waiting and turnaround times to two decimals, and a Gantt chart with
//! boundary timestamps.

use std::fmt;

use crate::models::{Schedule, Segment};
use crate::scheduler::ScheduleKpi;

const RULE: &str = "-------------------------------------------------------------";

/// Printable report for one schedule.
#[derive(Debug, Clone)]
pub struct Report<'a> {
    schedule: &'a Schedule,
    kpi: ScheduleKpi,
}

impl<'a> Report<'a> {
    /// Creates a report, computing KPIs up front.
    pub fn new(schedule: &'a Schedule) -> Self {
        Self {
            schedule,
            kpi: ScheduleKpi::calculate(schedule),
        }
    }

    /// KPIs behind the report.
    pub fn kpi(&self) -> &ScheduleKpi {
        &self.kpi
    }

    /// Results table plus averages.
    pub fn render_table(&self) -> String {
        let mut out = String::new();
        out.push_str("Process Execution Results:\n");
        out.push_str(RULE);
        out.push('\n');

        if self.schedule.processes.is_empty() {
            out.push_str("No processes to report.\n");
        } else {
            out.push_str("PID  Arrival  Burst  Priority  Waiting  Turnaround  Completion\n");
            out.push_str(RULE);
            out.push('\n');
            for p in self.schedule.processes_by_id() {
                out.push_str(&format!(
                    "{:>3}{:>9}{:>7}{:>10}{:>9}{:>12}{:>12}\n",
                    p.id,
                    p.arrival,
                    p.burst,
                    p.priority,
                    p.waiting_time,
                    p.turnaround_time,
                    p.completion_time
                ));
            }
        }

        out.push_str(RULE);
        out.push('\n');
        out.push_str(&format!(
            "Average Waiting Time: {:.2}\n",
            self.kpi.avg_waiting_time
        ));
        out.push_str(&format!(
            "Average Turnaround Time: {:.2}\n",
            self.kpi.avg_turnaround_time
        ));
        out
    }

    /// Gantt chart: one cell per segment, boundary times underneath.
    pub fn render_gantt(&self) -> String {
        let segments = self.schedule.timeline.segments();
        let mut out = String::from("Gantt Chart:\n");
        if segments.is_empty() {
            out.push_str("(empty)\n");
            return out;
        }

        let cells: Vec<String> = segments.iter().map(cell_label).collect();
        let width = cells.iter().map(String::len).max().unwrap_or(2) + 3;
        let rule = "-".repeat(width * cells.len() + 1);

        out.push_str(&rule);
        out.push('\n');
        for label in &cells {
            out.push_str(&format!("{:<width$}", format!("| {label}")));
        }
        out.push_str("|\n");
        out.push_str(&rule);
        out.push('\n');
        for seg in segments {
            out.push_str(&format!("{:<width$}", seg.start));
        }
        out.push_str(&format!("{}\n", self.schedule.timeline.end_time()));
        out
    }
}

fn cell_label(segment: &Segment) -> String {
    match segment.process_id {
        Some(id) => format!("P{id}"),
        None => "--".to_string(),
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Algorithm: {}", self.schedule.algorithm.label())?;
        writeln!(f)?;
        write!(f, "{}", self.render_table())?;
        writeln!(f)?;
        write!(f, "{}", self.render_gantt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Algorithm, Process, Timeline};
    use crate::scheduler::{CpuScheduler, FcfsScheduler, RoundRobinScheduler};

    #[test]
    fn test_table_sorted_by_id() {
        let processes = vec![Process::new(2, 0, 3), Process::new(1, 1, 2)];
        let schedule = FcfsScheduler::new().schedule(&processes).unwrap();
        let table = Report::new(&schedule).render_table();

        let rows: Vec<&str> = table
            .lines()
            .filter(|l| l.trim_start().starts_with(char::is_numeric))
            .collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].trim_start().starts_with('1'));
        assert!(rows[1].trim_start().starts_with('2'));
    }

    #[test]
    fn test_averages_two_decimals() {
        let processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
        let schedule = FcfsScheduler::new().schedule(&processes).unwrap();
        let table = Report::new(&schedule).render_table();

        assert!(table.contains("Average Waiting Time: 2.00"));
        assert!(table.contains("Average Turnaround Time: 6.00"));
    }

    #[test]
    fn test_row_columns() {
        let processes = vec![Process::new(1, 0, 5).with_priority(3)];
        let schedule = FcfsScheduler::new().schedule(&processes).unwrap();
        let table = Report::new(&schedule).render_table();

        let row = table
            .lines()
            .find(|l| l.trim_start().starts_with('1'))
            .unwrap();
        let fields: Vec<&str> = row.split_whitespace().collect();
        assert_eq!(fields, vec!["1", "0", "5", "3", "0", "5", "5"]);
    }

    #[test]
    fn test_gantt_cells_and_times() {
        let processes = vec![Process::new(1, 0, 4), Process::new(2, 0, 3)];
        let schedule = RoundRobinScheduler::new(2).schedule(&processes).unwrap();
        let gantt = Report::new(&schedule).render_gantt();

        let lines: Vec<&str> = gantt.lines().collect();
        assert_eq!(lines[2], "| P1 | P2 | P1 | P2 |");
        let times: Vec<&str> = lines[4].split_whitespace().collect();
        assert_eq!(times, vec!["0", "2", "4", "6", "7"]);
    }

    #[test]
    fn test_gantt_shows_idle() {
        let processes = vec![Process::new(1, 2, 1)];
        let schedule = FcfsScheduler::new().schedule(&processes).unwrap();
        let gantt = Report::new(&schedule).render_gantt();
        assert!(gantt.contains("| -- | P1 |"));
    }

    #[test]
    fn test_empty_report() {
        let schedule = Schedule::new(Algorithm::Sjf, Vec::new(), Timeline::new());
        let report = Report::new(&schedule);
        let text = report.to_string();

        assert!(text.contains("No processes to report."));
        assert!(text.contains("Average Waiting Time: 0.00"));
        assert!(text.contains("(empty)"));
    }

    #[test]
    fn test_display_includes_algorithm() {
        let schedule = FcfsScheduler::new()
            .schedule(&[Process::new(1, 0, 1)])
            .unwrap();
        let text = Report::new(&schedule).to_string();
        assert!(text.starts_with("Algorithm: First-Come, First-Served (FCFS)"));
        assert!(text.contains("Gantt Chart:"));
    }
}
