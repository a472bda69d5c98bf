//! Interactive workload collection over stdin/stdout.
//!
//! Reads whitespace-separated tokens, so answers may be given one per
//! line or several on one line.

use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{bail, Context, Result};

use cpu_sched::models::{Algorithm, Process, ProcessId, Ticks};

/// Prompts on `W` and reads answers from `R`.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                bail!("unexpected end of input");
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }

    fn ask<T>(&mut self, prompt: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;
        let token = self.next_token()?;
        token
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid answer '{token}': {e}"))
    }

    /// Asks for the process count, then arrival and burst for each.
    pub fn collect_processes(&mut self) -> Result<Vec<Process>> {
        let count: usize = self.ask("Enter the number of processes: ")?;
        writeln!(self.writer, "Enter process details:")?;

        let mut processes = Vec::new();
        for n in 1..=count {
            let arrival: Ticks = self
                .ask(&format!("Process {n} -> Arrival Time: "))
                .with_context(|| format!("reading arrival time of process {n}"))?;
            let burst: Ticks = self
                .ask("Burst Time: ")
                .with_context(|| format!("reading burst time of process {n}"))?;
            processes.push(Process::new(n as ProcessId, arrival, burst));
        }
        Ok(processes)
    }

    /// Shows the algorithm menu and reads a choice.
    pub fn choose_algorithm(&mut self) -> Result<Algorithm> {
        writeln!(self.writer, "\nChoose Scheduling Algorithm:")?;
        for (n, algorithm) in Algorithm::ALL.iter().enumerate() {
            writeln!(self.writer, "{}. {}", n + 1, algorithm.label())?;
        }
        let choice: u32 = self.ask("Enter choice: ")?;
        Ok(Algorithm::from_choice(choice)?)
    }

    /// Reads a priority for each process.
    pub fn read_priorities(&mut self, processes: &mut [Process]) -> Result<()> {
        for process in processes.iter_mut() {
            process.priority = self
                .ask(&format!("Process {} -> Priority: ", process.id))
                .with_context(|| format!("reading priority of process {}", process.id))?;
        }
        Ok(())
    }

    /// Reads the Round-Robin time quantum.
    pub fn read_quantum(&mut self) -> Result<Ticks> {
        self.ask("Enter Time Quantum for Round Robin: ")
    }
}
