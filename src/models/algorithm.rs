//! Scheduling algorithm selector.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::validation::{ValidationError, ValidationErrorKind};

/// The four supported scheduling disciplines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First (non-preemptive).
    Sjf,
    /// Round-Robin with a fixed time quantum.
    RoundRobin,
    /// Priority (non-preemptive).
    Priority,
}

impl Algorithm {
    /// All algorithms, in menu order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::RoundRobin,
        Algorithm::Priority,
    ];

    /// Maps a 1-based menu choice to an algorithm.
    pub fn from_choice(choice: u32) -> Result<Self, ValidationError> {
        match choice {
            1 => Ok(Self::Fcfs),
            2 => Ok(Self::Sjf),
            3 => Ok(Self::RoundRobin),
            4 => Ok(Self::Priority),
            other => Err(ValidationError::new(
                ValidationErrorKind::InvalidChoice,
                format!("Invalid choice: {other} (expected 1-4)"),
            )),
        }
    }

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fcfs => "First-Come, First-Served (FCFS)",
            Self::Sjf => "Shortest Job First (SJF)",
            Self::RoundRobin => "Round Robin",
            Self::Priority => "Priority Scheduling",
        }
    }

    /// Whether the algorithm needs a time quantum.
    pub fn needs_quantum(&self) -> bool {
        matches!(self, Self::RoundRobin)
    }

    /// Whether the algorithm reads process priorities.
    pub fn uses_priority(&self) -> bool {
        matches!(self, Self::Priority)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::RoundRobin => "RR",
            Self::Priority => "Priority",
        };
        f.write_str(name)
    }
}

impl FromStr for Algorithm {
    type Err = ValidationError;

    /// Accepts a name (`fcfs`, `sjf`, `rr`, `round-robin`, `priority`)
    /// or a menu number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        if let Ok(choice) = normalized.parse::<u32>() {
            return Self::from_choice(choice);
        }
        match normalized.as_str() {
            "fcfs" | "fifo" => Ok(Self::Fcfs),
            "sjf" => Ok(Self::Sjf),
            "rr" | "round-robin" | "roundrobin" | "round_robin" => Ok(Self::RoundRobin),
            "priority" | "prio" => Ok(Self::Priority),
            _ => Err(ValidationError::new(
                ValidationErrorKind::InvalidChoice,
                format!("Invalid choice: '{}'", s.trim()),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_choice() {
        assert_eq!(Algorithm::from_choice(1).unwrap(), Algorithm::Fcfs);
        assert_eq!(Algorithm::from_choice(3).unwrap(), Algorithm::RoundRobin);
        let err = Algorithm::from_choice(5).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::InvalidChoice);
        assert!(Algorithm::from_choice(0).is_err());
    }

    #[test]
    fn test_parse_names_and_numbers() {
        assert_eq!("SJF".parse::<Algorithm>().unwrap(), Algorithm::Sjf);
        assert_eq!("round-robin".parse::<Algorithm>().unwrap(), Algorithm::RoundRobin);
        assert_eq!(" 4 ".parse::<Algorithm>().unwrap(), Algorithm::Priority);
        assert!("lottery".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_flags() {
        assert!(Algorithm::RoundRobin.needs_quantum());
        assert!(!Algorithm::Fcfs.needs_quantum());
        assert!(Algorithm::Priority.uses_priority());
        assert!(!Algorithm::Sjf.uses_priority());
    }

    #[test]
    fn test_serde_kebab_case() {
        let json = serde_json::to_string(&Algorithm::RoundRobin).unwrap();
        assert_eq!(json, "\"round-robin\"");
        let back: Algorithm = serde_json::from_str("\"fcfs\"").unwrap();
        assert_eq!(back, Algorithm::Fcfs);
    }
}
