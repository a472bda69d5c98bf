//! Workload parsing.
//!
//! # Formats
//!
//! **Text**: one process per line, `arrival burst [priority]`, separated
//! by whitespace. Blank lines and everything after `#` are ignored. IDs
//! are assigned 1-based in line order.
//!
//! ```text
//! # arrival burst priority
//! 0 5 2
//! 1 3 1
//! ```
//!
//! **JSON**: a serialized [`SimulationRequest`].

use crate::models::{Process, ProcessId, Ticks};
use crate::scheduler::SimulationRequest;
use crate::validation::{ValidationError, ValidationErrorKind};

/// Parses a text workload.
///
/// Collects every malformed line rather than stopping at the first.
pub fn parse_text(text: &str) -> Result<Vec<Process>, Vec<ValidationError>> {
    let mut processes = Vec::new();
    let mut errors = Vec::new();

    for (line_no, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        let id = (processes.len() + errors.len() + 1) as ProcessId;
        match parse_line(id, line) {
            Ok(process) => processes.push(process),
            Err(message) => errors.push(ValidationError::new(
                ValidationErrorKind::Parse,
                format!("line {}: {message}", line_no + 1),
            )),
        }
    }

    if errors.is_empty() {
        Ok(processes)
    } else {
        Err(errors)
    }
}

fn parse_line(id: ProcessId, line: &str) -> Result<Process, String> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if !(2..=3).contains(&fields.len()) {
        return Err(format!(
            "expected 'arrival burst [priority]', got {} field(s)",
            fields.len()
        ));
    }

    let arrival: Ticks = parse_field("arrival", fields[0])?;
    let burst: Ticks = parse_field("burst", fields[1])?;
    let priority: i32 = match fields.get(2) {
        Some(field) => parse_field("priority", field)?,
        None => 0,
    };

    Ok(Process::new(id, arrival, burst).with_priority(priority))
}

fn parse_field<T: std::str::FromStr>(name: &str, field: &str) -> Result<T, String> {
    field
        .parse()
        .map_err(|_| format!("invalid {name} '{field}'"))
}

/// Parses a JSON simulation request.
pub fn parse_json_request(json: &str) -> Result<SimulationRequest, ValidationError> {
    serde_json::from_str(json).map_err(|e| {
        ValidationError::new(ValidationErrorKind::Parse, format!("invalid request JSON: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Algorithm;

    #[test]
    fn test_parse_text() {
        let text = "# arrival burst priority\n0 5 2\n\n1 3   # no priority\n";
        let processes = parse_text(text).unwrap();

        assert_eq!(
            processes,
            vec![
                Process::new(1, 0, 5).with_priority(2),
                Process::new(2, 1, 3),
            ]
        );
    }

    #[test]
    fn test_parse_text_collects_errors() {
        let text = "0 5\nzero 3\n1\n2 2 x\n";
        let errors = parse_text(text).unwrap_err();

        assert_eq!(errors.len(), 3);
        assert!(errors.iter().all(|e| e.kind == ValidationErrorKind::Parse));
        assert!(errors[0].message.starts_with("line 2"));
        assert!(errors[0].message.contains("arrival"));
        assert!(errors[2].message.contains("priority"));
    }

    #[test]
    fn test_parse_text_does_not_validate_values() {
        // Range checks belong to validation, not parsing
        let processes = parse_text("-1 0").unwrap();
        assert_eq!(processes[0].arrival, -1);
        assert_eq!(processes[0].burst, 0);
    }

    #[test]
    fn test_parse_empty_text() {
        assert!(parse_text("").unwrap().is_empty());
        assert!(parse_text("# nothing\n\n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_json_request() {
        let json = r#"{"algorithm":"sjf","processes":[{"id":1,"arrival":0,"burst":2}]}"#;
        let request = parse_json_request(json).unwrap();
        assert_eq!(request.algorithm, Algorithm::Sjf);
        assert_eq!(request.processes.len(), 1);
        assert!(request.quantum.is_none());
    }

    #[test]
    fn test_parse_json_rejects_unknown_algorithm() {
        let json = r#"{"algorithm":"lottery","processes":[]}"#;
        let err = parse_json_request(json).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::Parse);
    }
}
