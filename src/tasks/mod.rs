//! To-do task models and their flat-file persistence.

pub mod store;

use std::fmt;

use chrono::NaiveDateTime;

use crate::timefmt;

pub use store::{TaskService, TaskStore};

/// A single to-do entry, persisted as one pipe-delimited line.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: u32,
    pub status: TaskStatus,
    pub date: NaiveDateTime,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Pending,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "PENDING",
            TaskStatus::Completed => "COMPLETED",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "PENDING" => Some(TaskStatus::Pending),
            "COMPLETED" => Some(TaskStatus::Completed),
            _ => None,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Task {
    pub fn new(id: u32, description: impl Into<String>) -> Self {
        Self {
            id,
            status: TaskStatus::Pending,
            date: timefmt::now(),
            description: description.into(),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// Renders the stored `ID|STATUS|DATE|DESCRIPTION` line.
    pub fn to_line(&self) -> String {
        format!(
            "{}|{}|{}|{}",
            self.id,
            self.status,
            timefmt::format_stamp(&self.date),
            self.description
        )
    }

    /// Parses one stored line. The description is the entire fourth field,
    /// so it may itself contain `|`. Returns `None` for malformed input,
    /// which the store skips.
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut parts = line.splitn(4, '|');
        let id = parts.next()?.trim().parse().ok()?;
        let status = TaskStatus::parse(parts.next()?.trim())?;
        let date = timefmt::parse_stamp(parts.next()?)?;
        let description = parts.next()?.to_string();
        Some(Self {
            id,
            status,
            date,
            description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_round_trips() {
        let task = Task::new(7, "buy milk");
        let parsed = Task::parse_line(&task.to_line()).expect("parse own line");
        assert_eq!(parsed, task);
    }

    #[test]
    fn description_may_contain_pipes() {
        let task = Task::new(1, "a | b | c");
        let parsed = Task::parse_line(&task.to_line()).expect("parse own line");
        assert_eq!(parsed.description, "a | b | c");
    }

    #[test]
    fn malformed_lines_are_rejected() {
        for line in [
            "",
            "just text",
            "x|PENDING|2025-01-01 10:00:00|desc",
            "1|UNKNOWN|2025-01-01 10:00:00|desc",
            "1|PENDING|not a date|desc",
            "1|PENDING|2025-01-01 10:00:00",
        ] {
            assert!(Task::parse_line(line).is_none(), "accepted `{}`", line);
        }
    }
}
