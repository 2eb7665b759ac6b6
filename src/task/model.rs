#![forbid(unsafe_code)]

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::TtrackError;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Todo, Status::InProgress, Status::Done];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::InProgress => "in-progress",
            Status::Done => "done",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = TtrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(Status::Todo),
            "in-progress" => Ok(Status::InProgress),
            "done" => Ok(Status::Done),
            other => Err(TtrackError::InvalidStatus(other.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: u32,
    pub description: String,
    pub status: Status,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Task {
    #[must_use]
    pub fn new(id: u32, description: impl Into<String>) -> Self {
        let now = OffsetDateTime::now_utc();
        Self {
            id,
            description: description.into(),
            status: Status::Todo,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = OffsetDateTime::now_utc();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_wire_form() {
        for status in Status::ALL {
            assert_eq!(status.as_str().parse::<Status>().unwrap(), status);
        }
    }

    #[test]
    fn status_rejects_unknown_values() {
        let err = "bogus".parse::<Status>().unwrap_err();
        assert!(err.to_string().contains("bogus"));
        assert!(err.to_string().contains("todo, in-progress, done"));
    }

    #[test]
    fn status_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&Status::InProgress).unwrap(),
            "\"in-progress\""
        );
        let parsed: Status = serde_json::from_str("\"done\"").unwrap();
        assert_eq!(parsed, Status::Done);
    }

    #[test]
    fn new_task_defaults_to_todo_with_equal_timestamps() {
        let task = Task::new(1, "buy milk");
        assert_eq!(task.status, Status::Todo);
        assert_eq!(task.created_at, task.updated_at);
    }

    #[test]
    fn touch_never_moves_updated_at_before_created_at() {
        let mut task = Task::new(1, "buy milk");
        task.touch();
        assert!(task.updated_at >= task.created_at);
    }

    #[test]
    fn task_json_uses_spec_field_names() {
        let json = serde_json::to_value(Task::new(7, "x")).unwrap();
        let obj = json.as_object().unwrap();
        for key in ["id", "description", "status", "created_at", "updated_at"] {
            assert!(obj.contains_key(key), "missing field {key}");
        }
    }
}
