use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{deserialize_id, deserialize_opt_id, Resource};

/// A task inside a research project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub project_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub assignee_id: Option<String>,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
}

impl Resource for Task {
    const ENDPOINT: &'static str = "/tasks";
    const NAME: &'static str = "tasks";

    fn summary(&self) -> String {
        let mut line = format!("#{} {}", self.id, self.title);
        if let Some(status) = &self.status {
            line.push_str(&format!(" [{}]", status));
        }
        if let Some(deadline) = &self.deadline {
            line.push_str(&format!(" due {}", deadline.format("%Y-%m-%d")));
        }
        line
    }
}
