use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{deserialize_id, deserialize_opt_id, Resource};

/// A research project supervised by a mentor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub mentor_id: Option<String>,
    #[serde(default)]
    pub mentor_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Resource for Project {
    const ENDPOINT: &'static str = "/projects";
    const NAME: &'static str = "projects";

    fn summary(&self) -> String {
        let mut line = format!("#{} {}", self.id, self.title);
        if let Some(status) = &self.status {
            line.push_str(&format!(" [{}]", status));
        }
        if let Some(mentor) = &self.mentor_name {
            line.push_str(&format!(" (mentor: {})", mentor));
        }
        line
    }
}
