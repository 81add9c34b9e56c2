use serde::{Deserialize, Serialize};

use super::{deserialize_id, deserialize_opt_id, Resource};

/// A mentor's score for a student's work.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub student_id: Option<String>,
    #[serde(default)]
    pub student_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub task_id: Option<String>,
    pub value: f64,
    #[serde(default)]
    pub max_value: Option<f64>,
    #[serde(default)]
    pub comment: Option<String>,
}

impl Resource for Score {
    const ENDPOINT: &'static str = "/scores";
    const NAME: &'static str = "scores";

    fn summary(&self) -> String {
        let who = self
            .student_name
            .as_deref()
            .or(self.student_id.as_deref())
            .unwrap_or("unknown student");
        match self.max_value {
            Some(max) => format!("#{} {}: {}/{}", self.id, who, self.value, max),
            None => format!("#{} {}: {}", self.id, who, self.value),
        }
    }
}
