use serde::{Deserialize, Serialize};

use super::{deserialize_id, deserialize_opt_id, Resource};

/// A student's registration for a course.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CourseRegistration {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub course_id: Option<String>,
    #[serde(default)]
    pub course_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub student_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Resource for CourseRegistration {
    const ENDPOINT: &'static str = "/course-registrations";
    const NAME: &'static str = "registrations";

    fn summary(&self) -> String {
        let course = self
            .course_name
            .as_deref()
            .or(self.course_id.as_deref())
            .unwrap_or("unknown course");
        match &self.status {
            Some(status) => format!("#{} {} [{}]", self.id, course, status),
            None => format!("#{} {}", self.id, course),
        }
    }
}
