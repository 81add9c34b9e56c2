//! Typed list endpoints.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;

use super::{CourseRegistration, Project, Score, Task};

/// A record type served by a paginated list endpoint.
pub trait Resource: DeserializeOwned + Send + 'static {
    /// Path of the list endpoint, relative to the API base URL.
    const ENDPOINT: &'static str;
    /// Human-readable plural name.
    const NAME: &'static str;

    /// One-line description for plain-text listings.
    fn summary(&self) -> String;
}

/// Resource selector used by the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Projects,
    Tasks,
    Scores,
    Registrations,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Projects,
        ResourceKind::Tasks,
        ResourceKind::Scores,
        ResourceKind::Registrations,
    ];

    pub fn endpoint(&self) -> &'static str {
        match self {
            ResourceKind::Projects => Project::ENDPOINT,
            ResourceKind::Tasks => Task::ENDPOINT,
            ResourceKind::Scores => Score::ENDPOINT,
            ResourceKind::Registrations => CourseRegistration::ENDPOINT,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ResourceKind::Projects => Project::NAME,
            ResourceKind::Tasks => Task::NAME,
            ResourceKind::Scores => Score::NAME,
            ResourceKind::Registrations => CourseRegistration::NAME,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "projects" | "project" => Ok(ResourceKind::Projects),
            "tasks" | "task" => Ok(ResourceKind::Tasks),
            "scores" | "score" => Ok(ResourceKind::Scores),
            "registrations" | "registration" | "courses" => Ok(ResourceKind::Registrations),
            other => Err(format!("unknown resource '{}'", other)),
        }
    }
}
