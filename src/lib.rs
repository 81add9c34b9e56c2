//! Campusboard - pagination and list plumbing for a role-based research
//! dashboard (students, mentors, deans, admins, staff).
//!
//! The core is [`pagination::PaginationState`], an owned page/page-size/total
//! triple that every table view drives. Around it sit the request
//! configuration, the API mutator and typed list endpoints.

pub mod adapters;
pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod filters;
pub mod logging;
pub mod models;
pub mod pagination;
pub mod request;
pub mod traits;
