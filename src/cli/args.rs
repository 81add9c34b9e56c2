//! Command-line argument parsing.
//!
//! Parses `std::env::args()` into a [`CliCommand`]. Long options take their
//! value either as the next argument or inline (`--page=3`).

use thiserror::Error;

use crate::filters::{SortOrder, TableFilters};
use crate::models::ResourceKind;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Fetch and print one page of a list endpoint
    List(ListArgs),
}

/// Options of the `list` command.
#[derive(Debug, Clone, PartialEq)]
pub struct ListArgs {
    pub resource: ResourceKind,
    pub page: i64,
    /// Overrides the configured default page size
    pub page_size: Option<i64>,
    pub filters: TableFilters,
}

impl ListArgs {
    pub fn new(resource: ResourceKind) -> Self {
        Self {
            resource,
            page: 1,
            page_size: None,
            filters: TableFilters::default(),
        }
    }
}

/// Invalid command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("missing resource; expected one of projects, tasks, scores, registrations")]
    MissingResource,
    #[error("unknown resource '{0}'")]
    UnknownResource(String),
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("option '{0}' needs a value")]
    MissingValue(String),
    #[error("option '{option}' expects a whole number, got '{value}'")]
    InvalidNumber { option: String, value: String },
    #[error("--filter expects KEY=VALUE, got '{0}'")]
    InvalidFilter(String),
}

pub const USAGE: &str = "\
Usage:
  campusboard list <projects|tasks|scores|registrations> [options]
  campusboard help
  campusboard --version

List options:
  --page N             page to show (default 1)
  --page-size N        items per page (default CAMPUSBOARD_PAGE_SIZE or 5)
  --search TEXT        free-text search
  --sort FIELD         sort by FIELD, ascending
  --desc               sort descending
  --filter KEY=VALUE   extra query filter, repeatable

Environment:
  CAMPUSBOARD_API_URL, CAMPUSBOARD_TOKEN, CAMPUSBOARD_TIMEOUT_SECS,
  CAMPUSBOARD_PAGE_SIZE, CAMPUSBOARD_PAGE_PARAM, CAMPUSBOARD_PAGE_SIZE_PARAM,
  CAMPUSBOARD_ZERO_BASED_PAGES, RUST_LOG";

/// Parse command-line arguments and return the command to run.
///
/// # Examples
///
/// ```
/// use campusboard::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["campusboard".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, UsageError>
where
    I: Iterator<Item = String>,
{
    // Skip the program name
    let args: Vec<String> = args.skip(1).collect();

    if args.iter().any(|a| a == "--version" || a == "-V") {
        return Ok(CliCommand::Version);
    }

    let mut iter = args.into_iter();
    match iter.next().as_deref() {
        None | Some("help") | Some("--help") | Some("-h") => Ok(CliCommand::Help),
        Some("list") => parse_list(iter).map(CliCommand::List),
        Some(other) => Err(UsageError::UnknownCommand(other.to_string())),
    }
}

fn parse_list<I>(mut args: I) -> Result<ListArgs, UsageError>
where
    I: Iterator<Item = String>,
{
    let resource = args.next().ok_or(UsageError::MissingResource)?;
    let resource = resource
        .parse::<ResourceKind>()
        .map_err(|_| UsageError::UnknownResource(resource))?;
    let mut list = ListArgs::new(resource);

    while let Some(arg) = args.next() {
        let (option, inline) = match arg.split_once('=') {
            Some((option, value)) if option.starts_with("--") => {
                (option.to_string(), Some(value.to_string()))
            }
            _ => (arg, None),
        };

        let mut value = |option: &str| {
            inline
                .clone()
                .or_else(|| args.next())
                .ok_or_else(|| UsageError::MissingValue(option.to_string()))
        };

        match option.as_str() {
            "--page" | "-p" => list.page = parse_number(&option, value(&option)?)?,
            "--page-size" | "-n" => {
                list.page_size = Some(parse_number(&option, value(&option)?)?)
            }
            "--search" | "-s" => list.filters.search = Some(value(&option)?),
            "--sort" => list.filters.sort_by = Some(value(&option)?),
            "--desc" => {
                if let Some(v) = inline.as_deref() {
                    return Err(UsageError::UnknownOption(format!("{}={}", option, v)));
                }
                list.filters.sort_order = SortOrder::Desc;
            }
            "--filter" | "-f" => {
                let raw = value(&option)?;
                let (key, val) = raw
                    .split_once('=')
                    .filter(|(key, _)| !key.trim().is_empty())
                    .ok_or_else(|| UsageError::InvalidFilter(raw.clone()))?;
                list.filters
                    .fields
                    .insert(key.trim().to_string(), val.trim().to_string());
            }
            _ => return Err(UsageError::UnknownOption(option)),
        }
    }

    Ok(list)
}

fn parse_number(option: &str, value: String) -> Result<i64, UsageError> {
    value
        .trim()
        .parse()
        .map_err(|_| UsageError::InvalidNumber {
            option: option.to_string(),
            value,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliCommand, UsageError> {
        let mut all = vec!["campusboard".to_string()];
        all.extend(args.iter().map(|a| a.to_string()));
        parse_args(all.into_iter())
    }

    fn parse_list_args(args: &[&str]) -> ListArgs {
        match parse(args) {
            Ok(CliCommand::List(list)) => list,
            other => panic!("expected list command, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(parse(&["--version"]), Ok(CliCommand::Version));
        assert_eq!(parse(&["-V"]), Ok(CliCommand::Version));
        assert_eq!(parse(&["list", "tasks", "-V"]), Ok(CliCommand::Version));
    }

    #[test]
    fn test_parse_help() {
        assert_eq!(parse(&[]), Ok(CliCommand::Help));
        assert_eq!(parse(&["help"]), Ok(CliCommand::Help));
        assert_eq!(parse(&["--help"]), Ok(CliCommand::Help));
    }

    #[test]
    fn test_parse_list_defaults() {
        let list = parse_list_args(&["list", "projects"]);
        assert_eq!(list, ListArgs::new(ResourceKind::Projects));
    }

    #[test]
    fn test_parse_list_all_options() {
        let list = parse_list_args(&[
            "list",
            "scores",
            "--page",
            "3",
            "--page-size=10",
            "--search",
            "thesis defense",
            "--sort",
            "value",
            "--desc",
            "--filter",
            "studentId=42",
            "-f",
            "semester = fall",
        ]);

        assert_eq!(list.resource, ResourceKind::Scores);
        assert_eq!(list.page, 3);
        assert_eq!(list.page_size, Some(10));
        assert_eq!(list.filters.search.as_deref(), Some("thesis defense"));
        assert_eq!(list.filters.sort_by.as_deref(), Some("value"));
        assert_eq!(list.filters.sort_order, SortOrder::Desc);
        assert_eq!(list.filters.fields.get("studentId").map(String::as_str), Some("42"));
        assert_eq!(list.filters.fields.get("semester").map(String::as_str), Some("fall"));
    }

    #[test]
    fn test_negative_page_is_accepted() {
        let list = parse_list_args(&["list", "tasks", "--page", "-2"]);
        assert_eq!(list.page, -2);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse(&["show"]),
            Err(UsageError::UnknownCommand("show".to_string()))
        );
        assert_eq!(parse(&["list"]), Err(UsageError::MissingResource));
        assert_eq!(
            parse(&["list", "grades"]),
            Err(UsageError::UnknownResource("grades".to_string()))
        );
        assert_eq!(
            parse(&["list", "tasks", "--page"]),
            Err(UsageError::MissingValue("--page".to_string()))
        );
        assert!(matches!(
            parse(&["list", "tasks", "--page", "two"]),
            Err(UsageError::InvalidNumber { .. })
        ));
        assert_eq!(
            parse(&["list", "tasks", "--filter", "oops"]),
            Err(UsageError::InvalidFilter("oops".to_string()))
        );
        assert_eq!(
            parse(&["list", "tasks", "--desc=false"]),
            Err(UsageError::UnknownOption("--desc=false".to_string()))
        );
        assert_eq!(
            parse(&["list", "tasks", "--verbose"]),
            Err(UsageError::UnknownOption("--verbose".to_string()))
        );
    }
}
