//! Search, sort and field filters for table views.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Sort direction sent as `sortOrder`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Asc),
            "desc" | "descending" => Ok(SortOrder::Desc),
            other => Err(format!("unknown sort order '{}'", other)),
        }
    }
}

/// Filters applied to a list endpoint.
///
/// `sort_order` is only sent together with `sort_by`. Extra `fields` are
/// emitted sorted by key so identical filters always produce identical URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableFilters {
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: SortOrder,
    pub fields: BTreeMap<String, String>,
}

impl TableFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    pub fn with_sort(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.sort_by = Some(field.into());
        self.sort_order = order;
        self
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Check whether no filter would be sent.
    pub fn is_empty(&self) -> bool {
        self.to_query().is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Query pairs in a stable order: `search`, `sortBy`, `sortOrder`, then
    /// the extra fields by key. Blank values are dropped.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();

        if let Some(search) = non_blank(self.search.as_deref()) {
            pairs.push(("search".to_string(), search.to_string()));
        }
        if let Some(sort_by) = non_blank(self.sort_by.as_deref()) {
            pairs.push(("sortBy".to_string(), sort_by.to_string()));
            pairs.push(("sortOrder".to_string(), self.sort_order.to_string()));
        }
        for (key, value) in self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str())) {
            if let (Some(key), Some(value)) = (non_blank(Some(key)), non_blank(Some(value))) {
                pairs.push((key.to_string(), value.to_string()));
            }
        }

        pairs
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
