//! Vocabulary for pagination, sorting and filtering.
//!
//! These are plain values. Directions, operators and logics are open
//! strings: the constants below name the documented values, anything else
//! is passed through and left for the API to judge.

use serde::{Deserialize, Serialize};

/// Default number of rows to be returned.
pub const PAGINATION_TAKE: u64 = 100;

/// Default number of rows to be skipped.
pub const PAGINATION_SKIP: u64 = 0;

/// Ascending sort direction.
pub const SORT_ASCENDING: &str = "asc";

/// Descending sort direction.
pub const SORT_DESCENDING: &str = "desc";

/// Logical AND of a composite filter.
pub const FILTER_LOGIC_AND: &str = "and";

/// Logical OR of a composite filter.
pub const FILTER_LOGIC_OR: &str = "or";

fn default_take() -> u64 {
    PAGINATION_TAKE
}

/// Page window of a list request.
///
/// Missing keys fall back to [`PAGINATION_TAKE`] and [`PAGINATION_SKIP`]
/// when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Number of rows to be returned.
    #[serde(default = "default_take")]
    pub take: u64,
    /// Number of rows to be skipped.
    #[serde(default)]
    pub skip: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            take: PAGINATION_TAKE,
            skip: PAGINATION_SKIP,
        }
    }
}

impl Pagination {
    /// Pagination with explicit take and skip.
    pub fn new(take: u64, skip: u64) -> Self {
        Self { take, skip }
    }

    /// Pagination returning `take` rows from the start.
    pub fn with_take(take: u64) -> Self {
        Self {
            take,
            ..Self::default()
        }
    }
}

/// Sort key. The order of several sorts is significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    pub field: String,
    pub dir: String,
}

impl Sort {
    pub fn new(field: impl Into<String>, dir: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            dir: dir.into(),
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SORT_ASCENDING)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SORT_DESCENDING)
    }
}

/// Single `field operator value` predicate, e.g. `("name", "eq", "John")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleFilter {
    pub field: String,
    pub operator: String,
    pub value: String,
}

impl SimpleFilter {
    pub fn new(
        field: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }
}

/// Boolean combination of filters, forming a tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeFilter {
    pub logic: String,
    pub filters: Vec<Filter>,
}

impl CompositeFilter {
    pub fn new<I, F>(logic: impl Into<String>, filters: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Filter>,
    {
        Self {
            logic: logic.into(),
            filters: filters.into_iter().map(Into::into).collect(),
        }
    }

    /// All members must match.
    pub fn and<I, F>(filters: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Filter>,
    {
        Self::new(FILTER_LOGIC_AND, filters)
    }

    /// Any member must match.
    pub fn or<I, F>(filters: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Filter>,
    {
        Self::new(FILTER_LOGIC_OR, filters)
    }

    /// Append a member.
    pub fn push(&mut self, filter: impl Into<Filter>) {
        self.filters.push(filter.into());
    }
}

/// Node of a filter tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Filter {
    Composite(CompositeFilter),
    Simple(SimpleFilter),
}

impl From<SimpleFilter> for Filter {
    fn from(filter: SimpleFilter) -> Self {
        Filter::Simple(filter)
    }
}

impl From<CompositeFilter> for Filter {
    fn from(filter: CompositeFilter) -> Self {
        Filter::Composite(filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pagination_defaults() {
        let pagination = Pagination::default();
        assert_eq!(pagination.take, PAGINATION_TAKE);
        assert_eq!(pagination.skip, PAGINATION_SKIP);

        let pagination = Pagination::with_take(321);
        assert_eq!(pagination.take, 321);
        assert_eq!(pagination.skip, PAGINATION_SKIP);

        let pagination = Pagination::new(567, 250);
        assert_eq!(pagination.take, 567);
        assert_eq!(pagination.skip, 250);
    }

    #[test]
    fn test_pagination_keeps_values() {
        for (take, skip) in [(0, 0), (1, 0), (0, 1), (100, 900), (u64::MAX, u64::MAX)] {
            assert_eq!(Pagination::new(take, skip), Pagination { take, skip });
        }
    }

    #[test]
    fn test_pagination_deserialize_applies_defaults() {
        let pagination: Pagination = serde_json::from_str(r#"{"skip": 20}"#).unwrap();
        assert_eq!(pagination, Pagination::new(PAGINATION_TAKE, 20));

        let pagination: Pagination = serde_json::from_str("{}").unwrap();
        assert_eq!(pagination, Pagination::default());
    }

    #[test]
    fn test_sort() {
        let sort = Sort::new("field_xxx", SORT_ASCENDING);
        assert_eq!(sort.field, "field_xxx");
        assert_eq!(sort.dir, "asc");

        assert_eq!(Sort::desc("edited").dir, SORT_DESCENDING);
        assert_eq!(Sort::asc("title"), Sort::new("title", "asc"));
    }

    #[test]
    fn test_sort_direction_is_not_validated() {
        let sort = Sort::new("title", "sideways");
        assert_eq!(
            serde_json::to_value(&sort).unwrap(),
            json!({"field": "title", "dir": "sideways"})
        );
    }

    #[test]
    fn test_simple_filter() {
        let filter = SimpleFilter::new("field_yyy", "neq", "test_zzz");
        assert_eq!(filter.field, "field_yyy");
        assert_eq!(filter.operator, "neq");
        assert_eq!(filter.value, "test_zzz");
    }

    #[test]
    fn test_composite_filter_tree() {
        let mut tree = CompositeFilter::and([SimpleFilter::new("firstname", "eq", "John")]);
        tree.push(CompositeFilter::or([SimpleFilter::new("edited", "lte", "2023-12-31")]));

        assert_eq!(tree.logic, FILTER_LOGIC_AND);
        assert_eq!(tree.filters.len(), 2);
        assert_eq!(
            serde_json::to_value(&tree).unwrap(),
            json!({
                "logic": "and",
                "filters": [
                    {"field": "firstname", "operator": "eq", "value": "John"},
                    {"logic": "or", "filters": [
                        {"field": "edited", "operator": "lte", "value": "2023-12-31"}
                    ]}
                ]
            })
        );
    }

    #[test]
    fn test_filter_deserialize_untagged() {
        let tree: CompositeFilter = serde_json::from_value(json!({
            "logic": "or",
            "filters": [
                {"field": "a", "operator": "eq", "value": "1"},
                {"logic": "and", "filters": []}
            ]
        }))
        .unwrap();

        assert!(matches!(tree.filters[0], Filter::Simple(_)));
        assert!(matches!(tree.filters[1], Filter::Composite(_)));
    }
}
