//! Request options and their compilation into query parameters.
//!
//! Precedence, highest first:
//! 1. `params`: a raw parameter map used verbatim; every other option is
//!    ignored.
//! 2. `fields`, `sort`, `pagination`, `filters`, `filter`: shaped into
//!    `fields`, `sort`, `take`/`skip` and one `filter` tree.
//!
//! Simple `filters` are AND-ed together. A custom `filter` given next to
//! them becomes one more member of that AND group, nested as a subtree.
//! The access token is added last, whichever path was taken, when the
//! connector authenticates through the query string.

use daktela_client::{QueryParameters, ACCESS_TOKEN_PARAM};
use serde::Serialize;
use serde_json::Value;

use crate::types::{CompositeFilter, Filter, Pagination, SimpleFilter, Sort};

/// Options of a GET request. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    /// Raw query parameters. Overrides all other options.
    pub params: Option<QueryParameters>,
    /// Fields to be returned.
    pub fields: Option<Vec<String>>,
    /// Sort keys, primary first.
    pub sort: Option<Vec<Sort>>,
    /// Page window.
    pub pagination: Option<Pagination>,
    /// Simple filters merged by AND.
    pub filters: Option<Vec<SimpleFilter>>,
    /// Custom filter tree.
    pub filter: Option<CompositeFilter>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options carrying only raw parameters.
    pub fn from_params(params: QueryParameters) -> Self {
        Self {
            params: Some(params),
            ..Self::default()
        }
    }

    pub fn params(mut self, params: QueryParameters) -> Self {
        self.params = Some(params);
        self
    }

    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    pub fn sort(mut self, sort: impl IntoIterator<Item = Sort>) -> Self {
        self.sort = Some(sort.into_iter().collect());
        self
    }

    pub fn pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }

    pub fn filters(mut self, filters: impl IntoIterator<Item = SimpleFilter>) -> Self {
        self.filters = Some(filters.into_iter().collect());
        self
    }

    pub fn filter(mut self, filter: CompositeFilter) -> Self {
        self.filter = Some(filter);
        self
    }
}

/// How the connector authenticates.
///
/// Defaults to cookie auth without a token.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthMode {
    /// Send the token as the `c_user` cookie instead of a query parameter.
    pub cookie_auth: bool,
    pub access_token: Option<String>,
}

impl Default for AuthMode {
    fn default() -> Self {
        Self {
            cookie_auth: true,
            access_token: None,
        }
    }
}

impl std::fmt::Debug for AuthMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthMode")
            .field("cookie_auth", &self.cookie_auth)
            .field("access_token", &self.access_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl AuthMode {
    /// Token to be sent in the query string, if any.
    pub fn query_token(&self) -> Option<&str> {
        if self.cookie_auth {
            None
        } else {
            self.access_token.as_deref()
        }
    }

    /// Token to be sent as the session cookie, if any.
    pub fn cookie_token(&self) -> Option<&str> {
        if self.cookie_auth {
            self.access_token.as_deref()
        } else {
            None
        }
    }
}

/// Compile request options into the query parameters sent on the wire.
pub fn compile(options: Option<&RequestOptions>, auth: &AuthMode) -> QueryParameters {
    let mut params = match options {
        Some(RequestOptions {
            params: Some(raw), ..
        }) => raw.clone(),
        Some(options) => shape(options),
        None => QueryParameters::new(),
    };

    if let Some(token) = auth.query_token() {
        params.insert(ACCESS_TOKEN_PARAM, token);
    }

    params
}

fn shape(options: &RequestOptions) -> QueryParameters {
    let mut params = QueryParameters::new();

    if let Some(fields) = &options.fields {
        params.insert("fields", fields.clone());
    }

    if let Some(sort) = &options.sort {
        params.insert("sort", to_json(sort));
    }

    if let Some(pagination) = &options.pagination {
        params.insert("take", pagination.take);
        params.insert("skip", pagination.skip);
    }

    if let Some(filter) = filter_tree(options) {
        params.insert("filter", to_json(&filter));
    }

    params
}

fn filter_tree(options: &RequestOptions) -> Option<CompositeFilter> {
    let mut tree = options
        .filters
        .as_ref()
        .filter(|filters| !filters.is_empty())
        .map(|filters| CompositeFilter::and(filters.iter().cloned()));

    if let Some(custom) = options.filter.as_ref().and_then(prune) {
        match tree.as_mut() {
            Some(group) => group.filters.push(Filter::Composite(custom)),
            None => tree = Some(custom),
        }
    }

    tree
}

/// Copy of `filter` without empty groups, at any depth. A group left empty
/// once its members are pruned is dropped as well.
fn prune(filter: &CompositeFilter) -> Option<CompositeFilter> {
    let filters: Vec<Filter> = filter
        .filters
        .iter()
        .filter_map(|node| match node {
            Filter::Composite(group) => prune(group).map(Filter::Composite),
            Filter::Simple(simple) => Some(Filter::Simple(simple.clone())),
        })
        .collect();

    (!filters.is_empty()).then(|| CompositeFilter {
        logic: filter.logic.clone(),
        filters,
    })
}

// Derived impls over strings and vectors, serialization cannot fail.
fn to_json<T: Serialize + ?Sized>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}
