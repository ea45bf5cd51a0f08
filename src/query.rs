//! Search query builder for the Freshdesk search endpoints.
//!
//! Freshdesk search takes a single expression of `field:value` terms joined
//! with `AND` / `OR`, wrapped in double quotes and passed as the `query`
//! parameter:
//!
//! ```text
//! /api/v2/search/tickets?query="priority:3 AND tag:'vip'"
//! ```
//!
//! Strings are single-quoted, numbers and `null` are bare.

use std::fmt;

/// A value on the right-hand side of a search term.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    /// Rendered bare: `priority:3`.
    Number(i64),
    /// Rendered single-quoted: `tag:'vip'`.
    Text(String),
    /// Rendered as `null`: `group_id:null`.
    Null,
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Number(value)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Text(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Text(value)
    }
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Number(n) => write!(f, "{}", n),
            QueryValue::Text(s) => write!(f, "'{}'", s.replace('\'', "\\'")),
            QueryValue::Null => f.write_str("null"),
        }
    }
}

/// A single search criterion.
#[derive(Debug, Clone, PartialEq)]
struct Term {
    field: String,
    condition: &'static str,
    value: QueryValue,
    /// Operator joining this term to the previous one.
    logical_operator: Option<&'static str>,
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}{}", self.field, self.condition, self.value)
    }
}

/// A search expression for tickets or contacts.
///
/// ```ignore
/// let query = Query::field("status", 2).and("tag", "vip");
/// let results = client.tickets().search(&query).await?;
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    terms: Vec<Term>,
    raw: Option<String>,
}

impl Query {
    /// Creates an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an expression that is already in Freshdesk syntax.
    pub fn raw(expression: impl Into<String>) -> Self {
        Self {
            terms: Vec::new(),
            raw: Some(expression.into()),
        }
    }

    /// Starts a query with an equality term.
    pub fn field(field: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        Self::new().push("AND", field, "", value)
    }

    /// Adds an equality term joined with `AND`.
    pub fn and(self, field: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.push("AND", field, "", value)
    }

    /// Adds an equality term joined with `OR`.
    pub fn or(self, field: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.push("OR", field, "", value)
    }

    /// Adds a `field:>value` term joined with `AND`.
    pub fn greater_than(self, field: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.push("AND", field, ">", value)
    }

    /// Adds a `field:<value` term joined with `AND`.
    pub fn less_than(self, field: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.push("AND", field, "<", value)
    }

    fn push(
        mut self,
        operator: &'static str,
        field: impl Into<String>,
        condition: &'static str,
        value: impl Into<QueryValue>,
    ) -> Self {
        let logical_operator = if self.is_empty() {
            None
        } else {
            Some(operator)
        };
        self.terms.push(Term {
            field: field.into(),
            condition,
            value: value.into(),
            logical_operator,
        });
        self
    }

    /// Returns true if the query has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty() && self.raw.as_deref().map_or(true, str::is_empty)
    }

    /// The expression in Freshdesk syntax, without the surrounding quotes.
    pub fn expression(&self) -> String {
        let mut out = self.raw.clone().unwrap_or_default();
        for term in &self.terms {
            if let Some(op) = term.logical_operator {
                out.push(' ');
                out.push_str(op);
                out.push(' ');
            }
            out.push_str(&term.to_string());
        }
        out
    }

    /// The `query="..."` parameter, URL-encoded, ready to append after `?`.
    pub fn url_safe(&self) -> String {
        format!(
            "query={}",
            urlencoding::encode(&format!("\"{}\"", self.expression()))
        )
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expression())
    }
}
