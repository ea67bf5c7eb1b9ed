//! Query string serialization for endpoint parameters.

use chrono::{DateTime, SecondsFormat, Utc};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except the RFC 3986 unreserved characters is escaped, so a
/// space becomes `%20` and `~` stays as is.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Percent-encode a query key, query value or single path segment.
pub fn escape(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Str(String),
    Int(i64),
    UInt(u64),
    Bool(bool),
    DateTime(DateTime<Utc>),
    /// Query wire name of an enum value.
    Enum(&'static str),
}

impl QueryValue {
    /// Unescaped textual form of the value.
    pub fn to_query_string(&self) -> String {
        match self {
            Self::Str(s) => s.clone(),
            Self::Int(n) => n.to_string(),
            Self::UInt(n) => n.to_string(),
            Self::Bool(b) => if *b { "true" } else { "false" }.to_string(),
            Self::DateTime(dt) => dt.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            Self::Enum(name) => (*name).to_string(),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        Self::UInt(value.into())
    }
}

impl From<u64> for QueryValue {
    fn from(value: u64) -> Self {
        Self::UInt(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<DateTime<Utc>> for QueryValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value)
    }
}

/// Ordered list of query parameters. Absent values are dropped when added,
/// repeated keys are kept in the order they were pushed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryBuilder {
    params: Vec<(String, QueryValue)>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `key` if `value` is present.
    pub fn param<V: Into<QueryValue>>(mut self, key: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.params.push((key.to_string(), value.into()));
        }
        self
    }

    /// Add `key` once per value, e.g. `ids[]=1&ids[]=2`.
    pub fn params<V, I>(mut self, key: &str, values: I) -> Self
    where
        V: Into<QueryValue>,
        I: IntoIterator<Item = V>,
    {
        for value in values {
            self.params.push((key.to_string(), value.into()));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// `k1=v1&k2=v2...` with keys and values percent-encoded.
    pub fn to_query_string(&self) -> String {
        self.params
            .iter()
            .map(|(key, value)| format!("{}={}", escape(key), escape(&value.to_query_string())))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Join a relative endpoint path and its query string. A trailing `/` on the
/// path is removed and no `?` is added when there are no parameters.
pub fn build_request_url(path: &str, query: &QueryBuilder) -> String {
    let path = path.strip_suffix('/').unwrap_or(path);
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query.to_query_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::enums::{EventSortType, Ruleset};
    use chrono::TimeZone;
    use percent_encoding::percent_decode_str;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_absent_values_are_omitted() {
        let query = QueryBuilder::new()
            .param("sort", Some(EventSortType::IdAscending))
            .param::<String>("cursor_string", None);

        assert_eq!(build_request_url("events", &query), "events?sort=id_asc");
    }

    #[test]
    fn test_no_question_mark_without_params() {
        let query = QueryBuilder::new().param::<u32>("limit", None);
        assert_eq!(build_request_url("events/", &query), "events");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let query = QueryBuilder::new().param("mode", Some(Ruleset::Catch));
        assert_eq!(build_request_url("scores/", &query), "scores?mode=fruits");
    }

    #[test]
    fn test_order_and_repeated_keys_are_preserved() {
        let query = QueryBuilder::new()
            .params("ids[]", [3u32, 1, 2])
            .param("include_variant_statistics", Some(true))
            .param("legacy_only", Some(false));

        assert_eq!(
            query.to_query_string(),
            "ids%5B%5D=3&ids%5B%5D=1&ids%5B%5D=2&include_variant_statistics=true&legacy_only=false"
        );
        assert_eq!(query.len(), 5);
    }

    #[test]
    fn test_datetime_uses_explicit_utc_offset() {
        let date = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 5).unwrap();
        assert_eq!(QueryValue::from(date).to_query_string(), "2024-03-01T12:30:05Z");
    }

    #[test]
    fn test_values_round_trip_through_percent_decoding() {
        let raw = "a b&c=d/é?+%~*";
        let query = QueryBuilder::new().param("key with space", Some(raw));
        let encoded = query.to_query_string();

        assert!(!encoded.contains(' '));
        let (key, value) = encoded.split_once('=').unwrap();
        assert_eq!(percent_decode_str(key).decode_utf8().unwrap(), "key with space");
        assert_eq!(percent_decode_str(value).decode_utf8().unwrap(), raw);
    }

    #[test]
    fn test_only_unreserved_characters_stay_unescaped() {
        let query = QueryBuilder::new().param("query", Some("a b~*"));
        assert_eq!(query.to_query_string(), "query=a%20b~%2A");
        assert_eq!(escape("Aa0-._~"), "Aa0-._~");
        assert_eq!(escape("x+y"), "x%2By");
    }

    #[test]
    fn test_numbers_use_natural_form() {
        let query = QueryBuilder::new()
            .param("offset", Some(-5i64))
            .param("limit", Some(50u64));
        assert_eq!(query.to_query_string(), "offset=-5&limit=50");
    }
}
