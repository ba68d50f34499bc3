//! Parameter types passed to and returned from the router.
//!
//! - [`HrefParam`] — one raw positional parameter of the href helper: the
//!   route name, a model, or the trailing query-params marker.
//! - [`QueryParams`] / [`QueryValue`] — named query parameters unwrapped from
//!   the marker and handed to [`Router::generate_url`](crate::Router::generate_url).
//! - [`RouteParams`] — dynamic segment values reported by
//!   [`Router::recognize`](crate::Router::recognize).
//!
//! # Example
//!
//! ```
//! use href_to::{HrefParam, QueryParams, QueryValue};
//!
//! let query: QueryParams = [("page", QueryValue::from(2))].into_iter().collect();
//! let params = vec![
//!     HrefParam::from("users.show"),
//!     HrefParam::from(5),
//!     HrefParam::QueryParams(query),
//! ];
//!
//! assert!(params[1].is_present());
//! assert!(!HrefParam::from("   ").is_present());
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

// ============================================================================
// HrefParam
// ============================================================================

/// Opaque model object passed as a positional route parameter.
///
/// The crate never inspects models; it only asks whether they are present.
/// Routers use [`route_key`](Self::route_key) to serialize a model into a
/// dynamic segment.
pub trait RouteObject: fmt::Debug + Send + Sync {
    /// Value a router may use for the dynamic segment this model fills.
    fn route_key(&self) -> Option<String>;

    /// Whether the model counts as present. Absent models are dropped
    /// before URL generation.
    fn is_present(&self) -> bool {
        true
    }
}

/// One raw parameter of the href helper.
///
/// The first element of a raw list is always the route name. A trailing
/// [`QueryParams`](Self::QueryParams) element is the query-params marker.
#[derive(Debug, Clone)]
pub enum HrefParam {
    /// Null or undefined
    Null,
    /// String value (route names, slugs, ids)
    Str(String),
    /// Numeric value
    Number(f64),
    /// Opaque model object
    Object(Arc<dyn RouteObject>),
    /// Query-params marker wrapping named query parameters
    QueryParams(QueryParams),
}

impl HrefParam {
    /// Presence check applied to models before URL generation.
    ///
    /// `Null` and blank strings are absent. Numbers are always present,
    /// including zero. Objects decide for themselves.
    pub fn is_present(&self) -> bool {
        match self {
            HrefParam::Null => false,
            HrefParam::Str(value) => !value.trim().is_empty(),
            HrefParam::Number(_) => true,
            HrefParam::Object(object) => object.is_present(),
            HrefParam::QueryParams(_) => true,
        }
    }

    /// The string payload, if this is a [`Str`](Self::Str).
    pub fn as_str(&self) -> Option<&str> {
        match self {
            HrefParam::Str(value) => Some(value),
            _ => None,
        }
    }

    /// The wrapped query parameters, if this is the query-params marker.
    pub fn as_query_params(&self) -> Option<&QueryParams> {
        match self {
            HrefParam::QueryParams(query) => Some(query),
            _ => None,
        }
    }

    /// Render the parameter as a URL segment value.
    ///
    /// Objects use [`RouteObject::route_key`]; `Null` and the query-params
    /// marker have no segment value.
    pub fn segment(&self) -> Option<String> {
        match self {
            HrefParam::Str(value) => Some(value.clone()),
            HrefParam::Number(value) => Some(value.to_string()),
            HrefParam::Object(object) => object.route_key(),
            HrefParam::Null | HrefParam::QueryParams(_) => None,
        }
    }
}

impl PartialEq for HrefParam {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (HrefParam::Null, HrefParam::Null) => true,
            (HrefParam::Str(a), HrefParam::Str(b)) => a == b,
            (HrefParam::Number(a), HrefParam::Number(b)) => a == b,
            (HrefParam::Object(a), HrefParam::Object(b)) => Arc::ptr_eq(a, b),
            (HrefParam::QueryParams(a), HrefParam::QueryParams(b)) => a == b,
            _ => false,
        }
    }
}

impl From<&str> for HrefParam {
    fn from(value: &str) -> Self {
        HrefParam::Str(value.to_string())
    }
}

impl From<String> for HrefParam {
    fn from(value: String) -> Self {
        HrefParam::Str(value)
    }
}

impl From<i64> for HrefParam {
    fn from(value: i64) -> Self {
        HrefParam::Number(value as f64)
    }
}

impl From<i32> for HrefParam {
    fn from(value: i32) -> Self {
        HrefParam::Number(f64::from(value))
    }
}

impl From<f64> for HrefParam {
    fn from(value: f64) -> Self {
        HrefParam::Number(value)
    }
}

impl From<QueryParams> for HrefParam {
    fn from(value: QueryParams) -> Self {
        HrefParam::QueryParams(value)
    }
}

impl<T: Into<HrefParam>> From<Option<T>> for HrefParam {
    fn from(value: Option<T>) -> Self {
        value.map_or(HrefParam::Null, Into::into)
    }
}

// ============================================================================
// QueryParams
// ============================================================================

/// Value of a single named query parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Null => Ok(()),
            QueryValue::Bool(value) => write!(f, "{}", value),
            QueryValue::Number(value) => write!(f, "{}", value),
            QueryValue::Str(value) => f.write_str(value),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Str(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Str(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Bool(value)
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        QueryValue::Number(f64::from(value))
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        QueryValue::Number(value)
    }
}

/// Named query parameters carried by the query-params marker.
///
/// Keys iterate in sorted order so generated URLs are deterministic.
///
/// # Example
///
/// ```
/// use href_to::{QueryParams, QueryValue};
///
/// let mut query = QueryParams::new();
/// query.insert("sort", "name desc");
/// query.insert("archived", QueryValue::Null);
///
/// assert_eq!(query.to_query_string(), "archived&sort=name%20desc");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    values: BTreeMap<String, QueryValue>,
}

impl QueryParams {
    /// Create empty query parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Get a value by key.
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.values.get(key)
    }

    /// Return `true` if the given key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Iterate over all `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &QueryValue)> {
        self.values.iter()
    }

    /// Return `true` if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Return the number of parameters.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Serialize into a percent-encoded query string (without the `?`).
    ///
    /// `Null` values are written as a bare key.
    pub fn to_query_string(&self) -> String {
        self.values
            .iter()
            .map(|(key, value)| match value {
                QueryValue::Null => urlencoding::encode(key).into_owned(),
                other => format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(&other.to_string())
                ),
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

// ============================================================================
// RouteParams
// ============================================================================

/// Dynamic segment values of a recognized route
///
/// # Example
///
/// ```
/// use href_to::RouteParams;
///
/// // Route pattern: users/:id
/// // Recognized path: users/123
/// let mut params = RouteParams::new();
/// params.insert("id", "123");
///
/// assert_eq!(params.get("id"), Some(&"123".to_string()));
/// assert_eq!(params.get_as::<i32>("id"), Some(123));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteParams {
    params: HashMap<String, String>,
}

impl RouteParams {
    /// Create empty route parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a parameter value by key.
    pub fn get(&self, key: &str) -> Option<&String> {
        self.params.get(key)
    }

    /// Get a parameter and parse it as a specific type
    ///
    /// Returns `None` if the parameter doesn't exist or cannot be parsed.
    pub fn get_as<T>(&self, key: &str) -> Option<T>
    where
        T: std::str::FromStr,
    {
        self.params.get(key)?.parse().ok()
    }

    /// Insert or overwrite a parameter.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.insert(key.into(), value.into());
    }

    /// Return `true` if the given key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Iterate over all `(key, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.params.iter()
    }

    /// Return `true` if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Return the number of parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Post {
        id: Option<u32>,
    }

    impl RouteObject for Post {
        fn route_key(&self) -> Option<String> {
            self.id.map(|id| id.to_string())
        }
    }

    #[derive(Debug)]
    struct EmptyCollection;

    impl RouteObject for EmptyCollection {
        fn route_key(&self) -> Option<String> {
            None
        }

        fn is_present(&self) -> bool {
            false
        }
    }

    #[test]
    fn test_presence_semantics() {
        assert!(!HrefParam::Null.is_present());
        assert!(!HrefParam::from("").is_present());
        assert!(!HrefParam::from(" \t").is_present());
        assert!(HrefParam::from("0").is_present());
        assert!(HrefParam::from(0).is_present());
        assert!(HrefParam::Object(Arc::new(Post { id: None })).is_present());
        assert!(!HrefParam::Object(Arc::new(EmptyCollection)).is_present());
        assert!(HrefParam::QueryParams(QueryParams::new()).is_present());
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(HrefParam::from(None::<&str>), HrefParam::Null);
        assert_eq!(HrefParam::from(Some("x")), HrefParam::from("x"));
    }

    #[test]
    fn test_segment_values() {
        assert_eq!(HrefParam::from("slug").segment(), Some("slug".to_string()));
        assert_eq!(HrefParam::from(42).segment(), Some("42".to_string()));
        assert_eq!(HrefParam::from(1.5).segment(), Some("1.5".to_string()));
        assert_eq!(
            HrefParam::Object(Arc::new(Post { id: Some(7) })).segment(),
            Some("7".to_string())
        );
        assert_eq!(HrefParam::Null.segment(), None);
    }

    #[test]
    fn test_object_equality_is_identity() {
        let post: Arc<dyn RouteObject> = Arc::new(Post { id: Some(1) });
        let same = HrefParam::Object(Arc::clone(&post));
        let other = HrefParam::Object(Arc::new(Post { id: Some(1) }));

        assert_eq!(HrefParam::Object(post), same);
        assert_ne!(same, other);
    }

    #[test]
    fn test_query_string_encoding() {
        let query: QueryParams = [
            ("q", QueryValue::from("a&b")),
            ("page", QueryValue::from(2)),
            ("draft", QueryValue::from(false)),
        ]
        .into_iter()
        .collect();

        assert_eq!(query.to_query_string(), "draft=false&page=2&q=a%26b");
    }

    #[test]
    fn test_query_params_overwrite() {
        let mut query = QueryParams::new();
        query.insert("page", 1);
        query.insert("page", 3);

        assert_eq!(query.len(), 1);
        assert_eq!(query.get("page"), Some(&QueryValue::Number(3.0)));
    }

    #[test]
    fn test_route_params_get_as() {
        let mut params = RouteParams::new();
        params.insert("id", "123");
        params.insert("active", "true");

        assert_eq!(params.get_as::<i32>("id"), Some(123));
        assert_eq!(params.get_as::<bool>("active"), Some(true));
        assert_eq!(params.get_as::<i32>("missing"), None);
        assert!(params.contains("id"));
        assert_eq!(params.len(), 2);
    }
}
