//! JSON response envelopes with OData control annotations.

use serde::Serialize;

use crate::options::Page;

/// Builds a context URL for an entity set or a single entity.
///
/// # Example
///
/// ```
/// use odata_support::context_url;
///
/// assert_eq!(context_url("/odata", "Books", false), "/odata/$metadata#Books");
/// assert_eq!(
///     context_url("/odata/", "Books", true),
///     "/odata/$metadata#Books/$entity"
/// );
/// ```
#[must_use]
pub fn context_url(service_root: &str, entity_set: &str, single_entity: bool) -> String {
    let root = service_root.trim_end_matches('/');
    if single_entity {
        format!("{root}/$metadata#{entity_set}/$entity")
    } else {
        format!("{root}/$metadata#{entity_set}")
    }
}

/// Collection payload: `{"@odata.context": ..., "@odata.count": ..., "value": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ODataCollection<T> {
    #[serde(rename = "@odata.context")]
    context: String,
    #[serde(rename = "@odata.count", skip_serializing_if = "Option::is_none")]
    count: Option<usize>,
    value: Vec<T>,
}

impl<T> ODataCollection<T> {
    /// Wraps a page of items under the given context URL.
    #[must_use]
    pub fn new(context: impl Into<String>, page: Page<T>) -> Self {
        Self {
            context: context.into(),
            count: page.total_count,
            value: page.items,
        }
    }
}

/// Single entity payload with its properties flattened beside the context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ODataEntity<T> {
    #[serde(rename = "@odata.context")]
    context: String,
    #[serde(flatten)]
    entity: T,
}

impl<T> ODataEntity<T> {
    /// Wraps an entity under the given context URL.
    #[must_use]
    pub fn new(context: impl Into<String>, entity: T) -> Self {
        Self {
            context: context.into(),
            entity,
        }
    }
}
