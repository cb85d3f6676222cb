//! System query option parsing and paging.

use url::form_urlencoded;

use crate::error::QueryOptionError;

const TOP: &str = "$top";
const SKIP: &str = "$skip";
const COUNT: &str = "$count";

/// Paging options accepted on collection endpoints.
///
/// Parameters without a `$` prefix are ignored so custom query parameters
/// can coexist with system options.
///
/// # Example
///
/// ```
/// use odata_support::QueryOptions;
///
/// let options = QueryOptions::parse("$top=2&$skip=1").expect("valid options");
/// assert_eq!(options.top(), Some(2));
/// assert_eq!(options.skip(), Some(1));
/// assert!(!options.count());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryOptions {
    top: Option<usize>,
    skip: Option<usize>,
    count: bool,
}

impl QueryOptions {
    /// Parses a raw (percent-encoded) query string.
    ///
    /// # Errors
    ///
    /// Returns [`QueryOptionError`] when an option is unsupported, repeated,
    /// or carries a value that is not a non-negative integer (`$top`,
    /// `$skip`) or boolean (`$count`).
    pub fn parse(query: &str) -> Result<Self, QueryOptionError> {
        let mut parsed = Self::default();
        let mut seen: Vec<String> = Vec::new();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            if !key.starts_with('$') {
                continue;
            }
            let name = key.into_owned();
            if seen.contains(&name) {
                return Err(QueryOptionError::DuplicateOption { option: name });
            }
            match name.as_str() {
                TOP => parsed.top = Some(parse_non_negative(TOP, &value)?),
                SKIP => parsed.skip = Some(parse_non_negative(SKIP, &value)?),
                COUNT => parsed.count = parse_bool(COUNT, &value)?,
                _ => return Err(QueryOptionError::UnsupportedOption { option: name.clone() }),
            }
            seen.push(name);
        }

        Ok(parsed)
    }

    /// Maximum number of items to return.
    #[must_use]
    pub const fn top(&self) -> Option<usize> {
        self.top
    }

    /// Number of leading items to omit.
    #[must_use]
    pub const fn skip(&self) -> Option<usize> {
        self.skip
    }

    /// Whether the total count of the unpaged collection was requested.
    #[must_use]
    pub const fn count(&self) -> bool {
        self.count
    }

    /// Applies `$skip` then `$top` to an ordered collection.
    ///
    /// The total count is taken before paging so clients can size their
    /// navigation.
    #[must_use]
    pub fn apply<T>(&self, items: Vec<T>) -> Page<T> {
        let total = items.len();
        let items = items
            .into_iter()
            .skip(self.skip.unwrap_or(0))
            .take(self.top.unwrap_or(usize::MAX))
            .collect();
        Page {
            items,
            total_count: self.count.then_some(total),
        }
    }
}

fn parse_non_negative(option: &str, value: &str) -> Result<usize, QueryOptionError> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|_| QueryOptionError::InvalidValue {
            option: option.to_owned(),
            value: value.to_owned(),
        })
}

fn parse_bool(option: &str, value: &str) -> Result<bool, QueryOptionError> {
    match value.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(QueryOptionError::InvalidValue {
            option: option.to_owned(),
            value: value.to_owned(),
        }),
    }
}

/// One page of a collection plus the optional unpaged count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items remaining after paging.
    pub items: Vec<T>,
    /// Size of the collection before paging, when `$count=true`.
    pub total_count: Option<usize>,
}

impl<T> Page<T> {
    /// Transforms every item while keeping the count.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
        }
    }
}
