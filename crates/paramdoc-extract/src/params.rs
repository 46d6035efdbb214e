//! Path captures produced by the router.
//!
//! Routes rarely capture more than a handful of segments, so captures are
//! stored inline up to [`INLINE_CAPTURES`] before spilling to the heap.

use smallvec::SmallVec;

/// Maximum number of captures stored inline (stack allocated).
const INLINE_CAPTURES: usize = 4;

/// Named path captures from a route match, in capture order.
///
/// # Example
///
/// ```rust
/// use paramdoc_extract::PathParams;
///
/// let mut params = PathParams::new();
/// params.push("fishName", "blump");
///
/// assert_eq!(params.get("fishName"), Some("blump"));
/// assert_eq!(params.get("starId"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathParams {
    inner: SmallVec<[(String, String); INLINE_CAPTURES]>,
}

impl PathParams {
    /// Creates an empty capture set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a capture.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.inner.push((name.into(), value.into()));
    }

    /// Returns the value of the first capture with this name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if there are no captures.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of captures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns an iterator over `(name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PathParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            inner: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
