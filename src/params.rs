use std::str::FromStr;
use std::{fmt, option};

/// A single URL parameter, consisting of a key and a value.
#[derive(PartialEq, Eq, Ord, PartialOrd, Copy, Clone)]
struct Param<'k, 'v> {
    // the key borrows from the route, the value from the matched path
    key: &'k str,
    value: &'v str,
}

/// The parameter bindings returned by a route match.
///
/// Routes carry at most one placeholder, so a match binds either nothing
/// or exactly one name. Values are always the raw captured text, even for
/// `<int:...>` placeholders.
///
/// ```rust
/// # use routemap::{Endpoint, Router};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// # let mut router = Router::new();
/// # router.register("/users/<int:id>", Endpoint::new("user", |_| ()), ["GET"])?;
/// let matched = router.get("/users/1")?;
///
/// // Iterate through the keys and values.
/// for (key, value) in matched.params.iter() {
///     println!("key: {}, value: {}", key, value);
/// }
///
/// // Get a specific value by name.
/// assert_eq!(matched.params.get("id"), Some("1"));
/// assert_eq!(matched.params.parse::<u32>("id"), Some(Ok(1)));
/// # Ok(())
/// # }
/// ```
#[derive(PartialEq, Eq, Ord, PartialOrd, Clone, Copy, Default)]
pub struct Params<'k, 'v> {
    param: Option<Param<'k, 'v>>,
}

impl<'k, 'v> Params<'k, 'v> {
    pub(crate) fn new() -> Self {
        Self { param: None }
    }

    pub(crate) fn one(key: &'k str, value: &'v str) -> Self {
        Self {
            param: Some(Param { key, value }),
        }
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.param.is_some() as usize
    }

    /// Returns `true` if the match bound no parameters.
    pub fn is_empty(&self) -> bool {
        self.param.is_none()
    }

    /// Returns the value bound to the given key.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&'v str> {
        let key = key.as_ref();
        self.param
            .filter(|param| param.key == key)
            .map(|param| param.value)
    }

    /// Parses the value bound to the given key.
    ///
    /// Returns `None` if the key is not bound.
    pub fn parse<T: FromStr>(&self, key: impl AsRef<str>) -> Option<Result<T, T::Err>> {
        self.get(key).map(str::parse)
    }

    /// Returns an iterator over the parameters in the list.
    pub fn iter(&self) -> ParamsIter<'k, 'v> {
        ParamsIter {
            inner: self.param.into_iter(),
        }
    }
}

impl fmt::Debug for Params<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'k, 'v> IntoIterator for &Params<'k, 'v> {
    type Item = (&'k str, &'v str);
    type IntoIter = ParamsIter<'k, 'v>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the keys and values of a route's [parameters](crate::Params).
pub struct ParamsIter<'k, 'v> {
    inner: option::IntoIter<Param<'k, 'v>>,
}

impl<'k, 'v> Iterator for ParamsIter<'k, 'v> {
    type Item = (&'k str, &'v str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|p| (p.key, p.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for ParamsIter<'_, '_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        let params = Params::new();
        assert!(params.is_empty());
        assert_eq!(params.len(), 0);
        assert!(params.get("").is_none());
        assert_eq!(params.iter().next(), None);
        assert_eq!(format!("{:?}", params), "{}");
    }

    #[test]
    fn single() {
        let params = Params::one("id", "42");
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("id"), Some("42"));
        assert_eq!(params.get("ID"), None);
        assert_eq!(params.parse::<u64>("id"), Some(Ok(42)));
        assert!(params.parse::<u64>("name").is_none());
        assert!(params.iter().eq([("id", "42")]));
        assert_eq!(params.iter().len(), 1);
        assert_eq!(format!("{:?}", params), r#"{"id": "42"}"#);
    }

    #[test]
    fn parse_failure_is_reported() {
        let params = Params::one("name", "abc");
        assert!(matches!(params.parse::<u8>("name"), Some(Err(_))));
    }
}
