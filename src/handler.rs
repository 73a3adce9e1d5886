use crate::params::Params;

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// A value that can be registered as the target of a route.
///
/// The router treats handlers as opaque: it stores them, hands them back
/// from [`dispatch`](crate::Router::dispatch), and compares them with
/// `PartialEq` in [`url_for`](crate::Router::url_for). The only question it
/// asks is whether the handler can actually be invoked. Registration fails
/// with [`InsertError::InvalidHandler`](crate::InsertError::InvalidHandler)
/// when it cannot.
pub trait Handler {
    /// Returns `true` if this handler can be called.
    fn is_invocable(&self) -> bool {
        true
    }
}

impl Handler for &str {}

impl Handler for String {}

impl<T: Handler + ?Sized> Handler for Arc<T> {
    fn is_invocable(&self) -> bool {
        (**self).is_invocable()
    }
}

impl<T: Handler + ?Sized> Handler for Box<T> {
    fn is_invocable(&self) -> bool {
        (**self).is_invocable()
    }
}

type HandlerFn<Res> = dyn for<'k, 'v> Fn(&Params<'k, 'v>) -> Res + Send + Sync;

/// A named, shareable request handler.
///
/// Clones share the same function, and two endpoints are equal only if they
/// carry the same name and the same function, so an `Endpoint` can be used
/// as the identity for reverse lookups:
///
/// ```rust
/// use routemap::{Endpoint, Router};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let hello = Endpoint::new("hello", |params| {
///     format!("Hello {}!", params.get("name").unwrap_or("stranger"))
/// });
///
/// let mut router = Router::new();
/// router.register("/hello/<name>", hello.clone(), ["GET"])?;
///
/// let matched = router.get("/hello/world")?;
/// assert_eq!(matched.handler.call(&matched.params), Some("Hello world!".to_owned()));
/// assert_eq!(router.url_for(&hello, [("name", "world")])?, "/hello/world");
/// # Ok(())
/// # }
/// ```
pub struct Endpoint<Res> {
    name: Cow<'static, str>,
    func: Option<Arc<HandlerFn<Res>>>,
}

impl<Res> Endpoint<Res> {
    /// Creates an endpoint that calls `f` with the bindings of a match.
    pub fn new<F>(name: impl Into<Cow<'static, str>>, f: F) -> Self
    where
        F: for<'k, 'v> Fn(&Params<'k, 'v>) -> Res + Send + Sync + 'static,
    {
        Endpoint {
            name: name.into(),
            func: Some(Arc::new(f)),
        }
    }

    /// Creates an endpoint that is known by name but has no function.
    ///
    /// Declared endpoints compare equal to each other by name. They are not
    /// invocable and cannot be registered.
    pub fn declared(name: impl Into<Cow<'static, str>>) -> Self {
        Endpoint {
            name: name.into(),
            func: None,
        }
    }

    /// Returns the endpoint's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invokes the endpoint, or returns `None` for a declared endpoint.
    pub fn call(&self, params: &Params<'_, '_>) -> Option<Res> {
        self.func.as_ref().map(|f| f(params))
    }
}

impl<Res> Handler for Endpoint<Res> {
    fn is_invocable(&self) -> bool {
        self.func.is_some()
    }
}

impl<Res> Clone for Endpoint<Res> {
    fn clone(&self) -> Self {
        Endpoint {
            name: self.name.clone(),
            func: self.func.clone(),
        }
    }
}

impl<Res> PartialEq for Endpoint<Res> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && match (&self.func, &other.func) {
                (Some(a), Some(b)) => Arc::ptr_eq(a, b),
                (None, None) => true,
                _ => false,
            }
    }
}

impl<Res> Eq for Endpoint<Res> {}

impl<Res> fmt::Debug for Endpoint<Res> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("name", &self.name)
            .field("invocable", &self.func.is_some())
            .finish()
    }
}
