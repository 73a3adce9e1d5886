//! `Router` is a small bidirectional URL routing table.
//!
//! Routes are registered from path templates:
//! ```ignore
//!  Syntax          Type
//!  /about          literal path
//!  <name>          named parameter, one or more word characters
//!  <int:name>      integer parameter, one or more decimal digits
//! ```
//!
//! A template may contain a single parameter, and only as its final
//! element:
//! ```ignore
//!  Path: /author/<username>
//!
//!  Requests:
//!   /author/jone            match: username="jone"
//!   /author/                no match
//!   /author/jone/posts      no match
//!
//!  Path: /post/<int:id>
//!
//!  Requests:
//!   /post/20                match: id="20"
//!   /post/abc               no match
//! ```
//!
//! Routes are tested in registration order and the first match wins. The
//! same table answers the inverse question with [`Router::url_for`]:
//! which path leads to this handler?
use crate::error::{InsertError, MatchError, UrlError};
use crate::handler::Handler;
use crate::method::Method;
use crate::params::Params;
use crate::route::CompiledRoute;

use std::fmt;

/// A successful match consisting of the registered handler and the URL
/// parameters bound by the route.
#[derive(Debug)]
pub struct Match<'r, 'p, H> {
    /// The handler stored under the matched route.
    pub handler: &'r H,
    /// The bindings extracted from the path. Empty if the route has no
    /// placeholder.
    pub params: Params<'r, 'p>,
}

// A compiled route together with the handler it dispatches to.
#[derive(Clone, Debug)]
struct Binding<H> {
    route: CompiledRoute,
    handler: H,
    methods: Vec<Method>,
}

impl<H> Binding<H> {
    // The registered methods, sorted and without repeats.
    fn allowed(&self) -> Vec<Method> {
        let mut allowed = self.methods.clone();
        allowed.sort();
        allowed.dedup();
        allowed
    }
}

/// A routing table mapping path templates and HTTP methods to handlers.
///
/// Registration mutates the table and needs `&mut self`; every lookup
/// takes `&self`. Register all routes up front and share the table behind
/// an `Arc` to dispatch from many threads without locking.
///
/// ```rust
/// use routemap::{Endpoint, Router};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let post = Endpoint::new("post", |params| params.get("id").map(str::to_owned));
///
/// let mut router = Router::new();
/// router.register("/post/<int:id>", post.clone(), ["GET", "DELETE"])?;
///
/// let matched = router.dispatch("/post/20", "delete")?;
/// assert_eq!(matched.handler, &post);
/// assert_eq!(matched.params.get("id"), Some("20"));
///
/// assert!(router.get("/post/abc").is_err());
/// assert_eq!(router.url_for(&post, [("id", 20)])?, "/post/20");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Router<H> {
    routes: Vec<Binding<H>>,

    // one handler list per recognized method, indexed by `Method::index`
    methods: [Vec<H>; 4],

    /// If enabled, [`dispatch`](Router::dispatch) checks that the matched
    /// handler was registered under the request method and fails with
    /// [`MatchError::MethodNotAllowed`] otherwise.
    ///
    /// Disabled by default: any recognized method is accepted once the path
    /// matches.
    pub handle_method_not_allowed: bool,

    /// If enabled, registering a template that compiles to the same matcher
    /// as an existing route fails with [`InsertError::Conflict`].
    ///
    /// Disabled by default: the later registration replaces the earlier one
    /// in place, keeping its position in the match order.
    pub reject_duplicates: bool,
}

impl<H> Router<H> {
    /// Construct a new router.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for a path template under the given methods.
    ///
    /// Method tokens are case-insensitive. The handler is appended to each
    /// method's handler list, duplicates included. Nothing is modified if
    /// any part of the registration is rejected.
    ///
    /// ```rust
    /// # use routemap::{InsertError, Router};
    /// let mut router = Router::new();
    /// assert!(router.register("/author/<username>", "author", ["GET"]).is_ok());
    ///
    /// assert!(matches!(
    ///     router.register("/author/<username>/posts", "posts", ["GET"]),
    ///     Err(InsertError::InvalidTemplate { .. })
    /// ));
    /// assert_eq!(
    ///     router.register("/about", "about", ["PATCH"]),
    ///     Err(InsertError::UnknownMethod { method: "PATCH".into() })
    /// );
    /// ```
    pub fn register<M>(&mut self, template: &str, handler: H, methods: M) -> Result<(), InsertError>
    where
        H: Handler + Clone,
        M: IntoIterator,
        M::Item: AsRef<str>,
    {
        if !handler.is_invocable() {
            return Err(InsertError::InvalidHandler);
        }

        let methods = methods
            .into_iter()
            .map(|token| token.as_ref().parse::<Method>())
            .collect::<Result<Vec<_>, _>>()?;

        let route = CompiledRoute::compile(template)?;

        let existing = self
            .routes
            .iter()
            .position(|binding| binding.route.same_matcher(&route));

        if let (Some(i), true) = (existing, self.reject_duplicates) {
            return Err(InsertError::Conflict {
                with: self.routes[i].route.template().to_owned(),
            });
        }

        for &method in &methods {
            self.methods[method.index()].push(handler.clone());
        }

        let binding = Binding {
            route,
            handler,
            methods,
        };

        match existing {
            Some(i) => {
                debug!(
                    "route '{}' replaces '{}'",
                    template,
                    self.routes[i].route.template()
                );
                self.routes[i] = binding;
            }
            None => {
                debug!("registered route '{}' for {:?}", template, binding.methods);
                self.routes.push(binding);
            }
        }

        Ok(())
    }

    // First binding, in registration order, whose matcher accepts `path`.
    fn find<'r, 'p>(&'r self, path: &'p str) -> Option<(&'r Binding<H>, Params<'r, 'p>)> {
        self.routes
            .iter()
            .find_map(|binding| binding.route.matches(path).map(|params| (binding, params)))
    }

    /// Find the handler and parameters registered for `path`.
    ///
    /// The method token is only validated once a route matches, so an
    /// unknown path is reported as [`MatchError::NotFound`] whatever the
    /// method.
    pub fn dispatch<'r, 'p>(
        &'r self,
        path: &'p str,
        method: &str,
    ) -> Result<Match<'r, 'p, H>, MatchError> {
        let (binding, params) = match self.find(path) {
            Some(found) => found,
            None => {
                trace!("no route matches {} '{}'", method, path);
                return Err(MatchError::NotFound);
            }
        };

        let method = method.parse::<Method>()?;

        if self.handle_method_not_allowed && !binding.methods.contains(&method) {
            return Err(MatchError::MethodNotAllowed {
                allowed: binding.allowed(),
            });
        }

        trace!(
            "{} '{}' matched route '{}'",
            method,
            path,
            binding.route.template()
        );

        Ok(Match {
            handler: &binding.handler,
            params,
        })
    }

    /// Find the handler and parameters registered for a `GET` of `path`.
    pub fn get<'r, 'p>(&'r self, path: &'p str) -> Result<Match<'r, 'p, H>, MatchError> {
        self.dispatch(path, Method::Get.as_str())
    }

    /// Build the path that leads to `handler`.
    ///
    /// The first route bound to `handler` is used. If it has a placeholder,
    /// `params` must contain its name; the value is substituted as text and
    /// is not validated against the placeholder type.
    ///
    /// ```rust
    /// # use routemap::{Router, UrlError};
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut router = Router::new();
    /// router.register("/hello/<name>", "hello", ["GET"])?;
    ///
    /// assert_eq!(router.url_for(&"hello", [("name", "world")])?, "/hello/world");
    /// assert_eq!(
    ///     router.url_for(&"hello", [("other", "world")]),
    ///     Err(UrlError::MissingArgument { name: "name".into() })
    /// );
    /// # Ok(())
    /// # }
    /// ```
    pub fn url_for<I, K, V>(&self, handler: &H, params: I) -> Result<String, UrlError>
    where
        H: PartialEq,
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: fmt::Display,
    {
        let binding = match self.routes.iter().find(|b| b.handler == *handler) {
            Some(binding) => binding,
            None => return Err(UrlError::NotRouted),
        };

        let path = match binding.route.param_name() {
            Some(name) => {
                let value = params
                    .into_iter()
                    .find(|(key, _)| key.as_ref() == name)
                    .map(|(_, value)| value)
                    .ok_or_else(|| UrlError::MissingArgument {
                        name: name.to_owned(),
                    })?;

                binding.route.build(Some(&value))
            }
            None => binding.route.build(None),
        };

        trace!(
            "built '{}' from route '{}'",
            path,
            binding.route.template()
        );

        Ok(path)
    }

    /// Build the path that leads to `handler`, supplying no parameters.
    pub fn path_for(&self, handler: &H) -> Result<String, UrlError>
    where
        H: PartialEq,
    {
        self.url_for(handler, None::<(&str, &str)>)
    }

    /// Returns the handler of every route, in match order.
    ///
    /// A handler bound to several routes appears once per route.
    pub fn all_handlers(&self) -> impl Iterator<Item = &H> + '_ {
        self.routes.iter().map(|binding| &binding.handler)
    }

    /// Returns every registered route as a `(template, handler)` pair, in
    /// match order.
    pub fn routes(&self) -> impl Iterator<Item = (&str, &H)> + '_ {
        self.routes
            .iter()
            .map(|binding| (binding.route.template(), &binding.handler))
    }

    /// Returns the handlers registered under `method`, in registration
    /// order.
    pub fn handlers_for(&self, method: Method) -> &[H] {
        &self.methods[method.index()]
    }

    /// Returns the methods the route matching `path` was registered under.
    ///
    /// ```rust
    /// # use routemap::{Method, Router};
    /// let mut router = Router::new();
    /// router.register("/products", "products", ["GET", "POST"]).unwrap();
    ///
    /// assert_eq!(router.allowed("/products"), vec![Method::Get, Method::Post]);
    /// assert!(router.allowed("/missing").is_empty());
    /// ```
    pub fn allowed(&self, path: &str) -> Vec<Method> {
        self.find(path)
            .map(|(binding, _)| binding.allowed())
            .unwrap_or_default()
    }

    /// Returns the number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if no route has been registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// The default router configuration
impl<H> Default for Router<H> {
    fn default() -> Self {
        Self {
            routes: Vec::new(),
            methods: Default::default(),
            handle_method_not_allowed: false,
            reject_duplicates: false,
        }
    }
}
