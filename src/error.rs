use crate::method::{Method, UnknownMethod};

use std::fmt;

/// Represents errors that can occur when registering a route.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InsertError {
    /// The handler cannot be invoked.
    InvalidHandler,
    /// The template does not follow the path template grammar.
    InvalidTemplate {
        /// The rejected template.
        template: String,
        /// What is wrong with it.
        reason: &'static str,
    },
    /// One of the methods is not a recognized [`Method`].
    UnknownMethod {
        /// The offending method token, uppercased.
        method: String,
    },
    /// The template compiles to the same matcher as an existing route.
    ///
    /// Only returned when [`Router::reject_duplicates`](crate::Router::reject_duplicates)
    /// is enabled.
    Conflict {
        /// The template of the existing route.
        with: String,
    },
}

impl fmt::Display for InsertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHandler => write!(f, "router only accepts invocable handlers"),
            Self::InvalidTemplate { template, reason } => {
                write!(f, "route template '{}' can not be accepted: {}", template, reason)
            }
            Self::UnknownMethod { method } => {
                write!(f, "request method '{}' is not allowed", method)
            }
            Self::Conflict { with } => write!(
                f,
                "insertion failed due to conflict with previously registered route: {}",
                with
            ),
        }
    }
}

impl std::error::Error for InsertError {}

impl From<UnknownMethod> for InsertError {
    fn from(err: UnknownMethod) -> Self {
        InsertError::UnknownMethod { method: err.0 }
    }
}

/// A failed dispatch attempt.
///
/// ```
/// use routemap::{Endpoint, MatchError, Router};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut router = Router::new();
/// router.register("/home", Endpoint::new("home", |_| "Welcome!"), ["GET"])?;
///
/// // no routes match
/// assert_eq!(router.get("/foobar").unwrap_err(), MatchError::NotFound);
/// # Ok(())
/// # }
/// ```
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchError {
    /// No registered route matches the path.
    NotFound,
    /// The request method is not a recognized [`Method`].
    UnknownMethod {
        /// The offending method token, uppercased.
        method: String,
    },
    /// The matched handler was not registered under the request method.
    ///
    /// Only returned when [`Router::handle_method_not_allowed`](crate::Router::handle_method_not_allowed)
    /// is enabled.
    MethodNotAllowed {
        /// The methods the matched handler was registered under.
        allowed: Vec<Method>,
    },
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "matching route not found"),
            Self::UnknownMethod { method } => {
                write!(f, "request method '{}' is not allowed", method)
            }
            Self::MethodNotAllowed { allowed } => {
                write!(f, "method not allowed, expected one of [")?;
                for (i, method) in allowed.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", method)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl std::error::Error for MatchError {}

impl From<UnknownMethod> for MatchError {
    fn from(err: UnknownMethod) -> Self {
        MatchError::UnknownMethod { method: err.0 }
    }
}

/// A failed attempt to build a path with [`Router::url_for`](crate::Router::url_for).
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UrlError {
    /// The route needs a parameter that was not supplied.
    MissingArgument {
        /// The name of the missing parameter.
        name: String,
    },
    /// The handler is not bound to any route.
    NotRouted,
}

impl fmt::Display for UrlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingArgument { name } => write!(f, "required argument '{}' is missing", name),
            Self::NotRouted => write!(f, "handler doesn't match any routing rule"),
        }
    }
}

impl std::error::Error for UrlError {}
