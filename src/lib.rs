//! A small, bidirectional URL routing table.
//!
//! ```rust
//! use routemap::{Endpoint, Router};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let hello = Endpoint::new("hello", |params| format!("Hello {}!", params.get("name").unwrap()));
//!
//! let mut router = Router::new();
//! router.register("/hello/<name>", hello.clone(), ["GET"])?;
//!
//! // path to handler
//! let matched = router.get("/hello/world")?;
//! assert_eq!(matched.handler, &hello);
//! assert_eq!(matched.params.get("name"), Some("world"));
//!
//! // handler to path
//! assert_eq!(router.url_for(&hello, [("name", "world")])?, "/hello/world");
//! # Ok(())
//! # }
//! ```
//!
//! # Templates
//!
//! A template is a literal path, optionally ending in a single parameter.
//! `<name>` captures one or more word characters (`[A-Za-z0-9_]`) and
//! `<int:name>` captures one or more ASCII digits. Captured values are
//! returned as strings in both cases; use [`Params::parse`] to convert them.
//!
//! ```rust
//! use routemap::Router;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut router = Router::new();
//! router.register("/post/<int:id>", "post", ["GET"])?;
//!
//! let matched = router.get("/post/20")?;
//! assert_eq!(matched.params.get("id"), Some("20"));
//! assert!(router.get("/post/abc").is_err());
//! # Ok(())
//! # }
//! ```
//!
//! # Methods
//!
//! Handlers are registered under any of `GET`, `POST`, `PUT` and `DELETE`.
//! By default [`Router::dispatch`] only checks that the request method is
//! one of those; enable [`Router::handle_method_not_allowed`] to also
//! require that the matched handler was registered under it.
#![deny(clippy::all)]
#![forbid(unsafe_code)]

#[macro_use]
extern crate log;

mod error;
mod handler;
mod method;
mod params;
mod route;
mod router;
mod template;

pub use error::{InsertError, MatchError, UrlError};
pub use handler::{Endpoint, Handler};
pub use method::{Method, UnknownMethod};
pub use params::{Params, ParamsIter};
pub use router::{Match, Router};
