#![deny(unsafe_code)]

//! A tiny HTTP request router.
//!
//! Routes are declared per HTTP verb, optionally grouped under a shared
//! prefix and middleware list. Path templates may contain placeholder
//! tokens (`:any`, `:num`, `:all`, plus user-defined ones) which are
//! compiled to an anchored regex at registration time. Dispatch picks the
//! exact-literal route first, then scans pattern routes in registration
//! order, runs the route's middleware gates, and invokes its handler with
//! the captured path segments.
//!
//! ```
//! use srouter::{Handler, Response, Router};
//!
//! let mut router = Router::new();
//! router.get(
//!     "/hello/:any",
//!     Handler::from_fn(|params: &[&str]| Response::new(format!("hello, {}!", params[0]))),
//! );
//!
//! let res = router.dispatch("GET", "/hello/world").unwrap();
//! assert_eq!(res.body(), "hello, world!");
//! ```

mod handler;
mod middleware;
mod pattern;
mod router;

#[cfg(feature = "hyper-service")]
mod hyper_service;

pub use crate::handler::{Controller, Handler};
pub use crate::middleware::Middleware;
pub use crate::pattern::Patterns;
pub use crate::router::{DispatchError, Params, RouteMatch, Router, RouterError};

#[cfg(feature = "hyper-service")]
pub use crate::hyper_service::RouterService;

pub use http::{StatusCode, Version};

/// Response type produced by handlers and the built-in fallbacks.
pub type Response = http::Response<String>;
