mod dispatch;
mod error;
mod params;
mod register;
mod router_macro;

pub use self::dispatch::RouteMatch;
pub use self::error::{DispatchError, RouterError};
pub use self::params::Params;

use crate::handler::{Controller, Handler};
use crate::middleware::Middleware;
use crate::pattern::Patterns;

use std::collections::HashMap;
use std::fmt;

use regex::Regex;
use smallvec::SmallVec;

pub(crate) const ANY: &str = "ANY";

type MiddlewareFactory = Box<dyn Fn() -> Box<dyn Middleware> + Send + Sync>;
type ControllerFactory = Box<dyn Fn() -> Box<dyn Controller> + Send + Sync>;

/// HTTP request router.
///
/// Registration (`&mut self`) and dispatch (`&self`) are separate phases;
/// a finished router is `Send + Sync` and can be shared behind an `Arc`.
#[derive(Default)]
pub struct Router {
    patterns: Patterns,
    slots: Vec<RouteSlot>,
    index: HashMap<Box<str>, usize>,
    group_prefix: String,
    group_middleware: Vec<Box<str>>,
    middleware: HashMap<Box<str>, MiddlewareFactory>,
    controllers: HashMap<Box<str>, ControllerFactory>,
}

/// One table position: everything registered under a single path key.
/// `regex` is `Some` iff the key contains placeholder tokens, compiled
/// once at registration.
struct RouteSlot {
    key: Box<str>,
    regex: Option<Regex>,
    primary: RouteEntry,
    alternates: Vec<RouteEntry>,
}

struct RouteEntry {
    methods: SmallVec<[Box<str>; 2]>,
    middleware: Vec<Box<str>>,
    handler: Handler,
}

impl RouteEntry {
    fn allows(&self, method: &str) -> bool {
        self.methods
            .iter()
            .any(|m| &**m == ANY || m.eq_ignore_ascii_case(method))
    }

    fn intersects(&self, methods: &[Box<str>]) -> bool {
        methods.iter().any(|m| self.methods.contains(m))
    }
}

impl RouteSlot {
    /// Primary entry first, then alternates in registration order.
    fn select(&self, method: &str) -> Option<&RouteEntry> {
        if self.primary.allows(method) {
            return Some(&self.primary);
        }
        self.alternates.iter().find(|e| e.allows(method))
    }
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extends the placeholder dictionary. Panics on a malformed token;
    /// see [`Patterns::define`] for the fallible form.
    pub fn define_pattern(&mut self, token: &str, fragment: &str) -> &mut Self {
        if let Err(e) = self.patterns.define(token, fragment) {
            panic!("{}", e);
        }
        self
    }

    pub fn patterns_mut(&mut self) -> &mut Patterns {
        &mut self.patterns
    }

    /// Registers a middleware factory under `name`. A route naming a
    /// middleware that was never registered fails dispatch as
    /// [`DispatchError::MiddlewareMisconfigured`].
    pub fn register_middleware(
        &mut self,
        name: &str,
        factory: impl Fn() -> Box<dyn Middleware> + Send + Sync + 'static,
    ) -> &mut Self {
        self.middleware.insert(name.into(), Box::new(factory));
        self
    }

    /// Registers a controller factory under `name`, resolving
    /// `"name@method"` handler references.
    pub fn register_controller(
        &mut self,
        name: &str,
        factory: impl Fn() -> Box<dyn Controller> + Send + Sync + 'static,
    ) -> &mut Self {
        self.controllers.insert(name.into(), Box::new(factory));
        self
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<&str> = self.slots.iter().map(|s| &*s.key).collect();
        f.debug_struct("Router").field("routes", &keys).finish()
    }
}
