use super::{Router, RouteEntry, RouteSlot, RouterError, ANY};

use crate::handler::Handler;
use crate::pattern;

use std::mem;

use smallvec::SmallVec;

macro_rules! define_verb {
    ($name:tt, $method:tt) => {
        pub fn $name(&mut self, path: &str, handler: impl Into<Handler>) -> &mut Self {
            self.map(&[$method], path, handler, &[])
        }
    };
}

impl Router {
    define_verb!(get, "GET");
    define_verb!(post, "POST");
    define_verb!(put, "PUT");
    define_verb!(delete, "DELETE");
    define_verb!(options, "OPTIONS");
    define_verb!(head, "HEAD");
    define_verb!(any, ANY);

    /// Registers `handler` for `path` under every method in `methods`
    /// (uppercased; the sentinel `"ANY"` matches every method), with
    /// call-site middleware appended after the current group middleware.
    ///
    /// Panics on a registration error; see [`Router::try_map`].
    pub fn map(
        &mut self,
        methods: &[&str],
        path: &str,
        handler: impl Into<Handler>,
        middleware: &[&str],
    ) -> &mut Self {
        if let Err(e) = self.add_route(methods, path, handler.into(), middleware) {
            panic!("{}: path = {:?}", e, path);
        }
        self
    }

    pub fn try_map(
        &mut self,
        methods: &[&str],
        path: &str,
        handler: impl Into<Handler>,
        middleware: &[&str],
    ) -> Result<&mut Self, RouterError> {
        self.add_route(methods, path, handler.into(), middleware)?;
        Ok(self)
    }

    /// Runs `f` with `prefix` (trimmed of surrounding slashes) appended to
    /// the current group prefix and `middleware` merged into the current
    /// group middleware list. Both are restored on every exit path,
    /// including a panic inside the callback.
    pub fn group(
        &mut self,
        prefix: &str,
        middleware: &[&str],
        f: impl FnOnce(&mut Router),
    ) -> &mut Self {
        let scope = GroupScope::enter(&mut *self, prefix, middleware);
        f(&mut *scope.router);
        drop(scope);
        self
    }

    /// Route key is group prefix + path, verbatim: no slash normalization.
    fn add_route(
        &mut self,
        methods: &[&str],
        path: &str,
        handler: Handler,
        middleware: &[&str],
    ) -> Result<(), RouterError> {
        if methods.is_empty() {
            return Err(RouterError::EmptyMethods);
        }

        let key = format!("{}{}", self.group_prefix, path);

        let methods: SmallVec<[Box<str>; 2]> = methods
            .iter()
            .map(|m| m.to_ascii_uppercase().into_boxed_str())
            .collect();

        let mut merged: Vec<Box<str>> = self.group_middleware.clone();
        merged.extend(middleware.iter().map(|&m| Box::from(m)));

        let entry = RouteEntry {
            methods,
            middleware: merged,
            handler,
        };

        if let Some(&i) = self.index.get(key.as_str()) {
            // same key again: alternates are a bucket of disjoint method sets
            let slot = &mut self.slots[i];
            let overlap = slot.primary.intersects(&entry.methods)
                || slot.alternates.iter().any(|a| a.intersects(&entry.methods));
            if overlap {
                return Err(RouterError::MethodOverlap { path: key.into() });
            }
            slot.alternates.push(entry);
        } else {
            let regex = pattern::compile(&key, &self.patterns)?;
            let key: Box<str> = key.into();
            self.index.insert(key.clone(), self.slots.len());
            self.slots.push(RouteSlot {
                key,
                regex,
                primary: entry,
                alternates: Vec::new(),
            });
        }
        Ok(())
    }
}

struct GroupScope<'a> {
    router: &'a mut Router,
    prev_prefix: String,
    prev_middleware: Vec<Box<str>>,
}

impl<'a> GroupScope<'a> {
    fn enter(router: &'a mut Router, prefix: &str, middleware: &[&str]) -> Self {
        let prev_prefix = router.group_prefix.clone();
        let prev_middleware = router.group_middleware.clone();

        let prefix = prefix.trim_matches('/');
        if !prefix.is_empty() {
            router.group_prefix.push('/');
            router.group_prefix.push_str(prefix);
        }
        router
            .group_middleware
            .extend(middleware.iter().map(|&m| Box::from(m)));

        Self {
            router,
            prev_prefix,
            prev_middleware,
        }
    }
}

impl Drop for GroupScope<'_> {
    fn drop(&mut self) {
        self.router.group_prefix = mem::take(&mut self.prev_prefix);
        self.router.group_middleware = mem::take(&mut self.prev_middleware);
    }
}
