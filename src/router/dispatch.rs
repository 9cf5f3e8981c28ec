use super::{DispatchError, Params, Router};

use crate::handler::{self, Handler};
use crate::Response;

use http::{StatusCode, Version};
use smallvec::SmallVec;

/// A selected route: its middleware chain, its handler and the path
/// segments captured by the pattern (empty for literal routes).
pub struct RouteMatch<'r, 'p> {
    pub middleware: &'r [Box<str>],
    pub handler: &'r Handler,
    pub matched: Params<'p>,
}

impl Router {
    /// Finds the route for `method` + `target` without running anything.
    ///
    /// The path is the target up to the first `?` or `#`. An exact key hit
    /// settles the lookup (no pattern scan, even when the method does not
    /// match); otherwise pattern routes are scanned in registration order
    /// and the first key whose regex matches the whole path *and* whose
    /// entry bucket contains the method wins. Method comparison is
    /// ASCII-case-insensitive; the `ANY` sentinel matches every method.
    pub fn find<'r, 'p>(&'r self, method: &str, target: &'p str) -> Option<RouteMatch<'r, 'p>> {
        let path = request_path(target);

        if let Some(&i) = self.index.get(path) {
            let slot = &self.slots[i];
            let entry = slot.select(method)?;
            tracing::debug!(route = &*slot.key, "exact route matched");
            return Some(RouteMatch {
                middleware: &entry.middleware,
                handler: &entry.handler,
                matched: Params::empty(),
            });
        }

        for slot in &self.slots {
            let regex = match &slot.regex {
                Some(r) => r,
                None => continue,
            };
            let caps = match regex.captures(path) {
                Some(c) => c,
                None => continue,
            };
            if let Some(entry) = slot.select(method) {
                let buf: SmallVec<[&'p str; 8]> =
                    caps.iter().skip(1).flatten().map(|m| m.as_str()).collect();
                tracing::debug!(route = &*slot.key, "pattern route matched");
                return Some(RouteMatch {
                    middleware: &entry.middleware,
                    handler: &entry.handler,
                    matched: Params::new(buf),
                });
            }
            // path matched but no method did: keep scanning later patterns
        }

        None
    }

    /// Full pipeline: find, run the middleware gates in order, invoke the
    /// handler with the captured segments.
    pub fn dispatch(&self, method: &str, target: &str) -> Result<Response, DispatchError> {
        let hit = self
            .find(method, target)
            .ok_or(DispatchError::RouteNotFound)?;

        for name in hit.middleware {
            let factory = match self.middleware.get(name) {
                Some(f) => f,
                None => {
                    tracing::error!(middleware = &**name, "middleware is not registered");
                    return Err(DispatchError::MiddlewareMisconfigured { name: name.clone() });
                }
            };
            if !factory().handle() {
                return Err(DispatchError::MiddlewareRejected { name: name.clone() });
            }
        }

        match hit.handler {
            Handler::Func(f) => Ok(f(&hit.matched)),
            Handler::Named(reference) => self.invoke_controller(reference, &hit.matched),
        }
    }

    /// Adapter entry for a hosting HTTP server: dispatches the request and
    /// turns non-response outcomes into minimal responses carrying the
    /// request's protocol version. Not-found yields a `404` body; a
    /// middleware rejection yields an empty 403; misconfigurations yield an
    /// empty 500 (the diagnostic was already logged).
    pub fn respond<B>(&self, req: &http::Request<B>) -> Response {
        let target = req
            .uri()
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or_else(|| req.uri().path());

        match self.dispatch(req.method().as_str(), target) {
            Ok(res) => res,
            Err(DispatchError::RouteNotFound) => {
                status_response(StatusCode::NOT_FOUND, "404", req.version())
            }
            Err(DispatchError::MiddlewareRejected { .. }) => {
                status_response(StatusCode::FORBIDDEN, "", req.version())
            }
            Err(_) => status_response(StatusCode::INTERNAL_SERVER_ERROR, "", req.version()),
        }
    }

    fn invoke_controller(
        &self,
        reference: &str,
        params: &[&str],
    ) -> Result<Response, DispatchError> {
        let (controller, method) = match handler::split_reference(reference) {
            Some(pair) => pair,
            None => {
                tracing::error!(handler = reference, "malformed controller reference");
                return Err(DispatchError::HandlerMisconfigured {
                    handler: reference.into(),
                    reason: "malformed controller reference",
                });
            }
        };

        let factory = match self.controllers.get(controller) {
            Some(f) => f,
            None => {
                tracing::error!(controller, "controller is not registered");
                return Err(DispatchError::HandlerMisconfigured {
                    handler: reference.into(),
                    reason: "controller is not registered",
                });
            }
        };

        match factory().call(method, params) {
            Some(res) => Ok(res),
            None => {
                tracing::error!(controller, method, "controller method not found");
                Err(DispatchError::HandlerMisconfigured {
                    handler: reference.into(),
                    reason: "controller method not found",
                })
            }
        }
    }
}

fn status_response(status: StatusCode, body: &str, version: Version) -> Response {
    let mut res = Response::new(body.to_owned());
    *res.status_mut() = status;
    *res.version_mut() = version;
    res
}

fn request_path(target: &str) -> &str {
    let end = target.find(|c| c == '?' || c == '#').unwrap_or(target.len());
    &target[..end]
}

#[cfg(test)]
mod tests {
    use super::request_path;

    #[test]
    fn query_and_fragment_are_discarded() {
        assert_eq!(request_path("/a/b?q=1"), "/a/b");
        assert_eq!(request_path("/a/b#frag"), "/a/b");
        assert_eq!(request_path("/a/b?q=1#frag"), "/a/b");
        assert_eq!(request_path("/a/b"), "/a/b");
    }
}
