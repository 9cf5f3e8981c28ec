use crate::Response;

use std::fmt;

/// A controller addressable by method name.
///
/// Constructed with no arguments by the factory registered under its name;
/// `call` returns `None` when the named method does not exist, which the
/// dispatcher reports as a misconfiguration.
pub trait Controller {
    fn call(&self, method: &str, params: &[&str]) -> Option<Response>;
}

type HandlerFn = Box<dyn Fn(&[&str]) -> Response + Send + Sync>;

/// Route endpoint: a closure, or a `"Controller@method"` reference resolved
/// through the router's controller registry at dispatch time.
pub enum Handler {
    Func(HandlerFn),
    Named(Box<str>),
}

impl Handler {
    pub fn from_fn(f: impl Fn(&[&str]) -> Response + Send + Sync + 'static) -> Self {
        Handler::Func(Box::new(f))
    }
}

impl From<&str> for Handler {
    fn from(reference: &str) -> Self {
        Handler::Named(reference.into())
    }
}

impl From<String> for Handler {
    fn from(reference: String) -> Self {
        Handler::Named(reference.into_boxed_str())
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handler::Func(_) => f.write_str("Handler::Func"),
            Handler::Named(name) => f.debug_tuple("Handler::Named").field(name).finish(),
        }
    }
}

/// Splits `"Pkg/Path/Controller@method"` into `(controller, method)`:
/// only the last `/`-segment counts, split once on `@`.
pub(crate) fn split_reference(reference: &str) -> Option<(&str, &str)> {
    let last = reference.rsplit('/').next().unwrap_or(reference);
    let mut parts = last.splitn(2, '@');
    let controller = parts.next()?;
    let method = parts.next()?;
    if controller.is_empty() || method.is_empty() {
        return None;
    }
    Some((controller, method))
}
