/// Registration-phase errors, returned by the `try_` variants. The
/// panicking variants (`map`, verb sugar, `define_pattern`) format these
/// into the panic message.
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error("unknown pattern token `:{token}` in {pattern:?}")]
    UnknownToken { token: Box<str>, pattern: Box<str> },

    #[error("pattern {pattern:?} does not compile")]
    BadPattern {
        pattern: Box<str>,
        #[source]
        source: regex::Error,
    },

    #[error("invalid pattern token {token:?}")]
    BadToken { token: Box<str> },

    #[error("method set overlaps an existing route at {path:?}")]
    MethodOverlap { path: Box<str> },

    #[error("method list can not be empty")]
    EmptyMethods,
}

/// Dispatch-phase outcomes other than a handler response.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("no route matches")]
    RouteNotFound,

    #[error("middleware {name:?} is not registered")]
    MiddlewareMisconfigured { name: Box<str> },

    #[error("middleware {name:?} rejected the request")]
    MiddlewareRejected { name: Box<str> },

    #[error("handler {handler:?} is misconfigured: {reason}")]
    HandlerMisconfigured {
        handler: Box<str>,
        reason: &'static str,
    },
}
