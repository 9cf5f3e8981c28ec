/// Pre-handler gate: a fresh instance is built per dispatch and `handle`
/// decides whether dispatch continues. `false` aborts without a response
/// from the router (the middleware is expected to have produced one).
pub trait Middleware {
    fn handle(&self) -> bool;
}

impl<F> Middleware for F
where
    F: Fn() -> bool,
{
    fn handle(&self) -> bool {
        (self)()
    }
}
