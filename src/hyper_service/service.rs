use crate::Router;

use std::convert::Infallible;
use std::future::{self, Ready};
use std::sync::Arc;
use std::task::{Context, Poll};

use hyper::service::Service;

type Request = hyper::Request<hyper::Body>;
type Response = hyper::Response<hyper::Body>;

/// Hosting-server adapter: a cloneable hyper `Service` around a finished
/// router. Dispatch is synchronous, so every call returns a ready future.
#[derive(Clone)]
pub struct RouterService {
    router: Arc<Router>,
}

impl RouterService {
    pub fn new(router: Router) -> Self {
        Self::shared(Arc::new(router))
    }

    pub fn shared(router: Arc<Router>) -> Self {
        Self { router }
    }
}

impl Service<Request> for RouterService {
    type Response = Response;
    type Error = Infallible;
    type Future = Ready<Result<Response, Infallible>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let res = self.router.respond(&req);
        future::ready(Ok(res.map(hyper::Body::from)))
    }
}
