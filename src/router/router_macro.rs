/// Declares a router in one expression.
///
/// ```
/// use srouter::{router, Handler, Response};
///
/// let r = router! {
///     GET "/users/:num" => Handler::from_fn(|p: &[&str]| Response::new(p[0].to_owned())),
///     POST "/users" => "Users@store",
///     ANY "/health" => Handler::from_fn(|_: &[&str]| Response::new("ok".to_owned()))
/// };
/// assert!(r.find("GET", "/users/7").is_some());
/// ```
#[macro_export]
macro_rules! router {
    {$($method:tt $pattern:expr => $handler:expr),+ $(,)?} => {{
        let mut __router = $crate::Router::new();
        $($crate::router!(@entry __router, $method, $pattern, $handler);)+
        __router
    }};

    {@entry $router:expr, GET, $pattern:expr, $handler:expr} => {
        $router.get($pattern, $handler)
    };
    {@entry $router:expr, POST, $pattern:expr, $handler:expr} => {
        $router.post($pattern, $handler)
    };
    {@entry $router:expr, PUT, $pattern:expr, $handler:expr} => {
        $router.put($pattern, $handler)
    };
    {@entry $router:expr, DELETE, $pattern:expr, $handler:expr} => {
        $router.delete($pattern, $handler)
    };
    {@entry $router:expr, HEAD, $pattern:expr, $handler:expr} => {
        $router.head($pattern, $handler)
    };
    {@entry $router:expr, OPTIONS, $pattern:expr, $handler:expr} => {
        $router.options($pattern, $handler)
    };
    {@entry $router:expr, ANY, $pattern:expr, $handler:expr} => {
        $router.any($pattern, $handler)
    };
}
