use srouter::{Controller, Handler, Middleware, Response, Router, RouterService};

use std::convert::Infallible as Never;

use hyper::service::make_service_fn;

struct Users;

impl Controller for Users {
    fn call(&self, method: &str, params: &[&str]) -> Option<Response> {
        match method {
            "show" => Some(Response::new(format!("user #{}", params[0]))),
            _ => None,
        }
    }
}

#[tokio::main]
async fn main() {
    let mut router = Router::new();

    router
        .get(
            "/hello/:any",
            Handler::from_fn(|params: &[&str]| {
                Response::new(format!("hello, {}!", params[0]))
            }),
        )
        .get(
            "/file/:all",
            Handler::from_fn(|params: &[&str]| {
                Response::new(format!("access file: {}", params[0]))
            }),
        );

    router.group("api/v1", &["Auth"], |api| {
        api.get("/users/:num", "Users@show");
    });

    router
        .register_middleware("Auth", || -> Box<dyn Middleware> { Box::new(|| true) })
        .register_controller("Users", || -> Box<dyn Controller> { Box::new(Users) });

    let service = RouterService::new(router);
    let make = make_service_fn(move |_| {
        let service = service.clone();
        async move { Ok::<_, Never>(service) }
    });

    let addr = "127.0.0.1:3000";

    let server = hyper::Server::bind(&addr.parse().unwrap()).serve(make);

    println!("Server is listening on: http://{}", addr);
    println!("hello: http://{}/hello/world", addr);
    println!("api: http://{}/api/v1/users/42", addr);
    println!("404: http://{}/other/path", addr);
    println!();

    server.await.unwrap();
}
