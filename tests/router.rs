use srouter::{Handler, Response, Router, RouterError};

use std::panic::{catch_unwind, AssertUnwindSafe};

fn tag(name: &'static str) -> Handler {
    Handler::from_fn(move |params: &[&str]| Response::new(format!("{}:{}", name, params.join(","))))
}

fn body(router: &Router, method: &str, target: &str) -> Option<String> {
    router.dispatch(method, target).ok().map(Response::into_body)
}

#[test]
fn literal_routes() {
    let mut router = Router::new();
    router
        .get("/", tag("root"))
        .get("/explore", tag("explore"))
        .post("/explore", tag("submit"));

    let cases: &[(&str, &str, Option<&str>)] = &[
        ("GET", "/", Some("root:")),
        ("GET", "/explore", Some("explore:")),
        ("get", "/explore", Some("explore:")),
        ("POST", "/explore", Some("submit:")),
        ("DELETE", "/explore", None),
        ("GET", "/explore/1", None),
    ];

    for &(method, target, expected) in cases {
        assert_eq!(body(&router, method, target).as_deref(), expected);
    }
}

#[test]
fn pattern_captures_in_order() {
    let mut router = Router::new();
    router
        .get("/users/:num", tag("user"))
        .get("/u/:num/p/:num", tag("post"))
        .get("/file/:all", tag("file"))
        .get("/seg/:any", tag("seg"));

    let cases: &[(&str, Option<&str>)] = &[
        ("/users/42", Some("user:42")),
        ("/users/abc", None),
        ("/u/1/p/2", Some("post:1,2")),
        ("/file/home/asd/.bashrc", Some("file:home/asd/.bashrc")),
        ("/seg/alpha", Some("seg:alpha")),
        ("/seg/a/b", None),
    ];

    for &(target, expected) in cases {
        assert_eq!(body(&router, "GET", target).as_deref(), expected);
    }
}

#[test]
fn exact_match_beats_pattern() {
    let mut router = Router::new();
    router
        .get("/users/:num", tag("pattern"))
        .get("/users/1", tag("literal"));

    assert_eq!(body(&router, "GET", "/users/1").as_deref(), Some("literal:"));
    assert_eq!(body(&router, "GET", "/users/2").as_deref(), Some("pattern:2"));
}

#[test]
fn exact_key_settles_the_lookup() {
    // a literal key hit with the wrong method is not-found, even though a
    // pattern route would accept the path
    let mut router = Router::new();
    router
        .get("/users/1", tag("literal"))
        .post("/users/:num", tag("pattern"));

    assert_eq!(body(&router, "POST", "/users/1"), None);
    assert_eq!(body(&router, "POST", "/users/2").as_deref(), Some("pattern:2"));
}

#[test]
fn first_registered_pattern_wins() {
    let mut router = Router::new();
    router
        .get("/x/:any", tag("first"))
        .get("/x/:num", tag("second"));

    assert_eq!(body(&router, "GET", "/x/42").as_deref(), Some("first:42"));
}

#[test]
fn method_mismatch_keeps_scanning_patterns() {
    let mut router = Router::new();
    router
        .get("/x/:num", tag("get-only"))
        .post("/:any/:num", tag("late"));

    assert_eq!(body(&router, "POST", "/x/42").as_deref(), Some("late:x,42"));
}

#[test]
fn alternates_select_by_method() {
    let mut router = Router::new();
    router
        .map(&["GET"], "/ping", tag("read"), &[])
        .map(&["POST", "PUT"], "/ping", tag("write"), &[]);

    assert_eq!(body(&router, "GET", "/ping").as_deref(), Some("read:"));
    assert_eq!(body(&router, "POST", "/ping").as_deref(), Some("write:"));
    assert_eq!(body(&router, "PUT", "/ping").as_deref(), Some("write:"));
    assert_eq!(body(&router, "DELETE", "/ping"), None);
}

#[test]
fn overlapping_alternate_is_rejected() {
    let mut router = Router::new();
    router.map(&["GET", "PUT"], "/ping", tag("a"), &[]);

    // uppercased before the disjointness check
    let err = router.try_map(&["put"], "/ping", tag("b"), &[]).unwrap_err();
    assert!(matches!(err, RouterError::MethodOverlap { .. }));

    // "ANY" intersects only the literal "ANY"
    assert!(router.try_map(&["ANY"], "/ping", tag("c"), &[]).is_ok());
    assert!(router.try_map(&["any"], "/ping", tag("d"), &[]).is_err());
    assert_eq!(body(&router, "DELETE", "/ping").as_deref(), Some("c:"));
}

#[test]
fn any_sentinel_matches_every_method() {
    let mut router = Router::new();
    router.any("/open", tag("open"));

    for method in &["GET", "POST", "PUT", "DELETE", "PATCH", "WEIRD"] {
        assert_eq!(body(&router, method, "/open").as_deref(), Some("open:"));
    }
}

#[test]
fn map_scenario() {
    let mut router = Router::new();
    router.map(&["GET", "POST"], "/ping", tag("ping"), &[]);

    assert_eq!(body(&router, "POST", "/ping").as_deref(), Some("ping:"));
    assert_eq!(body(&router, "DELETE", "/ping"), None);
}

#[test]
fn group_prefix_and_middleware() {
    let mut router = Router::new();
    router.group("api", &["Auth"], |api| {
        api.get("/users", tag("users"));
        api.map(&["POST"], "/users", tag("create"), &["Log"]);
        api.group("/v2/", &["Throttle"], |v2| {
            v2.get("/users", tag("users-v2"));
        });
    });
    router.get("/top", tag("top"));

    let hit = router.find("GET", "/api/users").unwrap();
    let names: Vec<&str> = hit.middleware.iter().map(|m| &**m).collect();
    assert_eq!(names, ["Auth"]);

    // group middleware precedes call-site middleware
    let hit = router.find("POST", "/api/users").unwrap();
    let names: Vec<&str> = hit.middleware.iter().map(|m| &**m).collect();
    assert_eq!(names, ["Auth", "Log"]);

    let hit = router.find("GET", "/api/v2/users").unwrap();
    let names: Vec<&str> = hit.middleware.iter().map(|m| &**m).collect();
    assert_eq!(names, ["Auth", "Throttle"]);

    // context restored after the group
    let hit = router.find("GET", "/top").unwrap();
    assert!(hit.middleware.is_empty());
    assert!(router.find("GET", "/users").is_none());
}

#[test]
fn group_context_survives_a_panicking_callback() {
    let mut router = Router::new();
    let result = catch_unwind(AssertUnwindSafe(|| {
        router.group("broken", &["Auth"], |g| {
            g.get("/a", tag("a"));
            panic!("registration failure");
        });
    }));
    assert!(result.is_err());

    router.get("/b", tag("b"));
    assert!(router.find("GET", "/b").unwrap().middleware.is_empty());
    assert!(router.find("GET", "/broken/b").is_none());
}

#[test]
fn no_slash_normalization() {
    let mut router = Router::new();
    router.group("api", &[], |api| {
        api.get("users", tag("glued"));
        api.get("//users", tag("double"));
    });

    assert_eq!(body(&router, "GET", "/apiusers").as_deref(), Some("glued:"));
    assert_eq!(body(&router, "GET", "/api//users").as_deref(), Some("double:"));
    assert_eq!(body(&router, "GET", "/api/users"), None);
}

#[test]
fn query_and_fragment_are_ignored() {
    let mut router = Router::new();
    router.get("/search/:any", tag("search"));

    assert_eq!(
        body(&router, "GET", "/search/rust?q=1#top").as_deref(),
        Some("search:rust")
    );
}

#[test]
fn custom_pattern_token() {
    let mut router = Router::new();
    router.define_pattern(":slug", "[a-z-]+");
    router.get("/posts/:slug", tag("post"));

    assert_eq!(
        body(&router, "GET", "/posts/hello-world").as_deref(),
        Some("post:hello-world")
    );
    assert_eq!(body(&router, "GET", "/posts/Hello"), None);
}

#[test]
fn registration_errors() {
    let mut router = Router::new();

    let err = router.try_map(&["GET"], "/x/:nope", tag("x"), &[]).unwrap_err();
    assert!(matches!(err, RouterError::UnknownToken { .. }));

    let err = router.try_map(&[], "/x", tag("x"), &[]).unwrap_err();
    assert!(matches!(err, RouterError::EmptyMethods));
}

#[test]
fn router_macro() {
    use srouter::router;

    let router = router! {
        GET "/users/:num" => tag("user"),
        POST "/users" => tag("create"),
        ANY "/health" => tag("health"),
    };

    assert_eq!(body(&router, "GET", "/users/9").as_deref(), Some("user:9"));
    assert_eq!(body(&router, "POST", "/users").as_deref(), Some("create:"));
    assert_eq!(body(&router, "PATCH", "/health").as_deref(), Some("health:"));
}
