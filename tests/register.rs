use routemap::{Endpoint, InsertError, Method, Router};

struct RegisterTest(Vec<(&'static str, Result<(), InsertError>)>);

impl RegisterTest {
    fn run(self) {
        let mut router = Router::new();
        for (route, expected) in self.0 {
            let got = router.register(route, route.to_owned(), ["GET"]);
            assert_eq!(got, expected, "{route}");
        }
    }
}

fn invalid(template: &'static str, reason: &'static str) -> Result<(), InsertError> {
    Err(InsertError::InvalidTemplate {
        template: template.into(),
        reason,
    })
}

#[test]
fn accepted_templates() {
    RegisterTest(vec![
        ("/", Ok(())),
        ("/hello", Ok(())),
        ("/hello/", Ok(())),
        ("/hello/<name>", Ok(())),
        ("/author/<username>", Ok(())),
        ("/post/<int:id>", Ok(())),
        ("/user<id>", Ok(())),
        ("/<page>", Ok(())),
        ("//", Ok(())),
        ("/a_b/C_9", Ok(())),
    ])
    .run()
}

#[test]
fn malformed_templates() {
    RegisterTest(vec![
        ("", invalid("", "templates must begin with '/'")),
        ("hello", invalid("hello", "templates must begin with '/'")),
        (
            "/hello world",
            invalid(
                "/hello world",
                "literal segments may only contain word characters",
            ),
        ),
        (
            "/files/report.pdf",
            invalid(
                "/files/report.pdf",
                "literal segments may only contain word characters",
            ),
        ),
        (
            "/x/<name",
            invalid("/x/<name", "unterminated parameter placeholder"),
        ),
        (
            "/x/<>",
            invalid("/x/<>", "parameter names must be one or more word characters"),
        ),
    ])
    .run()
}

#[test]
fn placeholder_position() {
    RegisterTest(vec![
        (
            "/x/<a>/<b>",
            invalid("/x/<a>/<b>", "only one parameter placeholder is allowed"),
        ),
        (
            "/x/<int:a><b>",
            invalid("/x/<int:a><b>", "only one parameter placeholder is allowed"),
        ),
        (
            "/x/<a>/edit",
            invalid("/x/<a>/edit", "parameter placeholders must be the final segment"),
        ),
        (
            "/x/<a>/",
            invalid("/x/<a>/", "parameter placeholders must be the final segment"),
        ),
        (
            "/x/<a>>",
            invalid("/x/<a>>", "unexpected characters after parameter placeholder"),
        ),
        (
            "/x/<int:a>.json",
            invalid(
                "/x/<int:a>.json",
                "unexpected characters after parameter placeholder",
            ),
        ),
    ])
    .run()
}

#[test]
fn unsupported_type() {
    RegisterTest(vec![
        (
            "/x/<float:f>",
            invalid("/x/<float:f>", "unsupported parameter type"),
        ),
        (
            "/x/<Int:f>",
            invalid("/x/<Int:f>", "unsupported parameter type"),
        ),
        ("/x/<int:f>", Ok(())),
    ])
    .run()
}

#[test]
fn invalid_handler() {
    let mut router = Router::new();

    assert_eq!(
        router.register("/about", Endpoint::<()>::declared("about"), ["GET"]),
        Err(InsertError::InvalidHandler)
    );
    assert!(router.is_empty());
    assert!(router.handlers_for(Method::Get).is_empty());
}

#[test]
fn invalid_handler_is_checked_first() {
    let mut router = Router::new();

    assert_eq!(
        router.register("bad", Endpoint::<()>::declared("about"), ["BAD"]),
        Err(InsertError::InvalidHandler)
    );
}

#[test]
fn unknown_method_leaves_table_unchanged() {
    let mut router = Router::new();
    router.register("/", "index", ["GET", "POST"]).unwrap();

    assert_eq!(
        router.register("/about", "about", ["PUT", "HEAD"]),
        Err(InsertError::UnknownMethod {
            method: "HEAD".into()
        })
    );

    assert_eq!(router.len(), 1);
    assert_eq!(router.handlers_for(Method::Get), &["index"]);
    assert_eq!(router.handlers_for(Method::Post), &["index"]);
    assert!(router.handlers_for(Method::Put).is_empty());
    assert!(router.get("/about").is_err());
}

#[test]
fn method_lists_keep_duplicates() {
    let mut router = Router::new();
    router.register("/a", "shared", ["GET"]).unwrap();
    router.register("/b", "shared", ["get", "DELETE"]).unwrap();
    router.register("/c", "other", Vec::<String>::new()).unwrap();

    assert_eq!(router.handlers_for(Method::Get), &["shared", "shared"]);
    assert_eq!(router.handlers_for(Method::Delete), &["shared"]);
    assert!(router.handlers_for(Method::Post).is_empty());

    // a route registered under no method still matches
    assert_eq!(*router.get("/c").unwrap().handler, "other");
}

#[test]
fn all_handlers() {
    let mut router = Router::new();
    router.register("/a", "shared", ["GET"]).unwrap();
    router.register("/b/<id>", "shared", ["GET"]).unwrap();
    router.register("/c", "other", ["POST"]).unwrap();

    assert_eq!(
        router.all_handlers().collect::<Vec<_>>(),
        vec![&"shared", &"shared", &"other"]
    );
    assert_eq!(
        router.routes().map(|(template, _)| template).collect::<Vec<_>>(),
        vec!["/a", "/b/<id>", "/c"]
    );
}

#[test]
fn duplicates_replace_by_default() {
    let mut router = Router::new();
    router.register("/x/<name>", "first", ["GET"]).unwrap();
    router.register("/x/<other>", "second", ["GET"]).unwrap();
    router.register("/x/<int:id>", "third", ["GET"]).unwrap();

    assert_eq!(router.len(), 2);
    assert_eq!(
        router.all_handlers().collect::<Vec<_>>(),
        vec![&"second", &"third"]
    );
}

#[test]
fn duplicates_rejected() {
    let mut router = Router::new();
    router.reject_duplicates = true;

    router.register("/", "index", ["GET"]).unwrap();
    assert_eq!(
        router.register("/", "index", ["GET"]),
        Err(InsertError::Conflict { with: "/".into() })
    );

    router.register("/search/<query>", "search", ["GET"]).unwrap();
    assert_eq!(
        router.register("/search/<q>", "search", ["GET"]),
        Err(InsertError::Conflict {
            with: "/search/<query>".into()
        })
    );

    assert_eq!(router.len(), 2);
    assert_eq!(router.handlers_for(Method::Get), &["index", "search"]);
}
