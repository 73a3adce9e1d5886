use std::sync::Arc;

use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::header::ALLOW;
use hyper::server::conn::http1::Builder as ConnectionBuilder;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use routemap::{Endpoint, MatchError, Method, Router};
use tokio::net::TcpListener;

type Body = Full<Bytes>;

// Every handler renders a plain text body from the matched parameters.
type Handler = Endpoint<String>;

fn status(code: StatusCode) -> Response<Body> {
    Response::builder().status(code).body(Body::new(Bytes::new())).unwrap()
}

async fn route(router: Arc<Router<Handler>>, req: Request<Incoming>) -> hyper::Result<Response<Body>> {
    // methods outside of the routing table's set are never routable
    let method = match Method::try_from(req.method()) {
        Ok(method) => method,
        Err(_) => return Ok(status(StatusCode::METHOD_NOT_ALLOWED)),
    };

    match router.dispatch(req.uri().path(), method.as_str()) {
        Ok(found) => {
            let body = found.handler.call(&found.params).unwrap_or_default();
            Ok(Response::new(Body::from(body)))
        }
        // no route for this path
        Err(MatchError::NotFound) => Ok(status(StatusCode::NOT_FOUND)),
        // the route exists, but not for this method
        Err(MatchError::MethodNotAllowed { allowed }) => {
            let allow = allowed
                .iter()
                .map(|method| method.as_str())
                .collect::<Vec<_>>()
                .join(", ");

            let mut res = status(StatusCode::METHOD_NOT_ALLOWED);
            res.headers_mut().insert(ALLOW, allow.parse().unwrap());
            Ok(res)
        }
        Err(_) => Ok(status(StatusCode::METHOD_NOT_ALLOWED)),
    }
}

#[tokio::main]
async fn main() {
    let hello = Endpoint::new("hello", |params| {
        format!("Hello, {}!", params.get("name").unwrap_or("world"))
    });
    let post = Endpoint::new("post", |params| match params.parse::<u64>("id") {
        Some(Ok(id)) => format!("post #{}", id),
        _ => "no such post".to_owned(),
    });

    // Register every route before serving. The table is then shared
    // read-only between connections.
    let mut router = Router::new();
    router.handle_method_not_allowed = true;

    router
        .register("/hello/<name>", hello.clone(), ["GET"])
        .unwrap();
    router
        .register("/post/<int:id>", post.clone(), ["GET", "DELETE"])
        .unwrap();

    // GET / => links built from the table itself
    let links = format!(
        "try {} or {}",
        router.url_for(&hello, [("name", "routemap")]).unwrap(),
        router.url_for(&post, [("id", 20)]).unwrap(),
    );
    router
        .register("/", Endpoint::new("index", move |_| links.clone()), ["GET"])
        .unwrap();

    let listener = TcpListener::bind(("127.0.0.1", 3000)).await.unwrap();

    // boilerplate for the hyper service
    let router = Arc::new(router);

    loop {
        let router = router.clone();
        let (tcp, _) = listener.accept().await.unwrap();
        tokio::task::spawn(async move {
            if let Err(err) = ConnectionBuilder::new()
                .serve_connection(
                    TokioIo::new(tcp),
                    hyper::service::service_fn(|request| async {
                        route(router.clone(), request).await
                    }),
                )
                .await
            {
                println!("Error serving connection: {:?}", err);
            }
        });
    }
}
