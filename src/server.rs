use crate::Logger;
use hyper::{
    body::HttpBody,
    service::{make_service_fn, service_fn},
    Body, Method, Request, Response, StatusCode,
};
use percent_encoding::percent_decode_str;
use regex::Regex;
use std::{collections::HashMap, convert::Infallible, future::Future, net::SocketAddr, pin::Pin, str::Utf8Error, sync::Arc};

pub struct DynamicUri {
    regex: Regex,
    parameters: HashMap<String, usize>,
}

impl DynamicUri {
    pub fn new(uri: &str) -> Self {
        let regex = Regex::new(r"\{([^\{]*)\}").unwrap();
        let mut offset = 0;
        let mut index = 1;
        let mut chunks = Vec::new();
        let mut parameters = HashMap::new();
        for occurence in regex.find_iter(uri) {
            let range = occurence.range();
            let name = &uri[range.start + 1..range.end - 1];
            assert!(parameters.get(name).is_none(), "Duplicate parameter {} in {}", name, uri);
            parameters.insert(name.to_string(), index);
            chunks.push(regex::escape(&uri[offset..range.start]));
            chunks.push("([^/]+)".to_string());
            offset = range.end;
            index += 1;
        }
        chunks.push(regex::escape(&uri[offset..]));
        let regex = Regex::new(&format!("^{}$", chunks.join(""))).unwrap();
        Self { regex, parameters }
    }

    // Captured segments are percent-decoded and must be valid utf8.
    pub fn check(&self, uri: &str) -> Option<Result<HashMap<String, String>, Utf8Error>> {
        let captures = self.regex.captures(uri)?;
        Some(
            self.parameters
                .iter()
                .map(|(name, &index)| {
                    let value = percent_decode_str(&captures[index]).decode_utf8()?;
                    Ok((name.clone(), value.into_owned()))
                })
                .collect(),
        )
    }
}

type BoxedResponseFuture = Pin<Box<dyn Send + Future<Output = Response<Body>>>>;
type BoxedHandler<S> = Box<dyn Fn(HashMap<String, String>, Vec<u8>, Arc<S>) -> BoxedResponseFuture + Send + Sync>;

struct Route<S> {
    method: Method,
    dynamic_uri: DynamicUri,
    handler: BoxedHandler<S>,
}

impl<S> Route<S> {
    fn new(method: Method, uri: &str, handler: BoxedHandler<S>) -> Self {
        Self {
            method,
            dynamic_uri: DynamicUri::new(uri),
            handler,
        }
    }

    fn check(&self, method: &Method, path: &str) -> Option<Result<HashMap<String, String>, Utf8Error>> {
        if method == self.method {
            self.dynamic_uri.check(path)
        } else {
            None
        }
    }
}

pub struct Router<S> {
    routes: Vec<Route<S>>,
    state: Arc<S>,
    logger: Logger,
}

impl<S> Router<S> {
    pub fn new(state: Arc<S>, logger: Logger) -> Self {
        Self {
            routes: Vec::new(),
            state,
            logger,
        }
    }

    fn add<H, F>(&mut self, method: Method, uri: &str, handler: H)
    where
        H: 'static + Fn(HashMap<String, String>, Vec<u8>, Arc<S>) -> F + Send + Sync,
        F: 'static + Future<Output = Response<Body>> + Send,
    {
        self.routes.push(Route::new(
            method,
            uri,
            Box::new(move |parameters, body, state| Box::pin(handler(parameters, body, state))),
        ));
    }

    pub async fn route(&self, method: &Method, path: &str, body: Vec<u8>) -> Response<Body> {
        self.logger.log(format!("{} {}", method, path));
        for route in &self.routes {
            match route.check(method, path) {
                Some(Ok(parameters)) => return (route.handler)(parameters, body, self.state.clone()).await,
                Some(Err(_)) => return plain(StatusCode::BAD_REQUEST, "Invalid path encoding"),
                None => {}
            }
        }
        plain(StatusCode::NOT_FOUND, "Not Found")
    }
}

fn plain(status: StatusCode, message: &'static str) -> Response<Body> {
    let mut response = Response::new(Body::from(message));
    *response.status_mut() = status;
    response
}

pub struct Server<S> {
    router: Router<S>,
}

impl<S: 'static + Send + Sync> Server<S> {
    pub fn new(state: Arc<S>, logger: Logger) -> Self {
        Self {
            router: Router::new(state, logger),
        }
    }

    pub fn get<H, F>(&mut self, uri: &str, handler: H)
    where
        H: 'static + Fn(HashMap<String, String>, Vec<u8>, Arc<S>) -> F + Send + Sync,
        F: 'static + Future<Output = Response<Body>> + Send,
    {
        self.router.add(Method::GET, uri, handler);
    }

    pub fn post<H, F>(&mut self, uri: &str, handler: H)
    where
        H: 'static + Fn(HashMap<String, String>, Vec<u8>, Arc<S>) -> F + Send + Sync,
        F: 'static + Future<Output = Response<Body>> + Send,
    {
        self.router.add(Method::POST, uri, handler);
    }

    pub async fn route(&self, method: &Method, path: &str, body: Vec<u8>) -> Response<Body> {
        self.router.route(method, path, body).await
    }

    pub async fn run(self, address: SocketAddr) -> Result<(), hyper::Error> {
        let server = Arc::new(self);
        let make_service = make_service_fn(|_| {
            let server = server.clone();
            async {
                Ok::<_, Infallible>(service_fn(move |mut request: Request<Body>| {
                    let server = server.clone();
                    async move {
                        let mut body: Vec<u8> = Vec::new();
                        while let Some(chunk) = request.body_mut().data().await {
                            match chunk {
                                Ok(chunk) => body.extend_from_slice(&chunk),
                                Err(_) => return Ok::<_, Infallible>(plain(StatusCode::BAD_REQUEST, "Invalid body")),
                            }
                        }
                        Ok(server.route(request.method(), request.uri().path(), body).await)
                    }
                }))
            }
        });
        hyper::Server::try_bind(&address)?.serve(make_service).await
    }
}
