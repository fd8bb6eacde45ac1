//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: path resolution, method validation,
//! dispatch to the endpoint handlers and access logging.

use crate::config::AppState;
use crate::handler::endpoints;
use crate::http::{self, HttpResponse};
use crate::logger::{self, AccessLogEntry};
use hyper::body::Body;
use hyper::{Method, Request, StatusCode};
use std::convert::Infallible;
use std::error::Error as StdError;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

const ALLOW_READ: &str = "GET, HEAD, OPTIONS";
const ALLOW_SOLVE: &str = "POST, OPTIONS";

/// Resolved endpoint for a request path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    Root,
    Health,
    Topics,
    /// `/samples/{topic}`; the segment is not yet validated as a topic
    Samples(&'a str),
    Solve,
    NotFound,
}

impl<'a> Endpoint<'a> {
    pub fn resolve(path: &'a str) -> Self {
        match path {
            "/" => Self::Root,
            "/health" => Self::Health,
            "/topics" => Self::Topics,
            "/solve" => Self::Solve,
            other => other
                .strip_prefix("/samples/")
                .filter(|topic| !topic.is_empty() && !topic.contains('/'))
                .map_or(Self::NotFound, Self::Samples),
        }
    }

    /// Value of the `Allow` header for this endpoint
    pub const fn allow(self) -> &'static str {
        match self {
            Self::Solve => ALLOW_SOLVE,
            _ => ALLOW_READ,
        }
    }

    fn accepts(self, method: &Method) -> bool {
        match self {
            Self::Solve => *method == Method::POST,
            _ => *method == Method::GET || *method == Method::HEAD,
        }
    }
}

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: Option<SocketAddr>,
) -> Result<HttpResponse, Infallible>
where
    B: Body,
    B::Error: Into<Box<dyn StdError + Send + Sync>>,
{
    let started = Instant::now();
    let access_log = state.access_log_enabled();
    let mut entry = access_log.then(|| AccessLogEntry::from_request(&req, peer_addr));

    logger::log_headers_count(req.headers().len(), state.config.logging.show_headers);

    let response = route_request(req, &state).await;
    let response = http::with_common_headers(
        response,
        &state.config.http.server_name,
        state.config.http.enable_cors,
    );

    if let Some(entry) = entry.as_mut() {
        entry.finish(
            response.status().as_u16(),
            response.body().size_hint().exact().unwrap_or(0),
            started.elapsed(),
        );
        logger::log_access(entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Resolve the path, check the method and dispatch
async fn route_request<B>(req: Request<B>, state: &AppState) -> HttpResponse
where
    B: Body,
    B::Error: Into<Box<dyn StdError + Send + Sync>>,
{
    let path = req.uri().path().to_string();
    let endpoint = Endpoint::resolve(&path);
    let method = req.method().clone();
    let is_head = method == Method::HEAD;

    if endpoint == Endpoint::NotFound {
        return http::build_error_response(StatusCode::NOT_FOUND, "Not Found");
    }

    if method == Method::OPTIONS {
        return http::build_options_response(endpoint.allow(), state.config.http.enable_cors);
    }

    if !endpoint.accepts(&method) {
        logger::log_warning(&format!("Method not allowed: {method} {path}"));
        return http::build_405_response(endpoint.allow());
    }

    match endpoint {
        Endpoint::Root => endpoints::root(is_head),
        Endpoint::Health => endpoints::health(is_head),
        Endpoint::Topics => endpoints::topics(is_head),
        Endpoint::Samples(topic) => endpoints::samples(topic, is_head),
        Endpoint::Solve => {
            if let Some(resp) = check_body_size(&req, state.config.http.max_body_size) {
                return resp;
            }
            endpoints::solve(req.into_body(), state.config.http.max_body_size).await
        }
        Endpoint::NotFound => http::build_error_response(StatusCode::NOT_FOUND, "Not Found"),
    }
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size<B>(req: &Request<B>, max_body_size: u64) -> Option<HttpResponse> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_warning(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response(max_body_size))
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', relying on body limit"
                ));
                None
            }
            _ => None,
        },
    )
}
