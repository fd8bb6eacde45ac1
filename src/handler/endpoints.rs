//! Endpoint handlers
//!
//! Each function produces the complete response for one route.

use http_body_util::{BodyExt, LengthLimitError, Limited};
use hyper::body::{Body, Bytes};
use hyper::StatusCode;
use serde_json::json;
use std::error::Error as StdError;

use crate::catalog::{self, Topic, TopicSamples};
use crate::http::{self, HttpResponse};
use crate::logger;
use crate::solver::{self, SolveRequest};

const WELCOME: &str = "Welcome to ExamPrep API for GCSE & HKDSE (minimal demo).";

pub fn root(is_head: bool) -> HttpResponse {
    http::build_json_response(StatusCode::OK, &json!({ "message": WELCOME }), is_head)
}

/// Liveness probe
pub fn health(is_head: bool) -> HttpResponse {
    http::build_json_response(StatusCode::OK, &json!({ "status": "ok" }), is_head)
}

pub fn topics(is_head: bool) -> HttpResponse {
    http::build_json_response(
        StatusCode::OK,
        &json!({ "topics": catalog::topic_ids() }),
        is_head,
    )
}

pub fn samples(topic: &str, is_head: bool) -> HttpResponse {
    match topic.parse::<Topic>() {
        Ok(topic) => http::build_json_response(
            StatusCode::OK,
            &TopicSamples::for_topic(topic),
            is_head,
        ),
        Err(_) => http::build_error_response(StatusCode::NOT_FOUND, "Unknown topic"),
    }
}

/// Read the JSON body, resolve the input data and run the solver
pub async fn solve<B>(body: B, max_body_size: u64) -> HttpResponse
where
    B: Body,
    B::Error: Into<Box<dyn StdError + Send + Sync>>,
{
    let bytes = match read_body(body, max_body_size).await {
        Ok(bytes) => bytes,
        Err(resp) => return resp,
    };

    let request: SolveRequest = match serde_json::from_slice(&bytes) {
        Ok(r) => r,
        Err(e) => {
            return http::build_error_response(
                StatusCode::BAD_REQUEST,
                &format!("Invalid request: {e}"),
            );
        }
    };

    let source = match (&request.data, &request.sample_id) {
        (Some(_), _) => "inline".to_string(),
        (None, Some(id)) => format!("sample:{id}"),
        (None, None) => "defaults".to_string(),
    };
    logger::log_solve(request.topic.as_str(), &source);

    match solver::solve(&request) {
        Ok(solution) => http::build_json_response(StatusCode::OK, &solution, false),
        Err(e) if e.is_not_found() => {
            http::build_error_response(StatusCode::NOT_FOUND, &e.to_string())
        }
        Err(e) => http::build_error_response(StatusCode::BAD_REQUEST, &e.to_string()),
    }
}

/// Collect at most `max_body_size` bytes of request body
async fn read_body<B>(body: B, max_body_size: u64) -> Result<Bytes, HttpResponse>
where
    B: Body,
    B::Error: Into<Box<dyn StdError + Send + Sync>>,
{
    let limit = usize::try_from(max_body_size).unwrap_or(usize::MAX);
    match Limited::new(body, limit).collect().await {
        Ok(collected) => Ok(collected.to_bytes()),
        Err(e) if e.downcast_ref::<LengthLimitError>().is_some() => {
            logger::log_warning(&format!("Request body exceeded {max_body_size} bytes"));
            Err(http::build_413_response(max_body_size))
        }
        Err(e) => {
            logger::log_warning(&format!("Failed to read request body: {e}"));
            Err(http::build_error_response(
                StatusCode::BAD_REQUEST,
                "Failed to read request body",
            ))
        }
    }
}
