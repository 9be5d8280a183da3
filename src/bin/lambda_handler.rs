//! AWS Lambda handler for college comparisons
//!
//! Accepts a comparison request as JSON and returns one life-path projection per
//! college. Invoked directly the payload is the request itself; through a Lambda
//! Function URL the request arrives as the `body` string and the response is
//! wrapped in an HTTP envelope.

use lifepath::{
    assumptions::SimulationAssumptions,
    projection::LifePathResult,
    student::{CollegeRecord, StudentProfile},
    ComparisonRunner,
};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use log::{error, info};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

/// Input for one comparison
#[derive(Debug, Deserialize)]
pub struct ComparisonRequest {
    pub colleges: Vec<CollegeRecord>,

    pub profile: StudentProfile,

    /// Overrides for the modeling constants (default: built-in assumptions)
    #[serde(default)]
    pub assumptions: Option<SimulationAssumptions>,
}

/// Output from the comparison
#[derive(Debug, Serialize)]
pub struct ComparisonResponse {
    pub results: Vec<LifePathResult>,
    pub college_count: usize,
    pub execution_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ComparisonResponse {
    fn failed(message: String, execution_time_ms: u64) -> Self {
        Self {
            results: Vec::new(),
            college_count: 0,
            execution_time_ms,
            error: Some(message),
        }
    }
}

/// Run one request. Invalid input is reported in `error` rather than failing the invocation.
fn compare(runner: &ComparisonRunner, request: ComparisonRequest) -> ComparisonResponse {
    let start = std::time::Instant::now();

    let outcome = match request.assumptions {
        Some(assumptions) => {
            ComparisonRunner::with_cache(assumptions, Arc::clone(runner.career_cache()))
                .compare(&request.colleges, &request.profile)
        }
        None => runner.compare(&request.colleges, &request.profile),
    };
    let execution_time_ms = start.elapsed().as_millis() as u64;

    match outcome {
        Ok(results) => ComparisonResponse {
            college_count: results.len(),
            results,
            execution_time_ms,
            error: None,
        },
        Err(e) => {
            error!("Rejected comparison request: {e}");
            ComparisonResponse::failed(e.to_string(), execution_time_ms)
        }
    }
}

fn http_response(status: u16, body: &impl Serialize) -> Result<Value, Error> {
    Ok(json!({
        "statusCode": status,
        "headers": {
            "Content-Type": "application/json",
            "Access-Control-Allow-Origin": "*",
            "Access-Control-Allow-Methods": "POST, OPTIONS",
            "Access-Control-Allow-Headers": "Content-Type",
        },
        "body": serde_json::to_string(body)?,
    }))
}

/// Lambda handler function
async fn handler(runner: Arc<ComparisonRunner>, event: LambdaEvent<Value>) -> Result<Value, Error> {
    let (payload, _context) = event.into_parts();

    // Function URL invocation: the request is a JSON string in `body`
    if let Some(body) = payload.get("body").and_then(Value::as_str) {
        let method = payload
            .pointer("/requestContext/http/method")
            .and_then(Value::as_str)
            .unwrap_or("POST");
        if method == "OPTIONS" {
            return http_response(200, &json!({}));
        }

        return match serde_json::from_str::<ComparisonRequest>(body) {
            Ok(request) => http_response(200, &compare(&runner, request)),
            Err(e) => http_response(400, &ComparisonResponse::failed(format!("Invalid request: {e}"), 0)),
        };
    }

    let response = match serde_json::from_value::<ComparisonRequest>(payload) {
        Ok(request) => compare(&runner, request),
        Err(e) => ComparisonResponse::failed(format!("Invalid request: {e}"), 0),
    };
    info!(
        "Returned {} result(s) in {}ms",
        response.college_count, response.execution_time_ms
    );
    Ok(serde_json::to_value(response)?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    // One career cache for the lifetime of the execution environment
    let runner = Arc::new(ComparisonRunner::new());
    run(service_fn(move |event: LambdaEvent<Value>| {
        let runner = Arc::clone(&runner);
        async move { handler(runner, event).await }
    }))
    .await
}
