//! Codeforces problemset API client.

use reqwest::blocking::Client;
use serde::Deserialize;

use crate::domain::Problem;
use crate::error::AppError;

const BASE_URL: &str = "https://codeforces.com/api/problemset.problems";

pub struct CfClient {
    client: Client,
}

impl CfClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Fetch all problems from the problemset endpoint.
    ///
    /// One blocking GET, no retries, transport-default timeouts. A non-success
    /// HTTP status or an unreadable body is a transport failure; a body that
    /// decodes but reports a non-"OK" status is an API failure carrying the
    /// raw payload.
    pub fn fetch_problems(&self) -> Result<Vec<Problem>, AppError> {
        let resp = self
            .client
            .get(BASE_URL)
            .send()
            .map_err(|e| AppError::transport(format!("Codeforces request failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(AppError::transport(format!(
                "Codeforces request failed with status {}.",
                resp.status()
            )));
        }

        let body = resp
            .text()
            .map_err(|e| AppError::transport(format!("Failed to read Codeforces response: {e}")))?;

        decode_problems(&body)
    }
}

impl Default for CfClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct ProblemsetEnvelope {
    #[serde(default)]
    status: String,
    result: Option<ProblemsetResult>,
}

#[derive(Debug, Deserialize)]
struct ProblemsetResult {
    #[serde(default)]
    problems: Vec<Problem>,
}

/// Decode the response envelope, enforcing the `status == "OK"` contract.
///
/// Kept separate from the HTTP call so the envelope contract is testable
/// without a network.
pub fn decode_problems(body: &str) -> Result<Vec<Problem>, AppError> {
    let envelope: ProblemsetEnvelope = serde_json::from_str(body)
        .map_err(|e| AppError::transport(format!("Failed to parse Codeforces response: {e}")))?;

    if envelope.status != "OK" {
        return Err(AppError::Api {
            raw: body.to_string(),
        });
    }

    let result = envelope.result.ok_or_else(|| AppError::Api {
        raw: body.to_string(),
    })?;

    Ok(result.problems)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_ok_envelope() {
        let body = r#"{
            "status": "OK",
            "result": {
                "problems": [
                    {"rating": 1500, "tags": ["dp", "greedy"]},
                    {"tags": ["math"]},
                    {"rating": 800}
                ]
            }
        }"#;

        let problems = decode_problems(body).unwrap();
        assert_eq!(problems.len(), 3);
        assert_eq!(problems[0].rating, Some(1500));
        assert_eq!(problems[0].tags, vec!["dp", "greedy"]);
        assert_eq!(problems[1].rating, None);
        assert_eq!(problems[2].rating, Some(800));
        assert!(problems[2].tags.is_empty());
    }

    #[test]
    fn non_ok_status_is_an_api_error_with_raw_payload() {
        let body = r#"{"status": "FAILED", "comment": "problemset is down"}"#;
        let err = decode_problems(body).unwrap_err();
        match err {
            AppError::Api { raw } => assert!(raw.contains("problemset is down")),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn ok_status_without_result_is_an_api_error() {
        let body = r#"{"status": "OK"}"#;
        assert!(matches!(
            decode_problems(body).unwrap_err(),
            AppError::Api { .. }
        ));
    }

    #[test]
    fn garbage_body_is_a_transport_error() {
        assert!(matches!(
            decode_problems("<html>502</html>").unwrap_err(),
            AppError::Transport(_)
        ));
    }
}
