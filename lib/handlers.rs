//! Request handlers.

use std::sync::Arc;

use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::response::Response;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::ServerResult;
use crate::constants::{EXAMPLE_NAME_PARAM, GITHUB_FILE_URL, GITHUB_REPO_URL, SLACK_NAME_PARAM};
use crate::query::parse_query;
use crate::response::JsonWriter;
use crate::time::{Clock, SystemClock, current_day};
use crate::validate::{FieldCheck, validate};

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// State shared by all requests. Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    clock: Arc<dyn Clock>,
}

/// Success body of the information endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoPayload {
    /// Validated `slack_name` parameter, as supplied.
    pub slack_name: String,

    /// Validated `example_name` parameter, as supplied.
    pub example_name: String,

    /// English weekday name of `utc_time` (e.g. "Monday").
    pub current_day: &'static str,

    /// Instant the request was served.
    pub utc_time: DateTime<Utc>,

    /// Source file backing this service.
    pub github_file_url: &'static str,

    /// Repository backing this service.
    pub github_repo_url: &'static str,

    /// HTTP status of the response.
    pub status_code: u16,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl AppState {
    /// Create state that reads time from `clock`.
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Arc::new(clock),
        }
    }
}

impl InfoPayload {
    /// Build the payload for a validated request observed at `now`.
    pub fn new(slack_name: String, example_name: String, now: DateTime<Utc>) -> Self {
        Self {
            slack_name,
            example_name,
            current_day: current_day(&now),
            utc_time: now,
            github_file_url: GITHUB_FILE_URL,
            github_repo_url: GITHUB_REPO_URL,
            status_code: StatusCode::OK.as_u16(),
        }
    }
}

//--------------------------------------------------------------------------------------------------
// Trait Implementations
//--------------------------------------------------------------------------------------------------

impl Default for AppState {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Handle `GET /api`.
pub async fn info_handler(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Response {
    let params = parse_query(query.as_deref().unwrap_or_default());
    let mut writer = JsonWriter::new();

    if let Err(e) = respond_info(&mut writer, state.clock.as_ref(), &params) {
        tracing::error!(status = %writer.status(), "Failed to write response: {}", e);
    }

    writer.into_response()
}

/// Validate the query and write either the payload or the validation errors.
pub fn respond_info(
    writer: &mut JsonWriter,
    clock: &dyn Clock,
    params: &[(String, String)],
) -> ServerResult<()> {
    let slack_name = query_param(params, SLACK_NAME_PARAM);
    let example_name = query_param(params, EXAMPLE_NAME_PARAM);

    let checks = [
        FieldCheck::not_blank(SLACK_NAME_PARAM, &slack_name),
        FieldCheck::not_blank(EXAMPLE_NAME_PARAM, &example_name),
    ];

    if let Some(errors) = validate(checks) {
        for error in &errors {
            tracing::debug!(field = %error.field, "Rejected request: {}", error);
        }
        return writer.write_json(StatusCode::UNPROCESSABLE_ENTITY, &errors);
    }

    let payload = InfoPayload::new(slack_name, example_name, clock.now());
    tracing::debug!(slack_name = %payload.slack_name, "Served info");
    writer.write_json(StatusCode::OK, &payload)
}

/// First value of `key` in the query, or an empty string if absent.
pub fn query_param(params: &[(String, String)], key: &str) -> String {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
        .unwrap_or_default()
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::FixedClock;
    use axum::http::header;
    use chrono::TimeZone;
    use serde_json::{Value, json};

    fn monday_noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 9, 11, 12, 0, 0).unwrap()
    }

    fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn raw_query(pairs: &[(&str, &str)]) -> Option<String> {
        if pairs.is_empty() {
            return None;
        }

        let encoded: Vec<_> = pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect();
        Some(encoded.join("&"))
    }

    async fn call(pairs: &[(&str, &str)]) -> (StatusCode, Value) {
        call_raw(raw_query(pairs)).await
    }

    async fn call_raw(query: Option<String>) -> (StatusCode, Value) {
        let state = AppState::new(FixedClock(monday_noon()));
        let response = info_handler(State(state), RawQuery(query)).await;
        let status = response.status();
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_query_param() {
        let query = params(&[("slack_name", "first"), ("slack_name", "second")]);
        assert_eq!(query_param(&query, "slack_name"), "first");
        assert_eq!(query_param(&query, "example_name"), "");
    }

    #[tokio::test]
    async fn test_valid_request() {
        let (status, body) = call(&[("slack_name", "alice"), ("example_name", "bob")]).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "slack_name": "alice",
                "example_name": "bob",
                "current_day": "Monday",
                "utc_time": "2023-09-11T12:00:00Z",
                "github_file_url": GITHUB_FILE_URL,
                "github_repo_url": GITHUB_REPO_URL,
                "status_code": 200
            })
        );
    }

    #[tokio::test]
    async fn test_values_are_not_trimmed() {
        let (status, body) = call(&[("slack_name", " alice "), ("example_name", "bob")]).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["slack_name"], " alice ");
    }

    #[tokio::test]
    async fn test_missing_params() {
        let (status, body) = call(&[]).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body,
            json!([
                { "field": "slack_name", "errmsg": "slack_name cannot be blank" },
                { "field": "example_name", "errmsg": "example_name cannot be blank" }
            ])
        );
    }

    #[tokio::test]
    async fn test_blank_combinations() {
        let cases = [
            ("alice", "bob", vec![]),
            ("", "bob", vec!["slack_name"]),
            ("alice", "", vec!["example_name"]),
            ("   ", "\t", vec!["slack_name", "example_name"]),
        ];

        for (slack, example, expected) in cases {
            let (status, body) = call(&[("slack_name", slack), ("example_name", example)]).await;
            if expected.is_empty() {
                assert_eq!(status, StatusCode::OK);
                continue;
            }

            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
            let fields: Vec<_> = body
                .as_array()
                .unwrap()
                .iter()
                .map(|e| e["field"].as_str().unwrap().to_string())
                .collect();
            assert_eq!(fields, expected);
        }
    }

    #[tokio::test]
    async fn test_malformed_escape_reads_as_blank() {
        let (status, body) = call_raw(Some("slack_name=%ZZ&example_name=b".into())).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body,
            json!([{ "field": "slack_name", "errmsg": "slack_name cannot be blank" }])
        );
    }

    #[tokio::test]
    async fn test_malformed_escape_falls_back_to_next_value() {
        let (status, body) =
            call_raw(Some("slack_name=%ZZ&slack_name=alice&example_name=b".into())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["slack_name"], "alice");
    }

    #[tokio::test]
    async fn test_plus_decodes_to_space() {
        let (status, body) = call_raw(Some("slack_name=+&example_name=b".into())).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body[0]["field"], "slack_name");

        let (status, body) = call_raw(Some("slack_name=a+b&example_name=c".into())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["slack_name"], "a b");
    }

    #[tokio::test]
    async fn test_urls_independent_of_input() {
        let (_, first) = call(&[("slack_name", "a"), ("example_name", "b")]).await;
        let (_, second) = call(&[("slack_name", "c"), ("example_name", "d")]).await;
        assert_eq!(first["github_file_url"], second["github_file_url"]);
        assert_eq!(first["github_repo_url"], second["github_repo_url"]);
    }

    #[tokio::test]
    async fn test_system_clock_day_matches_utc_now() {
        let state = AppState::default();
        let before = Utc::now();
        let query = raw_query(&[("slack_name", "a"), ("example_name", "b")]);
        let response = info_handler(State(state), RawQuery(query)).await;
        let after = Utc::now();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        let day = body["current_day"].as_str().unwrap();
        assert!(day == current_day(&before) || day == current_day(&after));
    }
}
