//! JSON response writer.

use axum::body::Body;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::Response;
use serde::Serialize;

use crate::ServerResult;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Per-request response under construction.
///
/// The status line and content type are written before the body, so a failed serialization
/// leaves them in place with an empty body.
#[derive(Debug, Default)]
pub struct JsonWriter {
    response: Response,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl JsonWriter {
    /// Create a writer for a fresh response.
    pub fn new() -> Self {
        Self::default()
    }

    /// Write `value` as a JSON body with `status`.
    pub fn write_json<T: Serialize + ?Sized>(
        &mut self,
        status: StatusCode,
        value: &T,
    ) -> ServerResult<()> {
        self.response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        *self.response.status_mut() = status;

        let mut body = serde_json::to_vec(value)?;
        body.push(b'\n');
        *self.response.body_mut() = Body::from(body);

        Ok(())
    }

    /// Status currently set on the response.
    pub fn status(&self) -> StatusCode {
        self.response.status()
    }

    /// Finish and hand the response to the transport.
    pub fn into_response(self) -> Response {
        self.response
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
