//! Constants for info-server.
//!
//! Route, query parameter and default bind values, plus the fixed project URLs
//! reported in every successful response.

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

/// Path of the information endpoint.
pub const API_PATH: &str = "/api";

/// Query parameter carrying the Slack name.
pub const SLACK_NAME_PARAM: &str = "slack_name";

/// Query parameter carrying the example name.
pub const EXAMPLE_NAME_PARAM: &str = "example_name";

/// Default host to bind (all interfaces).
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default port to listen on.
pub const DEFAULT_PORT: u16 = 4000;

/// Source file backing this service.
pub const GITHUB_FILE_URL: &str = "https://github.com/Huey-Emma/task-1/blob/main/main.go";

/// Repository backing this service.
pub const GITHUB_REPO_URL: &str = "https://github.com/Huey-Emma/task-1";
