use crate::build_info::BuildInfo;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Status reported by every health endpoint while the service is serving.
pub const STATUS_UP: &str = "UP";

/// # Health Status Response
///
/// Status snapshot returned by `GET /api/health`. Constructed fresh on every
/// request, so `timestamp` always reflects the moment the check ran.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "UP",
///   "timestamp": "2024-03-10T15:30:45.123456789Z",
///   "version": "0.1.0",
///   "gitCommit": "3f9c2ab",
///   "gitBranch": "main"
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    #[schema(example = "UP")]
    pub status: String,
    #[schema(example = "2024-03-10T15:30:45.123456789Z")]
    pub timestamp: String,
    #[schema(example = "0.1.0")]
    pub version: String,
    #[schema(example = "3f9c2ab")]
    pub git_commit: String,
    #[schema(example = "main")]
    pub git_branch: String,
}

impl HealthResponse {
    pub fn up(build: &BuildInfo) -> Self {
        Self {
            status: STATUS_UP.to_string(),
            timestamp: now_iso8601(),
            version: build.version.clone(),
            git_commit: build.git_commit.clone(),
            git_branch: build.git_branch.clone(),
        }
    }
}

/// Liveness probe body served under `/actuator/health`.
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct ActuatorHealth {
    #[schema(example = "UP")]
    pub status: String,
}

impl ActuatorHealth {
    pub fn up() -> Self {
        Self {
            status: STATUS_UP.to_string(),
        }
    }
}

// UTC with a `Z` suffix; sub-second digits only as many as needed.
fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::AutoSi, true)
}
