//! Remote database reset

use crate::error::FixtureError;
use functest_http::{ApiClient, Role, StatusCode};
use tracing::debug;

/// Ask the API to re-initialize its database to a clean state holding only
/// the default admin identity (user id 1). Expects an empty 204 response;
/// anything else is fatal to the run.
pub async fn reset_db(client: &ApiClient, api_root: &str) -> Result<(), FixtureError> {
    debug!("requesting database reset");
    client
        .post_setup(
            &format!("{}/admin/db", api_root),
            r#"{"command": "resetDB"}"#,
            StatusCode::NO_CONTENT,
            Role::Admin,
        )
        .await
        .map_err(FixtureError::DbReset)
}
