//! Baseline fixture replay
//!
//! Replays a fixed, ordered sequence of creation calls against the
//! freshly-reset API. The sequence is all-or-nothing: the first failing
//! step aborts the rest and the run. Because the database was just reset,
//! the resulting entity ids are deterministic (admin is always user 1, the
//! first user created here is always 2, and so on).

use crate::error::FixtureError;
use functest_http::{ApiClient, Role, StatusCode};
use serde_json::json;
use tracing::debug;

/// Recreate the baseline entities: users of each role, a project
/// hierarchy, a repository with a branch and a pull, and one agent.
pub async fn seed_baseline(client: &ApiClient, root: &str) -> Result<(), FixtureError> {
    create_users(client, root).await?;
    create_projects(client, root).await?;
    create_subprojects(client, root).await?;
    create_repos(client, root).await?;
    create_repo_branches(client, root).await?;
    create_repo_pulls(client, root).await?;
    create_agents(client, root).await?;
    debug!("baseline fixture replay complete");
    Ok(())
}

async fn post_created(
    client: &ApiClient,
    step: &'static str,
    url: &str,
    body: &serde_json::Value,
    role: Role,
) -> Result<(), FixtureError> {
    client
        .post_setup(url, &body.to_string(), StatusCode::CREATED, role)
        .await
        .map_err(|source| FixtureError::Seed { step, source })
}

// User id 1 (name "Admin", github "admin", access "admin") exists after
// every database reset; only the remaining roles are created here.
async fn create_users(client: &ApiClient, root: &str) -> Result<(), FixtureError> {
    let url = format!("{}/users", root);
    let users = [
        ("Operator User", "operator", "operator"),
        ("Commenter User", "commenter", "commenter"),
        ("Viewer User", "viewer", "viewer"),
        ("Disabled User", "disabled", "disabled"),
    ];

    for (name, github, access) in users {
        let body = json!({"name": name, "github": github, "access": access});
        post_created(client, "create users", &url, &body, Role::Admin).await?;
    }
    Ok(())
}

async fn create_projects(client: &ApiClient, root: &str) -> Result<(), FixtureError> {
    let url = format!("{}/projects", root);
    let body = json!({"name": "test", "fullname": "test project"});
    post_created(client, "create projects", &url, &body, Role::Operator).await
}

async fn create_subprojects(client: &ApiClient, root: &str) -> Result<(), FixtureError> {
    let url = format!("{}/subprojects", root);
    let body = json!({"project_id": 1, "name": "testsp", "fullname": "test subproject"});
    post_created(client, "create subprojects", &url, &body, Role::Operator).await
}

async fn create_repos(client: &ApiClient, root: &str) -> Result<(), FixtureError> {
    let url = format!("{}/repos", root);
    let body = json!({
        "subproject_id": 1,
        "name": "testrepo",
        "address": "https://github.com/example/testrepo.git"
    });
    post_created(client, "create repos", &url, &body, Role::Operator).await
}

async fn create_repo_branches(client: &ApiClient, root: &str) -> Result<(), FixtureError> {
    let url = format!("{}/repos/1/branches", root);
    let body = json!({"branch": "master"});
    post_created(client, "create repo branches", &url, &body, Role::Operator).await
}

async fn create_repo_pulls(client: &ApiClient, root: &str) -> Result<(), FixtureError> {
    let url = format!("{}/repos/1/branches/master", root);
    let body = json!({"commit": "b3b725b5cb5f30a27d7c53756831e788457ca16c"});
    post_created(client, "create repo pulls", &url, &body, Role::Operator).await
}

async fn create_agents(client: &ApiClient, root: &str) -> Result<(), FixtureError> {
    let url = format!("{}/agents", root);
    let body = json!({
        "name": "nop",
        "is_active": true,
        "address": "https://agent-nop",
        "port": 3010,
        "is_codereader": false,
        "is_spdxreader": false,
        "is_codewriter": false,
        "is_spdxwriter": false
    });
    post_created(client, "create agents", &url, &body, Role::Operator).await
}
